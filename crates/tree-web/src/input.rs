// Pure keyboard mapping; kept free of web-sys so host tests can include it.

/// Keys that flip the tree between scattered and assembled.
#[inline]
pub fn is_toggle_key(key: &str) -> bool {
    matches!(key, " " | "Spacebar" | "Enter")
}

/// Ignore key presses aimed at the toggle button itself; the browser already
/// turns those into a click.
#[inline]
pub fn should_handle_keydown(key: &str, repeat: bool, target_is_button: bool) -> bool {
    is_toggle_key(key) && !repeat && !target_is_button
}
