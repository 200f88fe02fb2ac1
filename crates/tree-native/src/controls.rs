//! Mapping from window input to scene commands.

use winit::event::MouseButton;
use winit::keyboard::{Key, NamedKey};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Toggle,
    Quit,
}

pub fn command_for_key(key: &Key) -> Option<Command> {
    match key {
        Key::Named(NamedKey::Space | NamedKey::Enter) => Some(Command::Toggle),
        Key::Named(NamedKey::Escape) => Some(Command::Quit),
        Key::Character(c) if c.as_str() == " " => Some(Command::Toggle),
        _ => None,
    }
}

pub fn command_for_button(button: MouseButton) -> Option<Command> {
    (button == MouseButton::Left).then_some(Command::Toggle)
}

/// Parse the `TREE_SEED` override. Invalid values fall back to entropy.
pub fn parse_seed(raw: Option<&str>) -> Option<u64> {
    let raw = raw?.trim();
    match raw.parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("[scene] ignoring TREE_SEED={raw:?}: {e}");
            None
        }
    }
}
