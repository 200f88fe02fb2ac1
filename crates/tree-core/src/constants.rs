// Shared visual and animation tuning constants used by both web and native frontends.

// Palette (sRGB hex)
pub const EMERALD_DEEP: u32 = 0x001A05;
pub const EMERALD_MID: u32 = 0x046307;
pub const EMERALD_LIGHT: u32 = 0x1E8F23;
pub const GOLD_METALLIC: u32 = 0xFFD700;
pub const GOLD_CHAMPAGNE: u32 = 0xF7E7CE;
pub const GOLD_ROSE: u32 = 0xE6BE8A;
pub const RED_VELVET: u32 = 0x8B0000; // deep red for gifts
pub const RED_BRIGHT: u32 = 0xD40000;
pub const BG_START: u32 = 0x000000;
pub const BG_END: u32 = 0x011404;

// Scene layout
pub const LEAF_COUNT: usize = 4500;
pub const ORNAMENT_COUNT: usize = 200;
pub const GIFT_COUNT: usize = 60;
pub const TREE_HEIGHT: f32 = 15.0;
pub const TREE_RADIUS: f32 = 5.0;
pub const SCATTER_RADIUS: f32 = 25.0;
pub const SCENE_OFFSET_Y: f32 = -2.0; // whole scene sits slightly below the camera axis

// Per-group layout tweaks relative to the tree radius
pub const ORNAMENT_RADIUS_FACTOR: f32 = 0.9;
pub const GIFT_RADIUS_FACTOR: f32 = 0.8;
pub const GIFT_MIN_HEIGHT_FRAC: f32 = 0.05; // keep gifts in the lower part of the cone
pub const GIFT_MAX_HEIGHT_FRAC: f32 = 0.8;

// Tree-layout jitter per category (full width of the uniform offset)
pub const LEAF_JITTER: f32 = 0.5;
pub const ORNAMENT_JITTER: f32 = 0.2;
pub const GIFT_JITTER: f32 = 0.8;

// Per-particle interpolation rate range [min, max)
pub const SPEED_MIN: f32 = 0.02;
pub const SPEED_MAX: f32 = 0.06;

// Star (single hand-placed particle)
pub const STAR_ID: u32 = 9999;
pub const STAR_TOP_OFFSET: f32 = 0.5; // above height / 2
pub const STAR_SCATTER_HEIGHT: f32 = 40.0;
pub const STAR_SPEED: f32 = 0.03;
pub const STAR_SCALE: f32 = 1.5;

// Animation
pub const BASELINE_FPS: f32 = 60.0; // interpolation rates are tuned against this
pub const BOB_AMPLITUDE: f32 = 0.02; // assembled vertical bob
pub const BOB_PHASE_PER_ID: f32 = 0.1;
pub const BOB_TIME_SCALE: f32 = 1.0;
pub const DRIFT_AMPLITUDE: f32 = 0.01; // scattered float
pub const DRIFT_PHASE_X_PER_ID: f32 = 1.0;
pub const DRIFT_PHASE_Y_PER_ID: f32 = 0.5;
pub const DRIFT_TIME_SCALE: f32 = 0.5;
pub const ASSEMBLED_YAW_RATE: f32 = 0.05; // rad/s, whole group
pub const SCATTERED_YAW_RATE: f32 = 0.01; // rad/s, whole group

// Camera
pub const CAMERA_POSITION: [f32; 3] = [0.0, 0.0, 35.0];
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.2;
pub const KEY_LIGHT_POSITION: [f32; 3] = [10.0, 20.0, 10.0];
pub const KEY_LIGHT_INTENSITY: f32 = 1.6;
pub const FILL_LIGHT_POSITION: [f32; 3] = [-10.0, 5.0, -10.0];
pub const FILL_LIGHT_INTENSITY: f32 = 0.8;
pub const WARM_LIGHT_POSITION: [f32; 3] = [0.0, -5.0, 5.0];
pub const WARM_LIGHT_INTENSITY: f32 = 0.6;
pub const WARM_LIGHT_RANGE: f32 = 15.0;

// Fog (linear, world units from the camera)
pub const FOG_NEAR: f32 = 20.0;
pub const FOG_FAR: f32 = 90.0;

// Ambient effects
pub const STARFIELD_COUNT: usize = 5000;
pub const STARFIELD_RADIUS: f32 = 100.0;
pub const STARFIELD_DEPTH: f32 = 50.0;
pub const STARFIELD_SCALE: f32 = 0.35;
pub const SPARKLE_COUNT: usize = 500;
pub const SPARKLE_EXTENT: f32 = 20.0; // edge of the cube the motes live in
pub const SPARKLE_SCALE: f32 = 0.06;
pub const SPARKLE_SPEED: f32 = 0.4;
pub const SPARKLE_OPACITY: f32 = 0.5;
pub const SPARKLE_SWAY: f32 = 0.5; // peak drift of a mote from its origin
pub const GROUND_SIZE: f32 = 100.0;
pub const GROUND_DROP: f32 = 1.0; // below the base of the tree

/// Convert a packed `0xRRGGBB` colour into normalized RGB components.
#[inline]
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}
