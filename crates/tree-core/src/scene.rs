//! Scene assembly: the four decoration groups, their materials, lights and
//! the ambient pieces around the tree.

use crate::animation::animate_group;
use crate::clock::FrameTime;
use crate::config::SceneConfig;
use crate::constants::*;
use crate::error::ConfigError;
use crate::layout::{self, Category};
use crate::particle::{GroupKind, ParticleGroup};
use crate::state::MorphState;
use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Surface response for one group, applied on top of per-instance colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    pub fn for_group(kind: GroupKind) -> Self {
        match kind {
            GroupKind::Leaves => Self {
                emissive: hex_rgb(EMERALD_DEEP),
                emissive_intensity: 0.1,
                metalness: 0.1,
                roughness: 0.2,
            },
            GroupKind::Ornaments => Self {
                emissive: hex_rgb(GOLD_CHAMPAGNE),
                emissive_intensity: 0.5,
                metalness: 1.0,
                roughness: 0.1,
            },
            GroupKind::Gifts => Self {
                emissive: [0.0; 3],
                emissive_intensity: 0.0,
                metalness: 0.4,
                roughness: 0.3,
            },
            GroupKind::Star => Self {
                emissive: hex_rgb(GOLD_METALLIC),
                emissive_intensity: 1.0,
                metalness: 1.0,
                roughness: 0.1,
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    /// Distance at which the light fades out; `0.0` means unbounded.
    pub range: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Lighting {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub points: [PointLight; 3],
    pub fog_color: [f32; 3],
    pub fog_near: f32,
    pub fog_far: f32,
    pub clear_color: [f32; 3],
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient_color: hex_rgb(EMERALD_DEEP),
            ambient_intensity: AMBIENT_INTENSITY,
            points: [
                PointLight {
                    position: Vec3::from(KEY_LIGHT_POSITION),
                    color: hex_rgb(GOLD_CHAMPAGNE),
                    intensity: KEY_LIGHT_INTENSITY,
                    range: 0.0,
                },
                PointLight {
                    position: Vec3::from(FILL_LIGHT_POSITION),
                    color: hex_rgb(EMERALD_LIGHT),
                    intensity: FILL_LIGHT_INTENSITY,
                    range: 0.0,
                },
                // warm glow from below for the gifts
                PointLight {
                    position: Vec3::from(WARM_LIGHT_POSITION),
                    color: hex_rgb(RED_BRIGHT),
                    intensity: WARM_LIGHT_INTENSITY,
                    range: WARM_LIGHT_RANGE,
                },
            ],
            fog_color: hex_rgb(BG_END),
            fog_near: FOG_NEAR,
            fog_far: FOG_FAR,
            clear_color: hex_rgb(BG_START),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    pub origin: Vec3,
    pub phase: f32,
}

/// Background stars, floating motes and the ground plane.
#[derive(Clone, Debug)]
pub struct Ambient {
    pub stars: Vec<Vec3>,
    pub sparkles: Vec<Sparkle>,
    pub ground_y: f32,
}

impl Ambient {
    fn generate<R: Rng + ?Sized>(tree_height: f32, rng: &mut R) -> Self {
        let stars = (0..STARFIELD_COUNT)
            .map(|_| {
                let dir = layout::scatter_point(1.0, rng).normalize_or_zero();
                let dir = if dir == Vec3::ZERO { Vec3::Y } else { dir };
                dir * (STARFIELD_RADIUS + rng.gen::<f32>() * STARFIELD_DEPTH)
            })
            .collect();
        let half = SPARKLE_EXTENT / 2.0;
        let sparkles = (0..SPARKLE_COUNT)
            .map(|_| Sparkle {
                origin: Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                ),
                phase: rng.gen::<f32>() * TAU,
            })
            .collect();
        Self {
            stars,
            sparkles,
            ground_y: -tree_height / 2.0 - GROUND_DROP,
        }
    }

    /// Where a mote drifts to at `elapsed` seconds.
    pub fn sparkle_position(sparkle: &Sparkle, elapsed: f32) -> Vec3 {
        let t = elapsed * SPARKLE_SPEED + sparkle.phase;
        sparkle.origin
            + Vec3::new(
                t.cos() * SPARKLE_SWAY * 0.5,
                (t * 1.3).sin() * SPARKLE_SWAY,
                (t * 0.7).sin() * SPARKLE_SWAY * 0.5,
            )
    }
}

/// Everything the renderer draws, plus the morph state that drives it.
#[derive(Clone, Debug)]
pub struct Scene {
    state: MorphState,
    groups: Vec<ParticleGroup>,
    ambient: Ambient,
    lighting: Lighting,
    last_frame: FrameTime,
}

/// Derive an independent RNG stream per group from the base seed so each
/// group can be reproduced on its own.
fn stream_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => {
            let mix = seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            StdRng::seed_from_u64(mix)
        }
        None => StdRng::from_entropy(),
    }
}

impl Scene {
    pub fn new(config: &SceneConfig) -> Result<Self, ConfigError> {
        let leaves = layout::generate(
            &config.leaf_layout(),
            Category::Leaf,
            &mut stream_rng(config.seed, 0),
        )?;
        let ornaments = layout::generate(
            &config.ornament_layout(),
            Category::Ornament,
            &mut stream_rng(config.seed, 1),
        )?;
        let gifts = layout::generate(
            &config.gift_layout(),
            Category::Gift,
            &mut stream_rng(config.seed, 2),
        )?;
        let star = layout::star(config.tree_height);
        let ambient = Ambient::generate(config.tree_height, &mut stream_rng(config.seed, 3));

        let groups = vec![
            ParticleGroup::new(GroupKind::Leaves, leaves),
            ParticleGroup::new(GroupKind::Ornaments, ornaments),
            ParticleGroup::new(GroupKind::Gifts, gifts),
            ParticleGroup::new(GroupKind::Star, vec![star]),
        ];
        log::info!(
            "[scene] leaves={} ornaments={} gifts={} star=1 seeded={}",
            groups[0].len(),
            groups[1].len(),
            groups[2].len(),
            config.seed.is_some()
        );
        Ok(Self {
            state: MorphState::default(),
            groups,
            ambient,
            lighting: Lighting::default(),
            last_frame: FrameTime::default(),
        })
    }

    #[inline]
    pub fn state(&self) -> MorphState {
        self.state
    }

    pub fn set_state(&mut self, state: MorphState) {
        if self.state != state {
            log::info!("[toggle] {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    /// Flip between scattered and assembled; returns the new state.
    pub fn toggle(&mut self) -> MorphState {
        self.set_state(self.state.toggled());
        self.state
    }

    /// One animation pass over every group.
    pub fn update(&mut self, frame: FrameTime) {
        let state = self.state;
        for group in &mut self.groups {
            animate_group(group, state, frame);
        }
        self.last_frame = frame;
    }

    /// Groups in draw order: leaves, ornaments, gifts, star.
    #[inline]
    pub fn groups(&self) -> &[ParticleGroup] {
        &self.groups
    }

    #[inline]
    pub fn group(&self, kind: GroupKind) -> &ParticleGroup {
        &self.groups[kind as usize]
    }

    #[inline]
    pub fn ambient(&self) -> &Ambient {
        &self.ambient
    }

    #[inline]
    pub fn lighting(&self) -> &Lighting {
        &self.lighting
    }

    /// Seconds since the clock started, as of the last update.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.last_frame.elapsed
    }

    /// Scene-to-world matrix; the whole arrangement sits slightly low.
    #[inline]
    pub fn root_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, SCENE_OFFSET_Y, 0.0))
    }
}
