//! Procedural target layouts.
//!
//! Every generated particle gets two destinations: a spot on a golden-angle
//! spiral wrapped around a cone (the tree) and a uniformly distributed point
//! inside a sphere (the scattered cloud). Visual attributes are rolled here
//! too, so a record is complete and immutable once it leaves this module.

use crate::config::LayoutParams;
use crate::constants::*;
use crate::error::ConfigError;
use crate::particle::{ParticleRecord, Pose};
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// `π(3 - √5)`, the golden angle in radians.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

/// Kind of generated decoration. Drives jitter, orientation and palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Leaf,
    Ornament,
    Gift,
}

impl Category {
    #[inline]
    pub fn jitter(self) -> f32 {
        match self {
            Category::Leaf => LEAF_JITTER,
            Category::Ornament => ORNAMENT_JITTER,
            Category::Gift => GIFT_JITTER,
        }
    }

    /// Uniform scale range `[min, max)`.
    #[inline]
    pub fn scale_range(self) -> (f32, f32) {
        match self {
            Category::Leaf => (0.8, 1.3),
            Category::Ornament => (0.3, 0.7),
            Category::Gift => (0.5, 0.9),
        }
    }
}

/// Normalized height of particle `index` within the params' height window.
#[inline]
pub fn height_fraction(index: usize, params: &LayoutParams) -> f32 {
    let t = if params.count == 0 {
        0.0
    } else {
        index as f32 / params.count as f32
    };
    params.min_height_frac + t * (params.max_height_frac - params.min_height_frac)
}

/// Un-jittered spiral point for `index` on the cone.
///
/// The taper uses the full-tree height fraction, so a restricted window sits
/// at the radii it would have on the whole cone.
pub fn cone_point(index: usize, params: &LayoutParams) -> Vec3 {
    let y_frac = height_fraction(index, params);
    let y = (y_frac - 0.5) * params.height;
    let r = params.radius * (1.0 - y_frac);
    let angle = index as f32 * GOLDEN_ANGLE;
    Vec3::new(r * angle.cos(), y, r * angle.sin())
}

/// Uniform random point inside a sphere of `radius` (uniform by volume).
pub fn scatter_point<R: Rng + ?Sized>(radius: f32, rng: &mut R) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    let r = radius * rng.gen::<f32>().cbrt();
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Independent uniform Euler angles in `[0, 2π)` on every axis.
pub fn random_angles<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.gen::<f32>() * TAU, rng.gen::<f32>() * TAU, rng.gen::<f32>() * TAU)
}

/// Tree-layout Euler angles for a particle whose un-jittered spiral point is `spiral`.
///
/// Leaves face outward (yaw) with a random pitch in `[0, π)` and roll in
/// `[0, 2π)`; gifts tumble in `[0, π)` on every axis; ornaments only face outward.
pub fn tree_angles<R: Rng + ?Sized>(category: Category, spiral: Vec3, rng: &mut R) -> Vec3 {
    let outward = spiral.x.atan2(spiral.z);
    match category {
        Category::Leaf => Vec3::new(rng.gen::<f32>() * PI, outward, rng.gen::<f32>() * TAU),
        Category::Gift => Vec3::new(
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
            rng.gen::<f32>() * PI,
        ),
        Category::Ornament => Vec3::new(0.0, outward, 0.0),
    }
}

/// Roll a colour from the category's weighted palette.
pub fn pick_color<R: Rng + ?Sized>(category: Category, rng: &mut R) -> [f32; 3] {
    let roll: f32 = rng.gen();
    let hex = match category {
        Category::Ornament => {
            if roll > 0.5 {
                GOLD_METALLIC
            } else {
                GOLD_ROSE
            }
        }
        Category::Gift => {
            if roll > 0.4 {
                RED_VELVET
            } else {
                GOLD_METALLIC
            }
        }
        Category::Leaf => {
            if roll > 0.95 {
                GOLD_METALLIC // rare golden leaf
            } else if roll > 0.7 {
                EMERALD_LIGHT
            } else {
                EMERALD_MID
            }
        }
    };
    hex_rgb(hex)
}

/// Generate `params.count` particles of one category, resting on their scatter targets.
pub fn generate<R: Rng + ?Sized>(
    params: &LayoutParams,
    category: Category,
    rng: &mut R,
) -> Result<Vec<ParticleRecord>, ConfigError> {
    params.validate()?;
    let jitter = category.jitter();
    let (scale_min, scale_max) = category.scale_range();

    let particles = (0..params.count)
        .map(|i| {
            let spiral = cone_point(i, params);
            let tree_pos = Vec3::new(
                spiral.x + (rng.gen::<f32>() - 0.5) * jitter,
                spiral.y,
                spiral.z + (rng.gen::<f32>() - 0.5) * jitter,
            );
            let tree = Pose::from_euler(tree_pos, tree_angles(category, spiral, rng));

            let scatter_pos = scatter_point(params.scatter_radius, rng);
            let scatter = Pose::from_euler(scatter_pos, random_angles(rng));

            let color = pick_color(category, rng);
            let scale = scale_min + rng.gen::<f32>() * (scale_max - scale_min);
            let speed = SPEED_MIN + rng.gen::<f32>() * (SPEED_MAX - SPEED_MIN);

            ParticleRecord::new(i as u32, tree, scatter, speed, scale, color)
        })
        .collect();
    Ok(particles)
}

/// The hand-placed star crowning a tree of the given height.
pub fn star(tree_height: f32) -> ParticleRecord {
    let tree = Pose::from_euler(
        Vec3::new(0.0, tree_height / 2.0 + STAR_TOP_OFFSET, 0.0),
        Vec3::ZERO,
    );
    let scatter_pos = Vec3::new(0.0, STAR_SCATTER_HEIGHT, 0.0);
    let scatter = Pose::from_euler(scatter_pos, Vec3::new(PI / 2.0, 0.0, 0.0));
    ParticleRecord::new(
        STAR_ID,
        tree,
        scatter,
        STAR_SPEED,
        STAR_SCALE,
        hex_rgb(GOLD_METALLIC),
    )
    .starting_at(Pose::from_euler(scatter_pos, Vec3::ZERO))
}
