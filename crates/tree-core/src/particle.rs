//! Per-particle records and the fixed-size groups that own them.
//!
//! A [`ParticleGroup`] is the in-memory store the animation driver walks every
//! frame. Targets, speed, scale and colour are fixed once a record is built;
//! only the `current` pose moves, and only through [`crate::animation`].

use glam::{EulerRot, Mat4, Quat, Vec3};

/// A position plus orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Build from Euler angles applied in X, Y, Z order.
    pub fn from_euler(position: Vec3, angles: Vec3) -> Self {
        Self {
            position,
            rotation: euler_to_quat(angles),
        }
    }
}

#[inline]
pub fn euler_to_quat(angles: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z)
}

#[derive(Clone, Debug)]
pub struct ParticleRecord {
    id: u32,
    tree: Pose,
    scatter: Pose,
    pub(crate) current: Pose,
    speed: f32,
    scale: f32,
    color: [f32; 3],
}

impl ParticleRecord {
    /// New record resting on its scatter target.
    pub fn new(id: u32, tree: Pose, scatter: Pose, speed: f32, scale: f32, color: [f32; 3]) -> Self {
        Self {
            id,
            tree,
            scatter,
            current: scatter,
            speed,
            scale,
            color,
        }
    }

    /// Override the starting pose. Used for hand-placed records whose initial
    /// orientation differs from their scatter target.
    pub fn starting_at(mut self, current: Pose) -> Self {
        self.current = current;
        self
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }
    #[inline]
    pub fn tree_target(&self) -> &Pose {
        &self.tree
    }
    #[inline]
    pub fn scatter_target(&self) -> &Pose {
        &self.scatter
    }
    #[inline]
    pub fn current(&self) -> &Pose {
        &self.current
    }
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }
    #[inline]
    pub fn color(&self) -> [f32; 3] {
        self.color
    }
}

/// The four decorative groups of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Leaves,
    Ornaments,
    Gifts,
    Star,
}

impl GroupKind {
    pub const ALL: [GroupKind; 4] = [
        GroupKind::Leaves,
        GroupKind::Ornaments,
        GroupKind::Gifts,
        GroupKind::Star,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GroupKind::Leaves => "leaves",
            GroupKind::Ornaments => "ornaments",
            GroupKind::Gifts => "gifts",
            GroupKind::Star => "star",
        }
    }
}

/// Fixed-size particle array plus its render-facing buffers.
///
/// `transforms()` and `colors()` are indexed like `particles()` and keep the
/// same length for the lifetime of the group.
#[derive(Clone, Debug)]
pub struct ParticleGroup {
    kind: GroupKind,
    pub(crate) particles: Vec<ParticleRecord>,
    pub(crate) transforms: Vec<Mat4>,
    colors: Vec<[f32; 3]>,
    pub(crate) yaw: f32,
}

impl ParticleGroup {
    pub fn new(kind: GroupKind, particles: Vec<ParticleRecord>) -> Self {
        let transforms = particles
            .iter()
            .map(|p| compose(&p.current, p.scale))
            .collect();
        let colors = particles.iter().map(|p| p.color).collect();
        Self {
            kind,
            particles,
            transforms,
            colors,
            yaw: 0.0,
        }
    }

    #[inline]
    pub fn kind(&self) -> GroupKind {
        self.kind
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
    #[inline]
    pub fn particles(&self) -> &[ParticleRecord] {
        &self.particles
    }
    /// Per-instance translation, rotation and uniform scale, in group space.
    #[inline]
    pub fn transforms(&self) -> &[Mat4] {
        &self.transforms
    }
    #[inline]
    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }
    /// Accumulated idle rotation of the whole group around +Y, in radians, kept in `[0, 2π)`.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }
    /// Group-to-scene matrix carrying the idle yaw.
    #[inline]
    pub fn container_matrix(&self) -> Mat4 {
        Mat4::from_rotation_y(self.yaw)
    }
}

/// Compose translation, rotation and uniform scale into one matrix.
#[inline]
pub fn compose(pose: &Pose, scale: f32) -> Mat4 {
    Mat4::from_scale_rotation_translation(Vec3::splat(scale), pose.rotation, pose.position)
}
