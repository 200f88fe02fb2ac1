//! Per-frame morph animation.
//!
//! Each pass walks every particle of a group, eases its `current` pose toward
//! the target selected by the morph state and writes the composed instance
//! transform. There is no convergence cut-off: every particle is recomputed
//! every frame.

use crate::clock::FrameTime;
use crate::constants::*;
use crate::particle::{compose, ParticleGroup, ParticleRecord, Pose};
use crate::state::MorphState;
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Fraction of the remaining distance covered this frame.
///
/// Scaled against a 60 Hz baseline so the motion is roughly independent of
/// the actual frame rate.
#[inline]
pub fn interpolation_factor(speed: f32, delta: f32) -> f32 {
    (speed * delta * BASELINE_FPS).clamp(0.0, 1.0)
}

/// Ease `current` toward `target` by `t` (lerp for position, slerp for rotation).
#[inline]
pub fn step_toward(current: &mut Pose, target: &Pose, t: f32) {
    current.position = current.position.lerp(target.position, t);
    current.rotation = current.rotation.slerp(target.rotation, t).normalize();
}

/// Additive idle motion for a particle. Never written back into `current`.
pub fn idle_offset(state: MorphState, id: u32, elapsed: f32) -> Vec3 {
    let id = id as f32;
    match state {
        MorphState::Assembled => {
            let t = elapsed * BOB_TIME_SCALE;
            Vec3::new(0.0, (t + id * BOB_PHASE_PER_ID).sin() * BOB_AMPLITUDE, 0.0)
        }
        MorphState::Scattered => {
            let t = elapsed * DRIFT_TIME_SCALE;
            Vec3::new(
                (t + id * DRIFT_PHASE_X_PER_ID).sin() * DRIFT_AMPLITUDE,
                (t + id * DRIFT_PHASE_Y_PER_ID).cos() * DRIFT_AMPLITUDE,
                0.0,
            )
        }
    }
}

/// Idle yaw speed of a whole group, in radians per second.
#[inline]
pub fn group_yaw_rate(state: MorphState) -> f32 {
    match state {
        MorphState::Assembled => ASSEMBLED_YAW_RATE,
        MorphState::Scattered => SCATTERED_YAW_RATE,
    }
}

#[inline]
fn active_target(particle: &ParticleRecord, state: MorphState) -> Pose {
    match state {
        MorphState::Assembled => *particle.tree_target(),
        MorphState::Scattered => *particle.scatter_target(),
    }
}

/// Advance one particle and return its instance transform for this frame.
pub fn step_particle(particle: &mut ParticleRecord, state: MorphState, frame: FrameTime) -> Mat4 {
    let target = active_target(particle, state);
    let t = interpolation_factor(particle.speed(), frame.delta);
    step_toward(&mut particle.current, &target, t);

    let mut shown = particle.current;
    shown.position += idle_offset(state, particle.id(), frame.elapsed);
    compose(&shown, particle.scale())
}

/// Run one animation pass over a group and spin its container.
pub fn animate_group(group: &mut ParticleGroup, state: MorphState, frame: FrameTime) {
    let ParticleGroup {
        particles,
        transforms,
        yaw,
        ..
    } = group;
    for (particle, slot) in particles.iter_mut().zip(transforms.iter_mut()) {
        *slot = step_particle(particle, state, frame);
    }
    // wrapped so the per-frame step never drops below f32 resolution
    *yaw = (*yaw + frame.delta * group_yaw_rate(state)).rem_euclid(TAU);
}
