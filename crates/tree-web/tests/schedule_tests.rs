// Host-side tests for the per-frame gating.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod schedule {
    include!("../src/schedule.rs");
}

use schedule::*;

#[test]
fn frames_are_skipped_until_the_gpu_exists() {
    assert_eq!(plan_frame(None, (800, 600)), FrameStep::Skip);
    assert_eq!(plan_frame(None, (0, 0)), FrameStep::Skip);
}

#[test]
fn matching_size_draws_without_reconfiguring() {
    assert_eq!(
        plan_frame(Some((800, 600)), (800, 600)),
        FrameStep::Draw { resize: None }
    );
}

#[test]
fn changed_canvas_size_reconfigures_first() {
    assert_eq!(
        plan_frame(Some((800, 600)), (1024, 768)),
        FrameStep::Draw { resize: Some((1024, 768)) }
    );
}

#[test]
fn zero_sized_canvas_keeps_the_old_surface() {
    for canvas in [(0, 600), (800, 0), (0, 0)] {
        assert_eq!(
            plan_frame(Some((800, 600)), canvas),
            FrameStep::Draw { resize: None }
        );
    }
}
