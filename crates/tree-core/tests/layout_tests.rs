// Tests for the tree and scatter layout generator.

use glam::{EulerRot, Quat, Vec2, Vec3};
use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::constants::*;
use tree_core::layout::{self, Category};
use tree_core::{ConfigError, LayoutParams};

fn radial(p: Vec3) -> f32 {
    Vec2::new(p.x, p.z).length()
}

/// Re-draw the tree angles `generate` used, following its per-particle draw order.
fn replay_tree_angles(params: &LayoutParams, category: Category, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..params.count)
        .map(|i| {
            let _jitter: (f32, f32) = (rng.gen(), rng.gen());
            let angles = layout::tree_angles(category, layout::cone_point(i, params), &mut rng);
            layout::scatter_point(params.scatter_radius, &mut rng);
            layout::random_angles(&mut rng);
            layout::pick_color(category, &mut rng);
            let _scale_speed: (f32, f32) = (rng.gen(), rng.gen());
            angles
        })
        .collect()
}

fn same_rotation(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - 1e-5
}

#[test]
fn cone_base_has_full_radius_and_apex_has_none() {
    let params = LayoutParams::new(100, 5.0, 15.0, 25.0);
    let base = layout::cone_point(0, &params);
    assert!((radial(base) - 5.0).abs() < 1e-5);
    assert!((base.y + 7.5).abs() < 1e-5);

    let apex_params = LayoutParams::new(10, 5.0, 15.0, 25.0).with_height_window(1.0, 1.0);
    for i in 0..10 {
        let apex = layout::cone_point(i, &apex_params);
        assert!(radial(apex) < 1e-5);
        assert!((apex.y - 7.5).abs() < 1e-5);
    }
}

#[test]
fn radius_tapers_linearly_with_height() {
    let params = LayoutParams::new(500, 5.0, 15.0, 25.0);
    for i in 0..params.count {
        let y_frac = layout::height_fraction(i, &params);
        let p = layout::cone_point(i, &params);
        assert!((radial(p) - 5.0 * (1.0 - y_frac)).abs() < 1e-4, "index {i}");
        assert!((p.y - (y_frac - 0.5) * 15.0).abs() < 1e-4);
    }
}

#[test]
fn single_ornament_sits_at_base_of_cone() {
    let params = LayoutParams::new(1, 5.0, 15.0, 25.0);
    let p = layout::cone_point(0, &params);
    assert!((p - Vec3::new(5.0, -7.5, 0.0)).length() < 1e-5);

    let mut rng = StdRng::seed_from_u64(11);
    let records = layout::generate(&params, Category::Ornament, &mut rng).unwrap();
    assert_eq!(records.len(), 1);
    let tree = records[0].tree_target().position;
    // ornament jitter is 0.2 wide
    assert!((tree.x - 5.0).abs() <= 0.1 + 1e-6);
    assert!(tree.z.abs() <= 0.1 + 1e-6);
    assert!((tree.y + 7.5).abs() < 1e-6);
}

#[test]
fn spiral_uses_golden_angle() {
    let params = LayoutParams::new(50, 5.0, 15.0, 25.0);
    for i in 1..20 {
        let p = layout::cone_point(i, &params);
        let expected = (i as f32 * layout::GOLDEN_ANGLE).rem_euclid(std::f32::consts::TAU);
        let angle = p.z.atan2(p.x).rem_euclid(std::f32::consts::TAU);
        let diff = (angle - expected).abs();
        assert!(diff < 1e-3 || (diff - std::f32::consts::TAU).abs() < 1e-3);
    }
}

#[test]
fn scatter_points_are_uniform_by_volume() {
    let mut rng = StdRng::seed_from_u64(42);
    let radius = 25.0;
    let n = 20_000;
    let points: Vec<Vec3> = (0..n)
        .map(|_| layout::scatter_point(radius, &mut rng))
        .collect();
    assert!(points.iter().all(|p| p.length() <= radius + 1e-4));

    for frac in [0.5f32, 0.8] {
        let inside = points
            .iter()
            .filter(|p| p.length() <= radius * frac)
            .count() as f32
            / n as f32;
        let expected = frac.powi(3);
        assert!(
            (inside - expected).abs() < 0.02,
            "fraction within {frac}R was {inside}, expected {expected}"
        );
    }

    // no polar clustering: upper and lower hemispheres split evenly
    let upper = points.iter().filter(|p| p.z > 0.0).count() as f32 / n as f32;
    assert!((upper - 0.5).abs() < 0.02);
}

#[test]
fn attributes_stay_in_category_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    let params = LayoutParams::new(2000, 5.0, 15.0, 25.0);
    for (category, palette) in [
        (Category::Leaf, vec![EMERALD_MID, EMERALD_LIGHT, GOLD_METALLIC]),
        (Category::Ornament, vec![GOLD_METALLIC, GOLD_ROSE]),
        (Category::Gift, vec![RED_VELVET, GOLD_METALLIC]),
    ] {
        let palette: Vec<[f32; 3]> = palette.into_iter().map(hex_rgb).collect();
        let (lo, hi) = category.scale_range();
        let records = layout::generate(&params, category, &mut rng).unwrap();
        assert_eq!(records.len(), params.count);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(r.id(), i as u32);
            assert!(r.speed() >= SPEED_MIN && r.speed() < SPEED_MAX);
            assert!(r.scale() >= lo && r.scale() < hi, "{category:?} scale {}", r.scale());
            assert!(palette.contains(&r.color()));
            assert!(r.scatter_target().position.length() <= 25.0 + 1e-4);
            assert_eq!(r.current(), r.scatter_target());
        }
    }
}

#[test]
fn leaf_palette_is_mostly_mid_emerald() {
    let mut rng = StdRng::seed_from_u64(9);
    let records =
        layout::generate(&LayoutParams::new(10_000, 5.0, 15.0, 25.0), Category::Leaf, &mut rng)
            .unwrap();
    let share = |hex: u32| {
        records.iter().filter(|r| r.color() == hex_rgb(hex)).count() as f32 / records.len() as f32
    };
    assert!((share(EMERALD_MID) - 0.70).abs() < 0.03);
    assert!((share(EMERALD_LIGHT) - 0.25).abs() < 0.03);
    assert!((share(GOLD_METALLIC) - 0.05).abs() < 0.02);
}

#[test]
fn ornaments_face_outward_without_tumbling() {
    let mut rng = StdRng::seed_from_u64(3);
    let params = LayoutParams::new(200, 4.5, 15.0, 25.0);
    let records = layout::generate(&params, Category::Ornament, &mut rng).unwrap();
    for (i, r) in records.iter().enumerate() {
        let spiral = layout::cone_point(i, &params);
        let expected = Quat::from_rotation_y(spiral.x.atan2(spiral.z));
        assert!(r.tree_target().rotation.dot(expected).abs() > 1.0 - 1e-5);
    }
}

#[test]
fn leaves_face_outward_with_random_pitch_and_roll() {
    let params = LayoutParams::new(300, 5.0, 15.0, 25.0);
    let records = layout::generate(&params, Category::Leaf, &mut StdRng::seed_from_u64(21)).unwrap();
    let angles = replay_tree_angles(&params, Category::Leaf, 21);
    for (i, (r, a)) in records.iter().zip(&angles).enumerate() {
        let spiral = layout::cone_point(i, &params);
        assert_eq!(a.y, spiral.x.atan2(spiral.z));
        assert!((0.0..std::f32::consts::PI).contains(&a.x), "pitch {}", a.x);
        assert!((0.0..std::f32::consts::TAU).contains(&a.z), "roll {}", a.z);
        let expected = Quat::from_euler(EulerRot::XYZ, a.x, a.y, a.z);
        assert!(same_rotation(r.tree_target().rotation, expected), "leaf {i}");
    }
    // pitch and roll are actually random
    assert!(angles.iter().any(|a| a.x > 1.0) && angles.iter().any(|a| a.x < 0.5));
    assert!(angles.iter().any(|a| a.z > 4.0) && angles.iter().any(|a| a.z < 2.0));
}

#[test]
fn gift_angles_stay_within_half_turn() {
    let params = LayoutParams::new(120, 4.0, 15.0, 25.0)
        .with_height_window(GIFT_MIN_HEIGHT_FRAC, GIFT_MAX_HEIGHT_FRAC);
    let records = layout::generate(&params, Category::Gift, &mut StdRng::seed_from_u64(5)).unwrap();
    let angles = replay_tree_angles(&params, Category::Gift, 5);
    for (r, a) in records.iter().zip(&angles) {
        for v in a.to_array() {
            assert!((0.0..std::f32::consts::PI).contains(&v), "gift angle {v}");
        }
        let expected = Quat::from_euler(EulerRot::XYZ, a.x, a.y, a.z);
        assert!(same_rotation(r.tree_target().rotation, expected));
    }
}

#[test]
fn scatter_rotations_differ_between_particles() {
    let params = LayoutParams::new(200, 5.0, 15.0, 25.0);
    for category in [Category::Leaf, Category::Ornament, Category::Gift] {
        let records = layout::generate(&params, category, &mut StdRng::seed_from_u64(13)).unwrap();
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                assert!(
                    !same_rotation(a.scatter_target().rotation, b.scatter_target().rotation),
                    "{category:?} particles {} and {} share a scatter rotation",
                    a.id(),
                    b.id()
                );
            }
        }
    }
}

#[test]
fn gifts_stay_inside_height_window() {
    let mut rng = StdRng::seed_from_u64(8);
    let params = LayoutParams::new(60, 4.0, 15.0, 25.0)
        .with_height_window(GIFT_MIN_HEIGHT_FRAC, GIFT_MAX_HEIGHT_FRAC);
    let records = layout::generate(&params, Category::Gift, &mut rng).unwrap();
    let jitter_reach = GIFT_JITTER / 2.0 * std::f32::consts::SQRT_2;
    for r in &records {
        let p = r.tree_target().position;
        assert!(p.y >= (0.05 - 0.5) * 15.0 - 1e-4 && p.y <= (0.8 - 0.5) * 15.0 + 1e-4);
        let y_frac = p.y / 15.0 + 0.5;
        assert!(radial(p) <= 4.0 * (1.0 - y_frac) + jitter_reach + 1e-4);
    }
}

#[test]
fn empty_layout_is_valid() {
    let mut rng = StdRng::seed_from_u64(0);
    let params = LayoutParams::new(0, 5.0, 15.0, 25.0);
    assert!(layout::generate(&params, Category::Leaf, &mut rng)
        .unwrap()
        .is_empty());
}

#[test]
fn invalid_parameters_are_rejected() {
    let mut rng = StdRng::seed_from_u64(0);
    let bad_radius = LayoutParams::new(10, -1.0, 15.0, 25.0);
    assert_eq!(
        layout::generate(&bad_radius, Category::Leaf, &mut rng).unwrap_err(),
        ConfigError::InvalidDimension {
            name: "radius",
            value: -1.0
        }
    );

    let bad_height = LayoutParams::new(10, 5.0, f32::NAN, 25.0);
    assert!(matches!(
        bad_height.validate(),
        Err(ConfigError::InvalidDimension { name: "height", .. })
    ));

    let bad_scatter = LayoutParams::new(10, 5.0, 15.0, f32::INFINITY);
    assert!(matches!(
        bad_scatter.validate(),
        Err(ConfigError::InvalidDimension {
            name: "scatter_radius",
            ..
        })
    ));

    for (min, max) in [(0.8, 0.2), (-0.1, 0.5), (0.2, 1.5)] {
        let window = LayoutParams::new(10, 5.0, 15.0, 25.0).with_height_window(min, max);
        assert_eq!(
            window.validate(),
            Err(ConfigError::InvalidHeightWindow { min, max })
        );
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let params = LayoutParams::new(300, 5.0, 15.0, 25.0);
    for seed in [1u64, 2, 99, 12345] {
        let a = layout::generate(&params, Category::Gift, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = layout::generate(&params, Category::Gift, &mut StdRng::seed_from_u64(seed)).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.tree_target(), y.tree_target());
            assert_eq!(x.scatter_target(), y.scatter_target());
            assert_eq!(x.color(), y.color());
        }
    }
}

#[test]
fn star_is_hand_placed() {
    let star = layout::star(15.0);
    assert_eq!(star.id(), STAR_ID);
    assert_eq!(star.tree_target().position, Vec3::new(0.0, 8.0, 0.0));
    assert_eq!(star.scatter_target().position, Vec3::new(0.0, 40.0, 0.0));
    let tipped = glam::Quat::from_rotation_x(std::f32::consts::FRAC_PI_2);
    assert!(star.scatter_target().rotation.dot(tipped).abs() > 1.0 - 1e-6);
    assert_eq!(star.current().position, star.scatter_target().position);
    assert!(star.current().rotation.dot(glam::Quat::IDENTITY).abs() > 1.0 - 1e-6);
    assert_eq!(star.speed(), STAR_SPEED);
    assert_eq!(star.scale(), STAR_SCALE);
    assert_eq!(star.color(), hex_rgb(GOLD_METALLIC));
}
