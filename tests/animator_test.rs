/// Integration tests for the edge-growth animation as seen from outside the crate

use cuboid_lab::animator::{EdgeGrowthAnimator, Phase};
use cuboid_lab::cuboid::{flatten, Corner, Cuboid};
use glam::Vec3;
use strum::IntoEnumIterator;

fn close(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < 1e-5
}

#[test]
fn half_an_edge_after_one_second() {
    let mut animator = EdgeGrowthAnimator::with_speed(0.0, 1.0);
    let segments = animator.tick(1.0);
    assert_eq!(segments[0].alpha, Vec3::new(-2.0, -1.0, -1.0));
    assert_eq!(segments[0].omega, Vec3::new(-2.0, -1.0, 0.0));
    assert_eq!(
        &flatten(&segments)[..6],
        &[-2.0, -1.0, -1.0, -2.0, -1.0, 0.0]
    );
}

#[test]
fn completion_convergence() {
    let cuboid = Cuboid::default();
    let length = cuboid
        .edge(Corner::LeftBottomFar, Corner::LeftBottomNear)
        .length();
    let start = 7.25;

    let mut halfway = EdgeGrowthAnimator::with_speed(start, 1.0);
    let segments = halfway.tick(start + length / 2.0);
    let rails = halfway.phase_state(Phase::Rails);
    assert!((rails.fraction() - 0.5).abs() < 1e-5);
    assert!(!rails.is_finished());
    let midpoint = cuboid
        .corner(Corner::LeftBottomFar)
        .lerp(cuboid.corner(Corner::LeftBottomNear), 0.5);
    assert!(close(segments[0].omega, midpoint));

    let mut done = EdgeGrowthAnimator::with_speed(start, 1.0);
    done.tick(start + length);
    assert!(done.phase_state(Phase::Rails).is_finished());
}

#[test]
fn fractions_stay_clamped_and_latches_stay_set() {
    let mut animator = EdgeGrowthAnimator::with_speed(0.0, 0.7);
    let mut finished = [false; 3];
    for frame in 0..2000 {
        let now = frame as f32 * 0.013;
        animator.tick(now);
        for (index, phase) in Phase::iter().enumerate() {
            let state = animator.phase_state(phase);
            assert!((0.0..=1.0).contains(&state.fraction()));
            assert!(!finished[index] || state.is_finished(), "{phase} unlatched");
            finished[index] = state.is_finished();
        }
    }
    assert!(animator.is_finished());
}

#[test]
fn relay_holds_later_phases_back() {
    let mut animator = EdgeGrowthAnimator::with_speed(0.0, 1.0);
    for frame in 0..20 {
        let now = frame as f32 * 0.1;
        animator.tick(now);
        if !animator.phase_state(Phase::Rails).is_finished() {
            assert_eq!(animator.phase_state(Phase::Posts).fraction(), 0.0);
            assert_eq!(animator.fraction(Phase::Posts, now + 100.0), 0.0);
        }
        if !animator.phase_state(Phase::Posts).is_finished() {
            assert_eq!(animator.phase_state(Phase::Extrusion).fraction(), 0.0);
        }
    }
}

#[test]
fn phases_start_when_the_previous_one_was_seen_to_finish() {
    let mut animator = EdgeGrowthAnimator::with_speed(0.0, 1.0);
    animator.tick(3.0);
    assert_eq!(animator.phase_state(Phase::Rails).finished_at(), Some(3.0));
    animator.tick(4.0);
    assert!((animator.phase_state(Phase::Posts).fraction() - 0.5).abs() < 1e-5);
}

#[test]
fn extrusion_midpoints_and_moving_square() {
    let cuboid = Cuboid::default();
    let mut animator = EdgeGrowthAnimator::with_speed(0.0, 1.0);
    animator.tick(2.0);
    animator.tick(4.0);
    let segments = animator.tick(6.0);
    assert_eq!(segments.len(), 12);
    let pairs = [
        (Corner::LeftBottomFar, Corner::RightBottomFar),
        (Corner::LeftBottomNear, Corner::RightBottomNear),
        (Corner::LeftTopNear, Corner::RightTopNear),
        (Corner::LeftTopFar, Corner::RightTopFar),
    ];
    let midpoints: Vec<Vec3> = pairs
        .iter()
        .map(|&(left, right)| cuboid.corner(left).lerp(cuboid.corner(right), 0.5))
        .collect();
    for (segment, (&(left, _), midpoint)) in segments[4..8].iter().zip(pairs.iter().zip(&midpoints)) {
        assert_eq!(segment.alpha, cuboid.corner(left));
        assert!(close(segment.omega, *midpoint));
    }
    for (index, side) in segments[8..12].iter().enumerate() {
        assert!(close(side.alpha, midpoints[index]));
        assert!(close(side.omega, midpoints[(index + 1) % 4]));
    }
}

#[test]
fn terminal_state_is_idempotent() {
    let mut animator = EdgeGrowthAnimator::with_speed(0.0, 2.0);
    let mut now = 0.0;
    while !animator.is_finished() {
        now += 0.25;
        animator.tick(now);
    }
    let settled = animator.tick(now);
    assert_eq!(settled.len(), 12);
    assert_eq!(settled, Cuboid::default().wireframe().to_vec());
    for later in [now + 1.0, now + 60.0, now + 3600.0] {
        assert_eq!(animator.tick(later), settled);
        assert!(animator.is_finished());
    }
}

#[test]
fn flat_cuboid_skips_zero_length_phase() {
    let flat = Cuboid::new(Vec3::new(2.0, 0.0, 1.0));
    let mut animator = EdgeGrowthAnimator::for_cuboid(flat, 0.0, 1.0);
    animator.tick(2.0);
    assert!(animator.phase_state(Phase::Rails).is_finished());
    // posts have no height, so they latch the moment they unlock
    assert!(animator.phase_state(Phase::Posts).is_finished());
    assert!(!animator.is_finished());
}

#[test]
fn clock_stepping_back_after_a_latch_keeps_progress() {
    let cuboid = Cuboid::default();
    let mut animator = EdgeGrowthAnimator::with_speed(0.0, 1.0);
    animator.tick(2.0);
    let segments = animator.tick(1.5);
    let rails = animator.phase_state(Phase::Rails);
    assert!(rails.is_finished());
    assert_eq!(rails.finished_at(), Some(2.0));
    assert_eq!(animator.phase_state(Phase::Posts).fraction(), 0.0);
    assert!(!animator.phase_state(Phase::Posts).is_finished());
    assert_eq!(&segments[..2], &cuboid.wireframe()[..2]);
    assert_eq!(segments[2].alpha, segments[2].omega);
}
