use approx::assert_relative_eq;
use pan_chart::interaction::{EaseTrajectory, FlingTrajectory, ease_in_out_cubic};

#[test]
fn easing_is_monotonic_and_hits_endpoints() {
    assert_eq!(ease_in_out_cubic(0.0), 0.0);
    assert_eq!(ease_in_out_cubic(1.0), 1.0);
    assert_relative_eq!(ease_in_out_cubic(0.5), 0.5, epsilon = 1e-12);

    let mut last = 0.0;
    for step in 1..=100 {
        let eased = ease_in_out_cubic(f64::from(step) / 100.0);
        assert!(eased >= last);
        last = eased;
    }
}

#[test]
fn easing_clamps_out_of_range_progress() {
    assert_eq!(ease_in_out_cubic(-0.5), 0.0);
    assert_eq!(ease_in_out_cubic(1.5), 1.0);
}

#[test]
fn ease_trajectory_interpolates_between_offsets() {
    let mut trajectory = EaseTrajectory::new(100.0, 300.0, 250.0);
    assert_eq!(trajectory.target_px(), 300.0);

    let midway = trajectory.advance(125.0);
    assert!(!midway.done);
    assert_relative_eq!(midway.pixel_offset, 200.0, epsilon = 1e-9);

    let done = trajectory.advance(125.0);
    assert!(done.done);
    assert_eq!(done.pixel_offset, 300.0);
}

#[test]
fn ease_trajectory_overshooting_clock_still_lands_on_target() {
    let mut trajectory = EaseTrajectory::new(0.0, -80.0, 250.0);
    let done = trajectory.advance(10_000.0);
    assert!(done.done);
    assert_eq!(done.pixel_offset, -80.0);
}

#[test]
fn fling_velocity_decays_multiplicatively() {
    let mut fling = FlingTrajectory::new(2.0, 0.5, 0.01, 0.0, 1e9);
    let step = fling.advance(0.0, 1.0);
    assert!(!step.done);
    assert_relative_eq!(step.pixel_offset, 2.0, epsilon = 1e-12);
    assert_relative_eq!(fling.velocity(), 1.0, epsilon = 1e-12);

    fling.advance(step.pixel_offset, 1.0);
    assert_relative_eq!(fling.velocity(), 0.5, epsilon = 1e-12);
}

#[test]
fn fling_stops_below_threshold() {
    let mut fling = FlingTrajectory::new(0.1, 0.5, 0.2, 0.0, 1e9);
    // One step decays 0.1 to 0.05, under the 0.2 threshold.
    let step = fling.advance(50.0, 1.0);
    assert!(step.done);
}

#[test]
fn fling_clamps_and_completes_at_bounds() {
    let mut fling = FlingTrajectory::new(-10.0, 0.9, 0.01, 0.0, 100.0);
    let step = fling.advance(5.0, 1.0);
    assert!(step.done);
    assert_eq!(step.pixel_offset, 0.0);

    let mut forward = FlingTrajectory::new(10.0, 0.9, 0.01, 0.0, 100.0);
    let step = forward.advance(95.0, 1.0);
    assert!(step.done);
    assert_eq!(step.pixel_offset, 100.0);
}
