//! Transient scroll trajectories: velocity-seeded flings and fixed-duration
//! eased scrolls. Both advance by pure time stepping so the host scheduler
//! only needs to call `advance` at roughly frame rate.

/// One advancement step of an in-flight trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryStep {
    /// New pixel scroll offset after this step.
    pub pixel_offset: f64,
    /// True when the trajectory has finished and should be dropped.
    pub done: bool,
}

/// Symmetric cubic ease: slow start, fast middle, slow stop.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Decelerating fling seeded with a release velocity.
///
/// Velocity decays multiplicatively per time-unit; motion stops when velocity
/// drops below the stop threshold or a bound is reached. With collapsed
/// bounds (`min == max`) the first step clamps and completes immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlingTrajectory {
    velocity: f64,
    decay_per_unit: f64,
    stop_velocity: f64,
    min_px: f64,
    max_px: f64,
}

impl FlingTrajectory {
    #[must_use]
    pub fn new(
        velocity: f64,
        decay_per_unit: f64,
        stop_velocity: f64,
        min_px: f64,
        max_px: f64,
    ) -> Self {
        Self {
            velocity,
            decay_per_unit,
            stop_velocity,
            min_px,
            max_px,
        }
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn advance(&mut self, current_px: f64, delta_time: f64) -> TrajectoryStep {
        let mut px = current_px + self.velocity * delta_time;
        self.velocity *= self.decay_per_unit.powf(delta_time);

        let mut done = self.velocity.abs() < self.stop_velocity;
        if px <= self.min_px {
            px = self.min_px;
            done = true;
        } else if px >= self.max_px {
            px = self.max_px;
            done = true;
        }

        TrajectoryStep {
            pixel_offset: px,
            done,
        }
    }
}

/// Fixed-duration eased scroll from one pixel offset to another.
///
/// Used for programmatic "scroll to index" jumps and for spring-back after
/// overscroll. Interrupting mid-flight leaves position at the last
/// interpolated offset, never at the abandoned target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EaseTrajectory {
    start_px: f64,
    target_px: f64,
    duration: f64,
    elapsed: f64,
}

impl EaseTrajectory {
    #[must_use]
    pub fn new(start_px: f64, target_px: f64, duration: f64) -> Self {
        Self {
            start_px,
            target_px,
            duration,
            elapsed: 0.0,
        }
    }

    #[must_use]
    pub fn target_px(&self) -> f64 {
        self.target_px
    }

    pub fn advance(&mut self, delta_time: f64) -> TrajectoryStep {
        self.elapsed += delta_time;
        let progress = (self.elapsed / self.duration).min(1.0);
        let eased = ease_in_out_cubic(progress);

        TrajectoryStep {
            pixel_offset: self.start_px + (self.target_px - self.start_px) * eased,
            done: self.elapsed >= self.duration,
        }
    }
}
