use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{ScrollPosition, pixel_to_scroll, scroll_to_pixel};
use crate::interaction::{EaseTrajectory, FlingTrajectory};

/// Tuning for drag, fling and programmatic scroll physics.
///
/// Velocities are pixels per time-unit; durations are in the same time-units
/// handed to [`ScrollEngine::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollPhysics {
    /// Release velocity below this starts no fling.
    pub min_fling_velocity: f64,
    /// Release velocity is clamped to this magnitude before seeding a fling.
    pub max_fling_velocity: f64,
    /// Multiplicative fling velocity decay per time-unit.
    pub fling_decay_per_unit: f64,
    /// Fling stops when `abs(velocity)` drops below this threshold.
    pub fling_stop_velocity: f64,
    /// Nominal drag overscroll extent past the scroll range; excursions
    /// beyond it are tracked, never rejected.
    pub overscroll_distance: f64,
    /// Duration of programmatic and spring-back eased scrolls.
    pub scroll_duration: f64,
}

impl Default for ScrollPhysics {
    fn default() -> Self {
        Self {
            min_fling_velocity: 0.05,
            max_fling_velocity: 8.0,
            fling_decay_per_unit: 0.995,
            fling_stop_velocity: 0.01,
            overscroll_distance: 50.0,
            scroll_duration: 250.0,
        }
    }
}

/// Public state-machine discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollPhase {
    Idle,
    Dragging,
    Flinging,
    AnimatingTo,
}

/// Result of advancing an active trajectory by one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionUpdate {
    pub pixel_offset: f64,
    pub position: ScrollPosition,
    /// True when the trajectory finished on this step and the engine is Idle.
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ScrollState {
    Idle,
    Dragging { last_x: f64 },
    Flinging(FlingTrajectory),
    AnimatingTo(EaseTrajectory),
}

/// Owns the scroll position and drives all motion along the virtual axis.
///
/// State machine over Idle, Dragging, Flinging and AnimatingTo. All motion is
/// expressed on a continuous pixel offset; the canonical
/// `(center_index, center_offset)` decomposition is derived on demand.
#[derive(Debug, Clone)]
pub struct ScrollEngine {
    physics: ScrollPhysics,
    pixel_per_unit: f64,
    viewport_width: f64,
    scroll_range_px: f64,
    scroll_px: f64,
    state: ScrollState,
}

impl ScrollEngine {
    /// `pixel_per_unit` must already be validated positive by the caller's
    /// configuration layer.
    #[must_use]
    pub fn new(pixel_per_unit: f64, physics: ScrollPhysics) -> Self {
        Self {
            physics,
            pixel_per_unit,
            viewport_width: 0.0,
            scroll_range_px: 0.0,
            scroll_px: 0.0,
            state: ScrollState::Idle,
        }
    }

    /// Updates the scrollable content extent and viewport width.
    ///
    /// Called whenever the series length or viewport changes; does not move
    /// the current position.
    pub fn set_extent(&mut self, series_len: usize, viewport_width: f64) {
        self.scroll_range_px = series_len as f64 * self.pixel_per_unit;
        self.viewport_width = viewport_width;
    }

    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        match self.state {
            ScrollState::Idle => ScrollPhase::Idle,
            ScrollState::Dragging { .. } => ScrollPhase::Dragging,
            ScrollState::Flinging(_) => ScrollPhase::Flinging,
            ScrollState::AnimatingTo(_) => ScrollPhase::AnimatingTo,
        }
    }

    #[must_use]
    pub fn physics(&self) -> ScrollPhysics {
        self.physics
    }

    #[must_use]
    pub fn pixel_offset(&self) -> f64 {
        self.scroll_px
    }

    #[must_use]
    pub fn position(&self) -> ScrollPosition {
        pixel_to_scroll(self.scroll_px, self.pixel_per_unit)
    }

    /// Upper resting bound: content may rest anywhere in `[0, rest_max]`.
    fn rest_max(&self) -> f64 {
        (self.scroll_range_px - self.viewport_width).max(0.0)
    }

    /// Starts a drag at pointer `x`, aborting any in-flight trajectory.
    ///
    /// Interruption is lossless: position stays wherever the trajectory last
    /// computed it.
    pub fn begin_drag(&mut self, x: f64) {
        if !matches!(self.state, ScrollState::Idle) {
            debug!(phase = ?self.phase(), "drag interrupts active state");
        }
        self.state = ScrollState::Dragging { last_x: x };
    }

    /// Applies a drag move to pointer `x` and returns the applied pixel delta.
    ///
    /// Drag right moves content left (standard pan semantics). Motion past
    /// the scroll range overscrolls freely: the configured overscroll
    /// distance is the nominal visual extent, and excursions beyond it are
    /// tracked rather than rejected. Release spring-back recovers any
    /// excursion. A move with no active drag is tolerated as an implicit
    /// drag start at the same position.
    pub fn drag_move(&mut self, x: f64) -> f64 {
        let ScrollState::Dragging { last_x } = &mut self.state else {
            warn!(x, "move without active drag, treating as drag start");
            self.begin_drag(x);
            return 0.0;
        };

        let pointer_delta = x - *last_x;
        *last_x = x;

        self.scroll_px -= pointer_delta;

        let overscroll = if self.scroll_px < 0.0 {
            -self.scroll_px
        } else {
            (self.scroll_px - self.scroll_range_px).max(0.0)
        };
        if overscroll > self.physics.overscroll_distance {
            trace!(overscroll, "drag past configured overscroll distance");
        }

        -pointer_delta
    }

    /// Ends the drag with the pointer's release velocity (pixels per
    /// time-unit, positive rightward).
    ///
    /// Overscrolled positions spring back to the nearest resting bound;
    /// otherwise a sufficient velocity seeds a fling, and anything else
    /// settles to Idle in place.
    pub fn end_drag(&mut self, velocity: f64) {
        if !matches!(self.state, ScrollState::Dragging { .. }) {
            trace!(velocity, "release without active drag ignored");
            return;
        }

        let rest_max = self.rest_max();
        if self.scroll_px < 0.0 || self.scroll_px > rest_max {
            self.spring_back(rest_max);
            return;
        }

        if velocity.abs() >= self.physics.min_fling_velocity {
            let seed = velocity.clamp(
                -self.physics.max_fling_velocity,
                self.physics.max_fling_velocity,
            );
            debug!(velocity = seed, "fling start");
            // Pointer velocity and scroll offset move in opposite directions.
            self.state = ScrollState::Flinging(FlingTrajectory::new(
                -seed,
                self.physics.fling_decay_per_unit,
                self.physics.fling_stop_velocity,
                0.0,
                rest_max,
            ));
            return;
        }

        debug!(pixel_offset = self.scroll_px, "drag settled");
        self.state = ScrollState::Idle;
    }

    fn spring_back(&mut self, rest_max: f64) {
        let target = *[0.0, rest_max]
            .iter()
            .min_by_key(|bound| OrderedFloat((self.scroll_px - **bound).abs()))
            .unwrap_or(&0.0);
        debug!(
            from = self.scroll_px,
            to = target,
            "overscroll spring-back"
        );
        self.state = ScrollState::AnimatingTo(EaseTrajectory::new(
            self.scroll_px,
            target,
            self.physics.scroll_duration,
        ));
    }

    /// Starts a fixed-duration eased scroll to `index` centered with zero
    /// offset. Returns false when nothing starts: engine already Idle exactly
    /// at that index, or a drag is in progress (the gesture always wins over
    /// programmatic scrolls).
    ///
    /// Issued while AnimatingTo, the prior trajectory is aborted and the new
    /// ease starts from the current interpolated position, never from the old
    /// target.
    pub fn scroll_to_index(&mut self, index: i64) -> bool {
        if matches!(self.state, ScrollState::Dragging { .. }) {
            debug!(index, "scroll_to_index ignored during drag");
            return false;
        }

        let target = scroll_to_pixel(ScrollPosition::canonical(index, 0.0), self.pixel_per_unit);

        if matches!(self.state, ScrollState::Idle) && self.scroll_px == target {
            trace!(index, "scroll_to_index already centered, no-op");
            return false;
        }

        if !matches!(self.state, ScrollState::Idle) {
            debug!(phase = ?self.phase(), "scroll_to_index interrupts active state");
        }
        debug!(index, from = self.scroll_px, to = target, "animated scroll start");
        self.state = ScrollState::AnimatingTo(EaseTrajectory::new(
            self.scroll_px,
            target,
            self.physics.scroll_duration,
        ));
        true
    }

    /// Aborts any drag or trajectory, leaving position at its last computed
    /// value. Takes effect before any subsequent `advance`.
    pub fn cancel(&mut self) {
        if !matches!(self.state, ScrollState::Idle) {
            debug!(phase = ?self.phase(), pixel_offset = self.scroll_px, "cancel");
        }
        self.state = ScrollState::Idle;
    }

    /// Advances the active trajectory by `delta_time` time-units.
    ///
    /// Returns None while Idle or Dragging (nothing animates). On completion
    /// the engine snaps to the trajectory's final offset and returns to Idle.
    pub fn advance(&mut self, delta_time: f64) -> Option<PositionUpdate> {
        let step = match &mut self.state {
            ScrollState::Idle | ScrollState::Dragging { .. } => return None,
            ScrollState::Flinging(trajectory) => trajectory.advance(self.scroll_px, delta_time),
            ScrollState::AnimatingTo(trajectory) => trajectory.advance(delta_time),
        };

        self.scroll_px = step.pixel_offset;
        if step.done {
            debug!(pixel_offset = self.scroll_px, "trajectory complete");
            self.state = ScrollState::Idle;
        } else {
            trace!(pixel_offset = self.scroll_px, "trajectory step");
        }

        Some(PositionUpdate {
            pixel_offset: self.scroll_px,
            position: self.position(),
            completed: step.done,
        })
    }
}
