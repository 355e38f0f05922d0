use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::interaction::ScrollPhysics;

/// Public controller bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    /// Horizontal pixel spacing between adjacent axis indices.
    pub pixel_per_unit: f64,
    /// Width of the highlighted index window, e.g. 7 for one calendar week.
    #[serde(default = "default_active_period")]
    pub active_period: i64,
    #[serde(default)]
    pub physics: ScrollPhysics,
}

fn default_active_period() -> i64 {
    7
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport, pixel_per_unit: f64) -> Self {
        Self {
            viewport,
            pixel_per_unit,
            active_period: default_active_period(),
            physics: ScrollPhysics::default(),
        }
    }

    #[must_use]
    pub fn with_active_period(mut self, active_period: i64) -> Self {
        self.active_period = active_period;
        self
    }

    #[must_use]
    pub fn with_physics(mut self, physics: ScrollPhysics) -> Self {
        self.physics = physics;
        self
    }

    /// Fails fast on invalid setup; runtime code may then assume a positive
    /// unit spacing and sane physics.
    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if !self.pixel_per_unit.is_finite() || self.pixel_per_unit <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "pixel_per_unit must be finite and > 0".to_owned(),
            ));
        }

        if self.active_period <= 0 {
            return Err(ChartError::InvalidConfig(
                "active_period must be > 0".to_owned(),
            ));
        }

        let physics = self.physics;
        if !physics.min_fling_velocity.is_finite()
            || physics.min_fling_velocity < 0.0
            || !physics.max_fling_velocity.is_finite()
            || physics.max_fling_velocity < physics.min_fling_velocity
        {
            return Err(ChartError::InvalidConfig(
                "fling velocity thresholds must be finite with min <= max".to_owned(),
            ));
        }

        if !physics.fling_decay_per_unit.is_finite()
            || physics.fling_decay_per_unit <= 0.0
            || physics.fling_decay_per_unit >= 1.0
        {
            return Err(ChartError::InvalidConfig(
                "fling_decay_per_unit must be in (0, 1)".to_owned(),
            ));
        }

        if !physics.fling_stop_velocity.is_finite() || physics.fling_stop_velocity <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "fling_stop_velocity must be finite and > 0".to_owned(),
            ));
        }

        if !physics.overscroll_distance.is_finite() || physics.overscroll_distance < 0.0 {
            return Err(ChartError::InvalidConfig(
                "overscroll_distance must be finite and >= 0".to_owned(),
            ));
        }

        if !physics.scroll_duration.is_finite() || physics.scroll_duration <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "scroll_duration must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}
