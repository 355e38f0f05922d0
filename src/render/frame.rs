use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};

/// Horizontal pixel band, used for the edge-fade regions flanking the active
/// period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRange {
    pub start: f64,
    pub end: f64,
}

impl PixelRange {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// The polyline is already projected to pixel space; the renderer strokes it
/// as-is, draws the center hint line, and applies fades over the optional
/// bands. No colors or stroke styling live here.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub polyline: Vec<PixelPoint>,
    /// Vertical hint line marking the axis position under the viewport center.
    pub center_line_x: f64,
    /// Fade band left of the active period, present only when the active
    /// range starts inside the viewport.
    pub fade_left: Option<PixelRange>,
    /// Fade band right of the active period, present only when the active
    /// range ends inside the viewport.
    pub fade_right: Option<PixelRange>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            polyline: Vec::new(),
            center_line_x: f64::from(viewport.width) / 2.0,
            fade_left: None,
            fade_right: None,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for point in &self.polyline {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(ChartError::InvalidData(
                    "projected polyline point must be finite".to_owned(),
                ));
            }
        }

        Ok(())
    }
}

/// Drawing seam consumed by the core; backends stroke the frame however they
/// like (canvas, GPU, test recorder).
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
