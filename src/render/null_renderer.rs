use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless controller usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_point_count: usize,
    pub last_had_fade_left: bool,
    pub last_had_fade_right: bool,
    pub render_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_point_count = frame.polyline.len();
        self.last_had_fade_left = frame.fade_left.is_some();
        self.last_had_fade_right = frame.fade_right.is_some();
        self.render_count += 1;
        Ok(())
    }
}
