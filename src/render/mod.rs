pub mod frame;
pub mod null_renderer;

pub use frame::{PixelRange, RenderFrame, Renderer};
pub use null_renderer::NullRenderer;
