//! pan-chart: scrolling engine and coordinate-transform core for
//! horizontally pannable line charts.
//!
//! The crate maps an ordered series of samples onto a bounded viewport along
//! a virtual unit-spaced x-axis, with drag, fling and animated-scroll
//! navigation. Rendering backends and gesture sources stay outside: the core
//! consumes pointer events and emits already-projected pixel-space frames.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartController};
pub use error::{ChartError, ChartResult};
