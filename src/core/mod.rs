pub mod projection;
pub mod series;
pub mod types;

pub use projection::{
    ProjectedPoints, ScrollPosition, active_pixel_range, active_range_for_index, axis_to_pixel,
    pixel_to_scroll, project_series, scroll_to_pixel, value_to_pixel_y,
};
pub use series::{BoundedSeries, DatedSample, IdentityParser, SampleItem, SampleParser};
pub use types::{AxisRange, PixelPoint, SamplePoint, Viewport};
