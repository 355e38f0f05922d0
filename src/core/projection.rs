use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, BoundedSeries, PixelPoint, SampleItem, SampleParser, Viewport};

/// Canonical scroll position: the axis index centered in the viewport, split
/// into an integral index and a fractional residual in `(-0.5, 0.5]`.
///
/// The split keeps whole-index semantics ("snap to index 7") and continuous
/// scroll motion representable in one value without ambiguity: "index 3.6"
/// always canonicalizes to `(4, -0.4)`, never to `(3, 0.6)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
    center_index: i64,
    center_offset: f64,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self {
            center_index: 0,
            center_offset: 0.0,
        }
    }
}

impl ScrollPosition {
    /// Builds a position from an arbitrary index/offset pair, folding any
    /// excess offset into the index so the residual lands in `(-0.5, 0.5]`.
    #[must_use]
    pub fn canonical(center_index: i64, center_offset: f64) -> Self {
        let carry = (center_offset - 0.5).ceil();
        Self {
            center_index: center_index + carry as i64,
            center_offset: center_offset - carry,
        }
    }

    #[must_use]
    pub fn center_index(self) -> i64 {
        self.center_index
    }

    #[must_use]
    pub fn center_offset(self) -> f64 {
        self.center_offset
    }

    /// Continuous axis coordinate under the viewport center.
    #[must_use]
    pub fn axis_value(self) -> f64 {
        self.center_index as f64 + self.center_offset
    }
}

/// Maps an axis coordinate to a viewport x pixel. The viewport center pixel
/// always corresponds to `center_index + center_offset`.
#[must_use]
pub fn axis_to_pixel(
    axis_x: f64,
    position: ScrollPosition,
    pixel_per_unit: f64,
    viewport: Viewport,
) -> f64 {
    f64::from(viewport.width) / 2.0 + (axis_x - position.axis_value()) * pixel_per_unit
}

/// Maps a sample value to a viewport y pixel, inverted so larger values sit
/// higher on screen. A degenerate flat series (`y_max == y_min`) substitutes
/// a unit span and renders as a line instead of dividing by zero.
#[must_use]
pub fn value_to_pixel_y(y: f64, y_min: f64, y_max: f64, viewport: Viewport) -> f64 {
    let mut span = y_max - y_min;
    if span.abs() <= 0.0 {
        span = 1.0;
    }
    let percent = (y - y_min) / span;
    (1.0 - percent) * f64::from(viewport.height)
}

/// Converts a continuous pixel scroll offset into the canonical position.
#[must_use]
pub fn pixel_to_scroll(pixel_offset: f64, pixel_per_unit: f64) -> ScrollPosition {
    let raw = pixel_offset / pixel_per_unit;
    let index = raw.floor();
    ScrollPosition::canonical(index as i64, raw - index)
}

/// Exact inverse of [`pixel_to_scroll`].
#[must_use]
pub fn scroll_to_pixel(position: ScrollPosition, pixel_per_unit: f64) -> f64 {
    position.axis_value() * pixel_per_unit
}

/// Active (highlighted) period containing `center_index`.
///
/// Floor-mod arithmetic keeps negative indices in a left-closed period:
/// `center_index = -1, period = 7` yields `(-7, 0)`, not `(-1, 6)`.
#[must_use]
pub fn active_range_for_index(center_index: i64, period: i64) -> AxisRange {
    let start = center_index - center_index.rem_euclid(period);
    AxisRange::new(start as f64, (start + period) as f64)
}

/// Projects both ends of an axis range to pixel x coordinates, for edge-fade
/// placement by the rendering backend.
#[must_use]
pub fn active_pixel_range(
    range: AxisRange,
    position: ScrollPosition,
    pixel_per_unit: f64,
    viewport: Viewport,
) -> (f64, f64) {
    (
        axis_to_pixel(range.start, position, pixel_per_unit, viewport),
        axis_to_pixel(range.end, position, pixel_per_unit, viewport),
    )
}

/// Lazy, restartable projection of a whole series into pixel space.
///
/// Restart by cloning or by calling [`project_series`] again; iteration never
/// mutates the series. An empty series yields an empty iterator.
pub struct ProjectedPoints<'a, T, P: ?Sized> {
    items: std::slice::Iter<'a, T>,
    parser: &'a P,
    position: ScrollPosition,
    pixel_per_unit: f64,
    viewport: Viewport,
    y_min: f64,
    y_max: f64,
}

impl<T, P: ?Sized> Clone for ProjectedPoints<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            parser: self.parser,
            position: self.position,
            pixel_per_unit: self.pixel_per_unit,
            viewport: self.viewport,
            y_min: self.y_min,
            y_max: self.y_max,
        }
    }
}

impl<T: SampleItem, P: SampleParser<T> + ?Sized> Iterator for ProjectedPoints<'_, T, P> {
    type Item = PixelPoint;

    fn next(&mut self) -> Option<PixelPoint> {
        let sample = self.parser.parse(self.items.next()?);
        Some(PixelPoint::new(
            axis_to_pixel(sample.x, self.position, self.pixel_per_unit, self.viewport),
            value_to_pixel_y(sample.y, self.y_min, self.y_max, self.viewport),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T: SampleItem, P: SampleParser<T> + ?Sized> ExactSizeIterator for ProjectedPoints<'_, T, P> {}

/// Builds the lazy pixel projection for one render pass.
///
/// Value bounds are captured once at creation so every point of the pass is
/// scaled consistently even if the caller appends mid-iteration elsewhere.
pub fn project_series<'a, T, P>(
    series: &'a BoundedSeries<T>,
    parser: &'a P,
    position: ScrollPosition,
    pixel_per_unit: f64,
    viewport: Viewport,
) -> ProjectedPoints<'a, T, P>
where
    T: SampleItem,
    P: SampleParser<T> + ?Sized,
{
    let (y_min, y_max) = series.bounds();
    ProjectedPoints {
        items: series.iter(),
        parser,
        position,
        pixel_per_unit,
        viewport,
        y_min,
        y_max,
    }
}
