use chrono::NaiveDate;
use tracing::trace;

use crate::core::SamplePoint;

/// Capability every chart sample must expose: its position on the uniform
/// horizontal axis and the value plotted vertically.
pub trait SampleItem {
    fn x_axis(&self) -> f64;
    fn y_axis(&self) -> f64;
}

impl SampleItem for SamplePoint {
    fn x_axis(&self) -> f64 {
        self.x
    }

    fn y_axis(&self) -> f64 {
        self.y
    }
}

/// Strategy for extracting axis coordinates from an arbitrary item type.
///
/// Hosts plug their own parser when items carry more than plain coordinates
/// (unit conversion, smoothing, field selection).
pub trait SampleParser<T: SampleItem> {
    fn parse(&self, item: &T) -> SamplePoint;
}

/// Default parser: reads the item's own axis values unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityParser;

impl<T: SampleItem> SampleParser<T> for IdentityParser {
    fn parse(&self, item: &T) -> SamplePoint {
        SamplePoint::new(item.x_axis(), item.y_axis())
    }
}

/// Calendar-dated sample whose axis index is whole days since an epoch date.
///
/// Pairs naturally with a 7-unit active period: one period is one week.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedSample {
    pub date: NaiveDate,
    pub value: f64,
    epoch: NaiveDate,
}

impl DatedSample {
    #[must_use]
    pub fn new(epoch: NaiveDate, date: NaiveDate, value: f64) -> Self {
        Self { date, value, epoch }
    }
}

impl SampleItem for DatedSample {
    fn x_axis(&self) -> f64 {
        (self.date - self.epoch).num_days() as f64
    }

    fn y_axis(&self) -> f64 {
        self.value
    }
}

/// Ordered, append-only sample container with incremental y-bounds.
///
/// Insertion order is axis order; callers append in non-decreasing x. Bounds
/// are maintained on every append so rendering never rescans the series.
/// When empty, `bounds()` reports the `(0.0, 0.0)` sentinel; callers must
/// treat bounds as undefined at `len() == 0`. Removal is unsupported: bounds
/// are never recomputed downward, so a caller needing removal rebuilds the
/// series from scratch.
#[derive(Debug, Clone, Default)]
pub struct BoundedSeries<T: SampleItem> {
    items: Vec<T>,
    y_min: f64,
    y_max: f64,
}

impl<T: SampleItem> BoundedSeries<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            y_min: 0.0,
            y_max: 0.0,
        }
    }

    pub fn append(&mut self, item: T) {
        let y = item.y_axis();
        if self.items.is_empty() {
            // First real sample replaces the empty sentinel on both sides.
            self.y_min = y;
            self.y_max = y;
        } else {
            self.y_min = self.y_min.min(y);
            self.y_max = self.y_max.max(y);
        }
        self.items.push(item);
        trace!(count = self.items.len(), y, "append sample");
    }

    pub fn append_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        for item in items {
            self.append(item);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.y_min = 0.0;
        self.y_max = 0.0;
    }

    /// Running `(min, max)` over all appended y values.
    #[must_use]
    pub fn bounds(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: SampleItem> FromIterator<T> for BoundedSeries<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut series = Self::new();
        series.append_all(iter);
        series
    }
}
