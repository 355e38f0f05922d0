use chrono::NaiveDate;
use pan_chart::core::{BoundedSeries, DatedSample, SampleItem, SamplePoint};

#[test]
fn empty_series_reports_sentinel_bounds() {
    let series: BoundedSeries<SamplePoint> = BoundedSeries::new();
    assert!(series.is_empty());
    assert_eq!(series.bounds(), (0.0, 0.0));
}

#[test]
fn first_append_replaces_sentinel_on_both_sides() {
    let mut series = BoundedSeries::new();
    series.append(SamplePoint::new(0.0, 42.0));
    assert_eq!(series.bounds(), (42.0, 42.0));
}

#[test]
fn bounds_track_running_min_and_max() {
    let mut series = BoundedSeries::new();
    series.append(SamplePoint::new(0.0, 1.0));
    series.append(SamplePoint::new(1.0, 200.0));
    series.append(SamplePoint::new(2.0, 5.0));
    assert_eq!(series.bounds(), (1.0, 200.0));
    assert_eq!(series.len(), 3);
}

#[test]
fn bounds_hold_for_all_negative_values() {
    let mut series = BoundedSeries::new();
    series.append_all([
        SamplePoint::new(0.0, -3.0),
        SamplePoint::new(1.0, -800.5),
        SamplePoint::new(2.0, -0.25),
    ]);
    let (min, max) = series.bounds();
    assert_eq!(min, -800.5);
    assert_eq!(max, -0.25);
    for item in series.iter() {
        assert!(min <= item.y && item.y <= max);
    }
}

#[test]
fn append_all_matches_sequential_appends() {
    let values = [9.0, -4.0, 7.5, 0.0, 12.25];

    let mut batched = BoundedSeries::new();
    batched.append_all(values.iter().map(|&y| SamplePoint::new(0.0, y)));

    let mut sequential = BoundedSeries::new();
    for &y in &values {
        sequential.append(SamplePoint::new(0.0, y));
    }

    assert_eq!(batched.bounds(), sequential.bounds());
}

#[test]
fn bounds_are_order_independent() {
    let values = [3.0, -1.0, 8.0, 8.0, 2.5];
    let mut reversed = values;
    reversed.reverse();

    let forward: BoundedSeries<SamplePoint> =
        values.iter().map(|&y| SamplePoint::new(0.0, y)).collect();
    let backward: BoundedSeries<SamplePoint> =
        reversed.iter().map(|&y| SamplePoint::new(0.0, y)).collect();

    assert_eq!(forward.bounds(), backward.bounds());
}

#[test]
fn clear_restores_sentinel() {
    let mut series = BoundedSeries::new();
    series.append(SamplePoint::new(0.0, -5.0));
    series.append(SamplePoint::new(1.0, 99.0));
    series.clear();
    assert!(series.is_empty());
    assert_eq!(series.bounds(), (0.0, 0.0));

    // Appending after clear starts fresh, not from stale bounds.
    series.append(SamplePoint::new(0.0, 10.0));
    assert_eq!(series.bounds(), (10.0, 10.0));
}

#[test]
fn get_and_iter_preserve_insertion_order() {
    let mut series = BoundedSeries::new();
    series.append(SamplePoint::new(0.0, 1.0));
    series.append(SamplePoint::new(1.0, 2.0));
    assert_eq!(series.get(0).expect("first item").x, 0.0);
    assert_eq!(series.get(1).expect("second item").x, 1.0);
    assert!(series.get(2).is_none());

    let xs: Vec<f64> = series.iter().map(SampleItem::x_axis).collect();
    assert_eq!(xs, vec![0.0, 1.0]);
}

#[test]
fn dated_sample_axis_index_counts_days_since_epoch() {
    let epoch = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid epoch");
    let date = NaiveDate::from_ymd_opt(2024, 1, 8).expect("valid date");
    let sample = DatedSample::new(epoch, date, 3.5);
    assert_eq!(sample.x_axis(), 7.0);
    assert_eq!(sample.y_axis(), 3.5);

    let before = NaiveDate::from_ymd_opt(2023, 12, 31).expect("valid date");
    assert_eq!(DatedSample::new(epoch, before, 0.0).x_axis(), -1.0);
}
