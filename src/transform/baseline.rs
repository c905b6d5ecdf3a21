use std::collections::HashMap;

use crate::math::stats::{median_present, sub_present};
use crate::schema::v1::TimeSeriesRow;
use crate::transform::BASELINE_WINDOW_MINUTES;

/// Per-subject first-day `vo2` median. Subjects with no present value in the
/// window map to `None`.
pub fn baselines(rows: &[TimeSeriesRow]) -> HashMap<String, Option<f64>> {
    let mut window: HashMap<&str, Vec<Option<f64>>> = HashMap::new();
    for row in rows {
        let values = window.entry(row.id.as_str()).or_default();
        if row.time < BASELINE_WINDOW_MINUTES {
            values.push(row.vo2);
        }
    }
    window
        .into_iter()
        .map(|(id, values)| (id.to_string(), median_present(values)))
        .collect()
}

/// Fills `vo2Baseline` and `vo2BaselineAdjusted` in place without reordering.
pub fn normalize(rows: &mut [TimeSeriesRow]) {
    let baselines = baselines(rows);
    for row in rows.iter_mut() {
        let baseline = baselines.get(&row.id).copied().flatten();
        row.vo2_baseline = baseline;
        row.vo2_baseline_adjusted = sub_present(row.vo2, baseline);
    }
}
