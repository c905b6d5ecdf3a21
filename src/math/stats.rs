//! Summary statistics over measurement columns with missing values.
//!
//! Note: `median` reorders the input slice.

pub fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));
    let n = values.len();
    if n % 2 == 1 {
        Some(values[n / 2])
    } else {
        let a = values[n / 2 - 1];
        let b = values[n / 2];
        Some((a + b) / 2.0)
    }
}

/// Median of the present, finite values. `None` when nothing qualifies.
pub fn median_present<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut present: Vec<f64> = values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect();
    median(&mut present)
}

/// `a - b`, missing if either side is.
pub fn sub_present(a: Option<f64>, b: Option<f64>) -> Option<f64> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a - b),
        _ => None,
    }
}
