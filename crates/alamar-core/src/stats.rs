//! Replicate statistics: mean, percentiles, IQR outlier filtering

/// A value discarded by outlier filtering, with its position in the
/// original replicate list.
///
/// Reported as an indexed list rather than a set so that duplicate values
/// keep their multiplicity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outlier {
    /// Index into the unfiltered replicate list
    pub index: usize,
    /// The discarded adjusted-absorbance value
    pub value: f64,
}

/// Arithmetic mean. Returns `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// The p-th percentile (0..=100) using linear interpolation between the
/// two nearest data points, the standard method (and NumPy's default).
///
/// Returns `None` for an empty slice.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = (sorted.len() - 1) as f64 * p / 100.0;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        return Some(sorted[lo]);
    }

    let frac = rank - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// Filter values outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` (inclusive bounds).
///
/// Returns the kept values in their original order plus the discarded
/// values with their original indices. An input of fewer than two values
/// is returned unfiltered.
pub fn iqr_filter(values: &[f64]) -> (Vec<f64>, Vec<Outlier>) {
    let (Some(q1), Some(q3)) = (percentile(values, 25.0), percentile(values, 75.0)) else {
        return (values.to_vec(), Vec::new());
    };

    let iqr = q3 - q1;
    let t_min = q1 - 1.5 * iqr;
    let t_max = q3 + 1.5 * iqr;

    let mut kept = Vec::with_capacity(values.len());
    let mut discarded = Vec::new();

    for (index, &value) in values.iter().enumerate() {
        if value >= t_min && value <= t_max {
            kept.push(value);
        } else {
            discarded.push(Outlier { index, value });
        }
    }

    (kept, discarded)
}
