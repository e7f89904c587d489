//! Viability aggregation: replicate averages normalized to a positive control

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::stats::{iqr_filter, mean, Outlier};

/// A named sample with its adjusted-absorbance replicate values
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Sample name as entered by the user
    pub name: String,
    /// Adjusted absorbance per replicate, in selection order
    pub replicates: Vec<f64>,
}

impl Sample {
    /// Create a new sample
    pub fn new<S: Into<String>>(name: S, replicates: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            replicates,
        }
    }
}

/// One row of the results table
#[derive(Debug, Clone, PartialEq)]
pub struct ViabilityResult {
    /// Sample name
    pub sample: String,
    /// Cell viability percentage, rounded to one decimal place
    pub viability_pct: f64,
}

/// Outliers discarded from one sample, for reporting to the user
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierReport {
    /// Sample name
    pub sample: String,
    /// Discarded values with their original replicate indices
    pub discarded: Vec<Outlier>,
}

/// The outcome of a viability computation
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViabilitySummary {
    /// One row per sample, positive control first (always exactly 100.0)
    pub results: Vec<ViabilityResult>,
    /// Per-sample outlier reports, only for samples that lost values
    pub outliers: Vec<OutlierReport>,
    /// Names of samples skipped for lack of usable data
    pub skipped: Vec<String>,
}

/// Round to one decimal place, half away from zero
fn round_to_1dp(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Compute viability percentages for `samples` relative to `control`.
///
/// The control's viability is 100.0 by definition, not computed; its
/// replicates only provide the normalization denominator. Outlier removal
/// applies IQR filtering per sample, and only to samples with more than
/// two replicates.
///
/// A control with no replicate values is fatal. A sample with no replicate
/// values, or whose values are all filtered away, is skipped and named in
/// [`ViabilitySummary::skipped`].
///
/// Pure function: identical inputs always produce identical summaries.
pub fn compute_viability(
    control: &Sample,
    samples: &[Sample],
    remove_outliers: bool,
) -> Result<ViabilitySummary> {
    let control_average = mean(&control.replicates)
        .ok_or_else(|| Error::NoControlData(control.name.clone()))?;

    debug!(
        control = %control.name,
        replicates = control.replicates.len(),
        average = control_average,
        "computed positive control baseline"
    );

    let mut summary = ViabilitySummary::default();
    summary.results.push(ViabilityResult {
        sample: control.name.clone(),
        viability_pct: 100.0,
    });

    for sample in samples {
        if sample.replicates.is_empty() {
            warn!(sample = %sample.name, "no valid replicate data; skipping sample");
            summary.skipped.push(sample.name.clone());
            continue;
        }

        let filtered = if remove_outliers && sample.replicates.len() > 2 {
            let (kept, discarded) = iqr_filter(&sample.replicates);
            if !discarded.is_empty() {
                summary.outliers.push(OutlierReport {
                    sample: sample.name.clone(),
                    discarded,
                });
            }
            kept
        } else {
            sample.replicates.clone()
        };

        let Some(average) = mean(&filtered) else {
            warn!(sample = %sample.name, "all replicates filtered as outliers; skipping sample");
            summary.skipped.push(sample.name.clone());
            continue;
        };

        summary.results.push(ViabilityResult {
            sample: sample.name.clone(),
            viability_pct: round_to_1dp(100.0 * average / control_average),
        });
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn control() -> Sample {
        Sample::new("untreated", vec![100.0, 110.0, 105.0])
    }

    #[test]
    fn test_viability_against_control() {
        // control mean 105, sample mean 92.5 -> round(100*92.5/105, 1) = 88.1
        let summary =
            compute_viability(&control(), &[Sample::new("drug A", vec![90.0, 95.0])], false)
                .unwrap();

        assert_eq!(summary.results.len(), 2);
        assert_eq!(summary.results[1].sample, "drug A");
        assert_eq!(summary.results[1].viability_pct, 88.1);
        assert!(summary.skipped.is_empty());
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn test_control_is_always_first_and_exactly_100() {
        // Control viability never depends on its own replicate spread
        let noisy_control = Sample::new("untreated", vec![3.0, 900.0, -55.0]);
        let summary = compute_viability(&noisy_control, &[], false).unwrap();

        assert_eq!(summary.results.len(), 1);
        assert_eq!(summary.results[0].sample, "untreated");
        assert_eq!(summary.results[0].viability_pct, 100.0);
    }

    #[test]
    fn test_empty_control_is_fatal() {
        let err = compute_viability(&Sample::new("untreated", vec![]), &[], false).unwrap_err();
        assert!(matches!(err, Error::NoControlData(_)));
    }

    #[test]
    fn test_sample_without_data_is_skipped() {
        let summary = compute_viability(
            &control(),
            &[
                Sample::new("empty well", vec![]),
                Sample::new("drug A", vec![105.0]),
            ],
            false,
        )
        .unwrap();

        assert_eq!(summary.skipped, vec!["empty well".to_string()]);
        assert_eq!(summary.results.len(), 2);
        assert_eq!(summary.results[1].sample, "drug A");
        assert_eq!(summary.results[1].viability_pct, 100.0);
    }

    #[test]
    fn test_outlier_removal_changes_average() {
        let spread = Sample::new("drug B", vec![10.0, 12.0, 11.0, 13.0, 100.0]);

        // Unfiltered mean is 29.2
        let summary = compute_viability(&control(), &[spread.clone()], false).unwrap();
        assert_eq!(summary.results[1].viability_pct, 27.8);
        assert!(summary.outliers.is_empty());

        // Filtered: 100 discarded, mean over [10, 12, 11, 13] = 11.5
        let summary = compute_viability(&control(), &[spread], true).unwrap();
        assert_eq!(summary.results[1].viability_pct, 11.0);
        assert_eq!(summary.outliers.len(), 1);
        assert_eq!(summary.outliers[0].sample, "drug B");
        assert_eq!(summary.outliers[0].discarded.len(), 1);
        assert_eq!(summary.outliers[0].discarded[0].value, 100.0);
        assert_eq!(summary.outliers[0].discarded[0].index, 4);
    }

    #[test]
    fn test_two_replicates_never_filtered() {
        // Even wildly different pairs pass through when n <= 2
        let pair = Sample::new("drug C", vec![10.0, 1000.0]);
        let summary = compute_viability(&control(), &[pair], true).unwrap();

        assert!(summary.outliers.is_empty());
        assert_eq!(summary.results[1].viability_pct, 481.0); // mean 505 / 105
    }

    #[test]
    fn test_sample_order_is_preserved() {
        let samples = vec![
            Sample::new("c", vec![50.0]),
            Sample::new("a", vec![60.0]),
            Sample::new("b", vec![70.0]),
        ];
        let summary = compute_viability(&control(), &samples, false).unwrap();

        let names: Vec<&str> = summary.results.iter().map(|r| r.sample.as_str()).collect();
        assert_eq!(names, vec!["untreated", "c", "a", "b"]);
    }

    #[test]
    fn test_idempotent() {
        let samples = vec![
            Sample::new("drug A", vec![90.0, 95.0, 94.0, 300.0]),
            Sample::new("drug B", vec![12.0, 14.0]),
        ];
        let first = compute_viability(&control(), &samples, true).unwrap();
        let second = compute_viability(&control(), &samples, true).unwrap();
        assert_eq!(first, second);
    }
}
