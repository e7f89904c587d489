//! alamarBlue assay calibration

/// Calibration coefficient applied to the 570nm reading.
///
/// Fixed for this assay/plate-reader combination; changing either
/// coefficient invalidates comparisons against historical runs.
pub const COEFF_570: f64 = 117_216.0;

/// Calibration coefficient applied to the 600nm reading.
pub const COEFF_600: f64 = 80_586.0;

/// Compute the adjusted absorbance for one replicate.
///
/// `adjusted = reading570 * 117216 - reading600 * 80586`
///
/// # Examples
/// ```
/// use alamar_core::adjusted_absorbance;
///
/// let adjusted = adjusted_absorbance(0.5, 0.2);
/// assert!((adjusted - 42_490.8).abs() < 1e-9);
/// ```
pub fn adjusted_absorbance(reading_570: f64, reading_600: f64) -> f64 {
    reading_570 * COEFF_570 - reading_600 * COEFF_600
}
