//! Spread of the historical sample and the year-distance nudge applied to a
//! trend projection.

/// Share of one standard deviation added per year between the reference year
/// and the target year.
pub const ADJUSTMENT_PER_YEAR: f64 = 0.1;

/// Standard deviation of `values`, dividing by N (not N - 1).
///
/// Empty and single-element inputs return `0.0` rather than `NaN`.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// `projection + std_dev * 0.1 * year_distance`.
///
/// A heuristic: the further the target year is from the reference year, the
/// more of the historical spread is added (or subtracted, for past years). It
/// is not a confidence bound.
pub fn adjust_projection(projection: f64, std_dev: f64, year_distance: i32) -> f64 {
    projection + std_dev * ADJUSTMENT_PER_YEAR * year_distance as f64
}
