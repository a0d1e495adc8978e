//! Ordinary least squares trend line.
//!
//! The x axis is whatever the caller supplies; the prediction pipeline uses the
//! calendar year, so the slope reads as "units per year". Inter-annual
//! variation is treated as noise around a straight line, nothing more.

use crate::estimation::error::EstimationError;
use serde::Serialize;

/// `y = slope * x + intercept`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct TrendModel {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendModel {
    /// Fits a least squares line through `(x, y)` points.
    ///
    /// # Errors
    ///
    /// [`EstimationError::DegenerateFit`] when fewer than two points are given
    /// or every point shares the same x value.
    ///
    /// # Examples
    ///
    /// ```
    /// use climatecast::TrendModel;
    ///
    /// let model = TrendModel::fit(&[(0.0, 2.0), (1.0, 5.0), (2.0, 8.0)]).unwrap();
    /// assert!((model.slope - 3.0).abs() < 1e-12);
    /// assert!((model.project(3.0) - 11.0).abs() < 1e-12);
    /// ```
    pub fn fit(points: &[(f64, f64)]) -> Result<Self, EstimationError> {
        let degenerate = || EstimationError::DegenerateFit {
            points: points.len(),
            distinct_x: count_distinct_x(points),
        };

        if points.len() < 2 {
            return Err(degenerate());
        }
        let first_x = points[0].0;
        if points.iter().all(|(x, _)| *x == first_x) {
            return Err(degenerate());
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

        let (numerator, denominator) =
            points
                .iter()
                .fold((0.0, 0.0), |(num, den), (x, y)| {
                    let dx = x - mean_x;
                    (num + dx * (y - mean_y), den + dx * dx)
                });

        if denominator == 0.0 || !denominator.is_finite() {
            return Err(degenerate());
        }

        let slope = numerator / denominator;
        Ok(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Evaluates the line at `x`. Any distance of extrapolation is allowed.
    pub fn project(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

fn count_distinct_x(points: &[(f64, f64)]) -> usize {
    let mut seen: Vec<f64> = Vec::new();
    for (x, _) in points {
        if !seen.contains(x) {
            seen.push(*x);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_points_line_passes_through_both() {
        let points = [(2001.0, 10.5), (2007.0, 13.25)];
        let model = TrendModel::fit(&points).unwrap();
        for (x, y) in points {
            assert!((model.project(x) - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_recovers_exact_line() {
        let points: Vec<(f64, f64)> = (1990..2020)
            .map(|year| (year as f64, 0.03 * year as f64 - 40.0))
            .collect();
        let model = TrendModel::fit(&points).unwrap();
        assert!((model.slope - 0.03).abs() < 1e-9);
        assert!((model.intercept + 40.0).abs() < 1e-6);
    }

    #[test]
    fn test_scenario_projection_to_2025() {
        let points = [(2020.0, -12.49), (2021.0, -14.06), (2022.0, -11.72)];
        let model = TrendModel::fit(&points).unwrap();
        // mean x = 2021, Σdx·dy = 0.77, Σdx² = 2
        assert!((model.slope - 0.385).abs() < 1e-12);
        let expected_intercept = -38.27 / 3.0 - 0.385 * 2021.0;
        assert!((model.intercept - expected_intercept).abs() < 1e-9);
        let projected = model.project(2025.0);
        assert!((projected - (-38.27 / 3.0 + 0.385 * 4.0)).abs() < 1e-9);
        assert!((projected - (-11.216_666_666_666_667)).abs() < 1e-9);
    }

    #[test]
    fn test_too_few_points_is_degenerate() {
        assert_eq!(
            TrendModel::fit(&[]),
            Err(EstimationError::DegenerateFit {
                points: 0,
                distinct_x: 0
            })
        );
        assert_eq!(
            TrendModel::fit(&[(2020.0, 1.0)]),
            Err(EstimationError::DegenerateFit {
                points: 1,
                distinct_x: 1
            })
        );
    }

    #[test]
    fn test_identical_x_is_degenerate() {
        let err = TrendModel::fit(&[(2020.0, 1.0), (2020.0, 2.0), (2020.0, 3.0)]).unwrap_err();
        assert_eq!(
            err,
            EstimationError::DegenerateFit {
                points: 3,
                distinct_x: 1
            }
        );
    }

    #[test]
    fn test_epoch_millisecond_axis_works_too() {
        // Same data on a millisecond time axis gives the same projection.
        let ms_per_year = 365.25 * 24.0 * 3600.0 * 1000.0;
        let by_year = [(2000.0, 1.0), (2001.0, 2.0), (2002.0, 2.5)];
        let by_ms: Vec<(f64, f64)> = by_year.iter().map(|(x, y)| (x * ms_per_year, *y)).collect();
        let a = TrendModel::fit(&by_year).unwrap();
        let b = TrendModel::fit(&by_ms).unwrap();
        assert!((a.project(2010.0) - b.project(2010.0 * ms_per_year)).abs() < 1e-6);
    }
}
