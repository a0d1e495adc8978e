//! Weighted share of rainy days in a filtered precipitation sample.

use serde::Serialize;

/// Daily precipitation above this many mm counts as a rainy day.
pub const RAIN_THRESHOLD_MM: f64 = 0.5;

/// How each day in the sample is weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RainWeighting {
    /// Used for single-day requests. The i-th of N days weighs
    /// `0.7 + 0.3 * i / N`, so later entries in the sample count more.
    Recency,
    /// Used for range requests. Every day weighs 1.0; a rainy day additionally
    /// contributes a boost of `min(mm / 2, 0.5)` to the rainy total only.
    Magnitude,
}

/// A rain probability and the number of days it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RainProbability {
    pub percent: u8,
    pub sample_size: usize,
}

impl RainProbability {
    /// True when the percentage is a placeholder for an empty sample.
    pub fn is_empty_sample(&self) -> bool {
        self.sample_size == 0
    }
}

/// Computes the weighted rain probability of `values` (mm/day, sample order).
///
/// An empty sample yields `0` percent with `sample_size == 0`. The magnitude
/// boost can push the raw ratio above 1, so the result is capped at 100.
///
/// # Examples
///
/// ```
/// use climatecast::{rain_probability, RainWeighting};
///
/// let p = rain_probability(&[0.0, 3.0], RainWeighting::Recency);
/// // weights 0.7 and 0.85: 0.85 / 1.55 = 54.8 %
/// assert_eq!(p.percent, 55);
/// assert_eq!(p.sample_size, 2);
/// ```
pub fn rain_probability(values: &[f64], weighting: RainWeighting) -> RainProbability {
    let sample_size = values.len();
    if sample_size == 0 {
        return RainProbability {
            percent: 0,
            sample_size,
        };
    }

    let n = sample_size as f64;
    let (rainy, total) = values
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(rainy, total), (i, &mm)| {
            let is_rainy = mm > RAIN_THRESHOLD_MM;
            match weighting {
                RainWeighting::Recency => {
                    let weight = 0.7 + 0.3 * (i as f64 / n);
                    (rainy + if is_rainy { weight } else { 0.0 }, total + weight)
                }
                RainWeighting::Magnitude => {
                    let weight = 1.0;
                    let boost = (mm / 2.0).min(0.5);
                    (
                        rainy + if is_rainy { weight + boost } else { 0.0 },
                        total + weight,
                    )
                }
            }
        });

    let percent = ((rainy / total) * 100.0).round().clamp(0.0, 100.0) as u8;
    RainProbability {
        percent,
        sample_size,
    }
}
