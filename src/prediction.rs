//! Turns a [`HistoricalRecord`] into a [`PredictionResult`] for one request.
//!
//! Pure and synchronous: all I/O happens before, in [`crate::PowerFetcher`].
//! Any failure aborts the whole prediction; nothing partial is returned.

use crate::estimation::error::EstimationError;
use crate::estimation::rain::{rain_probability, RainWeighting};
use crate::estimation::trend::TrendModel;
use crate::estimation::variability::{adjust_projection, sample_std_dev};
use crate::filtering::HistoricalFilterExt;
use crate::types::date_key::DateKey;
use crate::types::prediction::{PredictionResult, RequestMode};
use crate::types::series::HistoricalRecord;
use log::{debug, info};

/// Runs the pipeline that matches `mode`.
///
/// `reference_year` is the anchor of the variability adjustment and only
/// matters for [`RequestMode::SingleDay`].
pub fn predict(
    record: &HistoricalRecord,
    mode: &RequestMode,
    reference_year: i32,
) -> Result<PredictionResult, EstimationError> {
    match mode {
        RequestMode::SingleDay { target } => predict_single_day(record, target, reference_year),
        RequestMode::DateRange { start, end } => predict_date_range(record, start, end),
    }
}

/// Single-date mode.
///
/// 1. Keep the temperatures and precipitation recorded on `target`'s month
///    and day in every year.
/// 2. Fit a least squares line of temperature against year and evaluate it
///    at `target`'s year.
/// 3. Nudge that projection by `std_dev * 0.1 * (target year - reference_year)`.
/// 4. Estimate rain with [`RainWeighting::Recency`].
///
/// # Errors
///
/// * [`EstimationError::EmptySample`] when no temperature falls on that day.
/// * [`EstimationError::DegenerateFit`] when fewer than two distinct years do.
pub fn predict_single_day(
    record: &HistoricalRecord,
    target: &DateKey,
    reference_year: i32,
) -> Result<PredictionResult, EstimationError> {
    let temperatures = record.temperature.filter_by_day(target);
    let rain = record.precipitation.filter_by_day(target);

    let Some(mean) = temperatures.mean() else {
        return Err(EstimationError::EmptySample {
            what: "temperatures",
        });
    };

    let trend = TrendModel::fit(&temperatures.points())?;
    let projection = trend.project(target.year() as f64);
    debug!(
        "Trend for {:02}-{:02}: slope {:.4} °C/year, intercept {:.4}, projection to {} = {:.2}",
        target.month(),
        target.day(),
        trend.slope,
        trend.intercept,
        target.year(),
        projection
    );

    let std_dev = sample_std_dev(&temperatures.values());
    let point_estimate = adjust_projection(projection, std_dev, target.year() - reference_year);
    let rain_chance = rain_probability(&rain.values(), RainWeighting::Recency);

    info!(
        "Prediction for {}: {:.1} °C ± {:.1} °C, {}% rain ({} years)",
        target,
        point_estimate,
        std_dev,
        rain_chance.percent,
        temperatures.len()
    );

    Ok(PredictionResult::new(
        RequestMode::SingleDay { target: *target },
        point_estimate,
        std_dev,
        rain_chance.percent,
        temperatures.len(),
        rain_chance.sample_size,
        mean,
        Some(trend),
    ))
}

/// Range mode.
///
/// Keeps every day between `start` and `end` (calendar days, years ignored,
/// no wrap across New Year) in every year. The estimate is the mean of those
/// temperatures with their standard deviation as the uncertainty; rain uses
/// [`RainWeighting::Magnitude`]. No trend is fitted.
///
/// # Errors
///
/// [`EstimationError::EmptySample`] when no temperature falls in the range,
/// which includes every range whose start is later in the year than its end.
pub fn predict_date_range(
    record: &HistoricalRecord,
    start: &DateKey,
    end: &DateKey,
) -> Result<PredictionResult, EstimationError> {
    let temperatures = record.temperature.filter_by_range(start, end);
    let rain = record.precipitation.filter_by_range(start, end);

    let Some(mean) = temperatures.mean() else {
        return Err(EstimationError::EmptySample {
            what: "temperatures",
        });
    };

    let std_dev = sample_std_dev(&temperatures.values());
    let rain_chance = rain_probability(&rain.values(), RainWeighting::Magnitude);

    info!(
        "Prediction for {} to {}: average high {:.1} °C, {}% rain ({} days)",
        start,
        end,
        mean,
        rain_chance.percent,
        temperatures.len()
    );

    Ok(PredictionResult::new(
        RequestMode::DateRange {
            start: *start,
            end: *end,
        },
        mean,
        std_dev,
        rain_chance.percent,
        temperatures.len(),
        rain_chance.sample_size,
        mean,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::series::HistoricalSeries;

    fn key(raw: &str) -> DateKey {
        DateKey::parse(raw).unwrap()
    }

    fn series(entries: &[(&str, f64)]) -> HistoricalSeries {
        entries.iter().map(|(k, v)| (key(k), *v)).collect()
    }

    fn scenario_record() -> HistoricalRecord {
        HistoricalRecord {
            temperature: series(&[
                ("20200101", -12.49),
                ("20200102", -3.0),
                ("20210101", -14.06),
                ("20210102", -4.0),
                ("20220101", -11.72),
                ("20220102", -5.0),
            ]),
            precipitation: series(&[
                ("20200101", 0.0),
                ("20200102", 4.0),
                ("20210101", 2.4),
                ("20210102", 0.0),
                ("20220101", 0.9),
                ("20220102", 0.1),
            ]),
        }
    }

    #[test]
    fn test_single_day_scenario() {
        let result = predict_single_day(&scenario_record(), &key("20250101"), 2025).unwrap();

        let trend = result.trend().unwrap();
        assert!((trend.slope - 0.385).abs() < 1e-12);
        // Target year equals the reference year: no adjustment.
        let projection = -38.27 / 3.0 + 0.385 * 4.0;
        assert!((result.point_estimate() - projection).abs() < 1e-9);
        assert!((result.point_estimate() - (-11.216_666_666_666_667)).abs() < 1e-9);

        let values = [-12.49, -14.06, -11.72];
        let mean = values.iter().sum::<f64>() / 3.0;
        let std_dev = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 3.0).sqrt();
        assert!((result.uncertainty() - std_dev).abs() < 1e-12);
        assert!((result.historical_mean() - mean).abs() < 1e-12);

        // Weights 0.7, 0.8, 0.9; rainy: 2nd and 3rd => 1.7 / 2.4 = 70.8 %
        assert_eq!(result.rain_probability_percent(), 71);
        assert_eq!(result.sample_size(), 3);
        assert_eq!(result.rain_sample_size(), 3);
        assert_eq!(
            result.mode(),
            RequestMode::SingleDay {
                target: key("20250101")
            }
        );
    }

    #[test]
    fn test_single_day_adjusts_with_year_distance() {
        let record = scenario_record();
        let at_reference = predict_single_day(&record, &key("20300101"), 2030).unwrap();
        let later = predict_single_day(&record, &key("20300101"), 2025).unwrap();
        let expected_delta = at_reference.uncertainty() * 0.1 * 5.0;
        assert!(
            (later.point_estimate() - at_reference.point_estimate() - expected_delta).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_single_day_without_matches_is_empty_sample() {
        let record = scenario_record();
        let err = predict_single_day(&record, &key("20250704"), 2025).unwrap_err();
        assert_eq!(
            err,
            EstimationError::EmptySample {
                what: "temperatures"
            }
        );

        let empty = HistoricalRecord::default();
        assert!(matches!(
            predict_single_day(&empty, &key("20250101"), 2025),
            Err(EstimationError::EmptySample { .. })
        ));
    }

    #[test]
    fn test_single_day_with_one_year_is_degenerate() {
        let record = HistoricalRecord {
            temperature: series(&[("20200101", 1.0)]),
            precipitation: series(&[("20200101", 1.0)]),
        };
        let err = predict_single_day(&record, &key("20250101"), 2025).unwrap_err();
        assert!(matches!(err, EstimationError::DegenerateFit { points: 1, .. }));
    }

    #[test]
    fn test_single_day_without_rain_data_reports_zero_sample() {
        let record = HistoricalRecord {
            temperature: scenario_record().temperature,
            precipitation: HistoricalSeries::new(),
        };
        let result = predict_single_day(&record, &key("20250101"), 2025).unwrap();
        assert_eq!(result.rain_probability_percent(), 0);
        assert_eq!(result.rain_sample_size(), 0);
    }

    #[test]
    fn test_date_range_uses_mean_and_magnitude_weighting() {
        let result =
            predict_date_range(&scenario_record(), &key("20250101"), &key("20250102")).unwrap();
        let values = [-12.49, -3.0, -14.06, -4.0, -11.72, -5.0];
        let mean = values.iter().sum::<f64>() / 6.0;
        assert!((result.point_estimate() - mean).abs() < 1e-12);
        assert!((result.uncertainty() - sample_std_dev(&values)).abs() < 1e-12);
        assert_eq!(result.sample_size(), 6);
        assert!(result.trend().is_none());
        // Rainy: 4.0 (+0.5), 2.4 (+0.5), 0.9 (+0.45) => 4.45 / 6 = 74.2 %
        assert_eq!(result.rain_probability_percent(), 74);
    }

    #[test]
    fn test_date_range_across_new_year_is_empty_sample() {
        let err = predict_date_range(&scenario_record(), &key("20251220"), &key("20260102"))
            .unwrap_err();
        assert!(matches!(err, EstimationError::EmptySample { .. }));
    }

    #[test]
    fn test_predict_dispatches_on_mode() {
        let record = scenario_record();
        let single = predict(
            &record,
            &RequestMode::SingleDay {
                target: key("20250101"),
            },
            2025,
        )
        .unwrap();
        assert!(single.trend().is_some());
        let range = predict(
            &record,
            &RequestMode::DateRange {
                start: key("20250101"),
                end: key("20250101"),
            },
            2025,
        )
        .unwrap();
        assert!(range.trend().is_none());
        assert_eq!(range.sample_size(), 3);
    }
}
