//! Request and result types of the prediction pipeline.

use crate::climatecast::LatLon;
use crate::estimation::trend::TrendModel;
use crate::types::date_key::DateKey;
use serde::Serialize;

/// Which historical subset a prediction is built from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RequestMode {
    /// The same calendar day as `target`, across every available year. The
    /// estimate is a trend projection to `target`'s year.
    SingleDay { target: DateKey },
    /// Every calendar day from `start` to `end` (years ignored), across every
    /// available year. The estimate is the plain historical mean.
    DateRange { start: DateKey, end: DateKey },
}

/// A complete prediction request: where, and for which day(s).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PredictionRequest {
    pub location: LatLon,
    pub mode: RequestMode,
}

impl PredictionRequest {
    pub fn single_day(location: LatLon, target: DateKey) -> Self {
        Self {
            location,
            mode: RequestMode::SingleDay { target },
        }
    }

    pub fn date_range(location: LatLon, start: DateKey, end: DateKey) -> Self {
        Self {
            location,
            mode: RequestMode::DateRange { start, end },
        }
    }
}

/// The outcome of one prediction request.
///
/// Created once by the orchestrator and handed to the caller; there are no
/// setters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    mode: RequestMode,
    point_estimate: f64,
    uncertainty: f64,
    rain_probability_percent: u8,
    sample_size: usize,
    rain_sample_size: usize,
    historical_mean: f64,
    trend: Option<TrendModel>,
}

impl PredictionResult {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        mode: RequestMode,
        point_estimate: f64,
        uncertainty: f64,
        rain_probability_percent: u8,
        sample_size: usize,
        rain_sample_size: usize,
        historical_mean: f64,
        trend: Option<TrendModel>,
    ) -> Self {
        Self {
            mode,
            point_estimate,
            uncertainty,
            rain_probability_percent,
            sample_size,
            rain_sample_size,
            historical_mean,
            trend,
        }
    }

    pub fn mode(&self) -> RequestMode {
        self.mode
    }

    /// Estimated daily high, °C.
    pub fn point_estimate(&self) -> f64 {
        self.point_estimate
    }

    /// Standard deviation of the historical temperatures, °C. Displayed as
    /// `point_estimate ± uncertainty`.
    pub fn uncertainty(&self) -> f64 {
        self.uncertainty
    }

    /// Chance of rain, 0 to 100.
    pub fn rain_probability_percent(&self) -> u8 {
        self.rain_probability_percent
    }

    /// Number of historical temperatures the estimate is based on.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Number of historical precipitation values behind the rain probability.
    /// Zero means the probability is a placeholder, not an observation.
    pub fn rain_sample_size(&self) -> usize {
        self.rain_sample_size
    }

    pub fn historical_mean(&self) -> f64 {
        self.historical_mean
    }

    /// Fitted year trend; only present for [`RequestMode::SingleDay`].
    pub fn trend(&self) -> Option<TrendModel> {
        self.trend
    }
}
