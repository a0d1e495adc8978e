//! This module provides the main entry point of the crate. A [`Climatecast`]
//! client retrieves the daily history for a location from NASA POWER and turns
//! it into a [`PredictionResult`] for one date or one calendar range.

use crate::config::ClimatecastConfig;
use crate::error::ClimatecastError;
use crate::power_data::fetcher::PowerFetcher;
use crate::prediction;
use crate::types::date_key::DateKey;
use crate::types::prediction::{PredictionRequest, PredictionResult};
use crate::types::series::HistoricalRecord;
use bon::bon;
use log::info;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1),
/// both in decimal degrees.
///
/// # Examples
///
/// ```
/// use climatecast::LatLon;
///
/// let montreal = LatLon(45.5, -73.56);
/// assert_eq!(montreal.0, 45.5); // Latitude
/// assert_eq!(montreal.1, -73.56); // Longitude
/// assert!(montreal.is_valid());
/// assert!(!LatLon(91.0, 0.0).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    /// True when latitude is within [-90, 90] and longitude within [-180, 180].
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.0) && (-180.0..=180.0).contains(&self.1)
    }
}

/// The client for temperature and rain predictions.
///
/// Every prediction performs exactly one request to the data provider for the
/// configured history window, then runs the estimation pipeline on the result.
/// Requests share no mutable state, so one client can serve concurrent calls.
///
/// Create an instance with [`Climatecast::new()`] for the public NASA POWER
/// endpoint, or [`Climatecast::with_config()`] to change the endpoint, history
/// window, reference year or timeout.
///
/// # Examples
///
/// ```rust
/// # use climatecast::{Climatecast, ClimatecastError};
/// # fn run() -> Result<(), ClimatecastError> {
/// let client = Climatecast::new()?;
/// assert_eq!(client.config().reference_year, 2025);
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
pub struct Climatecast {
    fetcher: PowerFetcher,
    config: ClimatecastConfig,
}

#[bon]
impl Climatecast {
    /// Creates a client with [`ClimatecastConfig::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`ClimatecastError::PowerData`] if the HTTP client can't be built.
    pub fn new() -> Result<Self, ClimatecastError> {
        Self::with_config(ClimatecastConfig::default())
    }

    /// Creates a client with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatecastError::InvalidHistoryWindow`] if `history_start` is
    /// after `history_end`, and [`ClimatecastError::PowerData`] if the HTTP
    /// client can't be built.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use climatecast::{Climatecast, ClimatecastConfig, ClimatecastError, DateKey};
    /// # fn run() -> Result<(), ClimatecastError> {
    /// let config = ClimatecastConfig::builder()
    ///     .history_start(DateKey::parse("20000101")?)
    ///     .reference_year(2026)
    ///     .build();
    /// let client = Climatecast::with_config(config)?;
    /// # Ok(())
    /// # }
    /// # run().unwrap();
    /// ```
    pub fn with_config(config: ClimatecastConfig) -> Result<Self, ClimatecastError> {
        check_history_window(&config)?;
        let fetcher = PowerFetcher::new(&config)?;
        Ok(Self { fetcher, config })
    }

    pub fn config(&self) -> &ClimatecastConfig {
        &self.config
    }

    /// Runs one prediction request.
    ///
    /// The coordinates are validated, the configured history window is
    /// retrieved for them, and the pipeline matching `request.mode` runs on
    /// that history.
    ///
    /// # Errors
    ///
    /// * [`ClimatecastError::InvalidCoordinates`] for an out-of-range location.
    /// * [`ClimatecastError::PowerData`] if the retrieval fails or times out.
    /// * [`ClimatecastError::Estimation`] for an empty sample or a degenerate trend fit.
    pub async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ClimatecastError> {
        let record = self.fetch_history(request.location).await?;
        Ok(prediction::predict(
            &record,
            &request.mode,
            self.config.reference_year,
        )?)
    }

    /// Predicts the daily high and chance of rain for a single date.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** Where to predict.
    /// * `.date(&str)`: **Required.** Target date as `YYYYMMDD` or `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimatecastError::MalformedDateKey`] before any network
    /// traffic if `date` can't be parsed, otherwise the errors of
    /// [`Climatecast::predict`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use climatecast::{Climatecast, ClimatecastError, LatLon};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ClimatecastError> {
    /// let client = Climatecast::new()?;
    /// let result = client
    ///     .predict_day()
    ///     .location(LatLon(45.5, -73.56))
    ///     .date("2026-07-01")
    ///     .call()
    ///     .await?;
    /// println!(
    ///     "{:.1} °C ± {:.1} °C, {}% chance of rain",
    ///     result.point_estimate(),
    ///     result.uncertainty(),
    ///     result.rain_probability_percent()
    /// );
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn predict_day(
        &self,
        location: LatLon,
        date: &str,
    ) -> Result<PredictionResult, ClimatecastError> {
        let target = DateKey::from_input(date)?;
        self.predict(&PredictionRequest::single_day(location, target))
            .await
    }

    /// Predicts the average daily high and chance of rain over a calendar range.
    ///
    /// Only the month and day of `start` and `end` matter. Ranges that cross
    /// New Year (e.g. Dec 20 to Jan 5) match no historical day and fail with
    /// an empty sample.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** Where to predict.
    /// * `.start(&str)`: **Required.** First day, `YYYYMMDD` or `YYYY-MM-DD`.
    /// * `.end(&str)`: **Required.** Last day (inclusive), same formats.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use climatecast::{Climatecast, ClimatecastError, LatLon};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), ClimatecastError> {
    /// let client = Climatecast::new()?;
    /// let result = client
    ///     .predict_range()
    ///     .location(LatLon(52.52, 13.40))
    ///     .start("20260801")
    ///     .end("20260810")
    ///     .call()
    ///     .await?;
    /// println!("Average high {:.1} °C", result.point_estimate());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn predict_range(
        &self,
        location: LatLon,
        start: &str,
        end: &str,
    ) -> Result<PredictionResult, ClimatecastError> {
        let start = DateKey::from_input(start)?;
        let end = DateKey::from_input(end)?;
        self.predict(&PredictionRequest::date_range(location, start, end))
            .await
    }

    /// Retrieves the raw daily history for a location without predicting.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: **Required.** Where to retrieve.
    /// * `.start(DateKey)`: Optional. Defaults to the configured `history_start`.
    /// * `.end(DateKey)`: Optional. Defaults to the configured `history_end`.
    #[builder]
    pub async fn historical(
        &self,
        location: LatLon,
        start: Option<DateKey>,
        end: Option<DateKey>,
    ) -> Result<HistoricalRecord, ClimatecastError> {
        if !location.is_valid() {
            return Err(ClimatecastError::InvalidCoordinates {
                lat: location.0,
                lon: location.1,
            });
        }
        let start = start.unwrap_or(self.config.history_start);
        let end = end.unwrap_or(self.config.history_end);
        if start > end {
            return Err(ClimatecastError::InvalidHistoryWindow { start, end });
        }
        Ok(self.fetcher.fetch(location, start, end).await?)
    }

    async fn fetch_history(&self, location: LatLon) -> Result<HistoricalRecord, ClimatecastError> {
        let record = self.historical().location(location).call().await?;
        info!(
            "History for ({}, {}): {} temperature days, {} precipitation days",
            location.0,
            location.1,
            record.temperature.len(),
            record.precipitation.len()
        );
        Ok(record)
    }
}

fn check_history_window(config: &ClimatecastConfig) -> Result<(), ClimatecastError> {
    if config.history_start > config.history_end {
        return Err(ClimatecastError::InvalidHistoryWindow {
            start: config.history_start,
            end: config.history_end,
        });
    }
    Ok(())
}

#[cfg(test)]
impl Climatecast {
    pub(crate) fn with_fetcher(config: ClimatecastConfig, fetcher: PowerFetcher) -> Self {
        Self { fetcher, config }
    }
}
