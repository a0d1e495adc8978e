use crate::estimation::error::EstimationError;
use crate::power_data::error::PowerDataError;
use crate::types::date_key::DateKey;
use crate::types::error::DateKeyError;
use thiserror::Error;

/// The single failure a request reports. No partial prediction accompanies it.
#[derive(Debug, Error)]
pub enum ClimatecastError {
    #[error(transparent)]
    MalformedDateKey(#[from] DateKeyError),

    #[error(transparent)]
    Estimation(#[from] EstimationError),

    #[error(transparent)]
    PowerData(#[from] PowerDataError),

    #[error("Coordinates ({lat}, {lon}) are out of range: latitude must be within [-90, 90], longitude within [-180, 180]")]
    InvalidCoordinates { lat: f64, lon: f64 },

    #[error("History window {start}..={end} is empty")]
    InvalidHistoryWindow { start: DateKey, end: DateKey },
}
