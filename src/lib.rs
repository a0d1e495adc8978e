mod climatecast;
mod config;
mod error;
mod estimation;
mod filtering;
mod power_data;
mod prediction;
mod types;

pub use climatecast::*;
pub use config::*;
pub use error::ClimatecastError;
pub use filtering::HistoricalFilterExt;
pub use prediction::{predict, predict_date_range, predict_single_day};

pub use estimation::rain::{rain_probability, RainProbability, RainWeighting, RAIN_THRESHOLD_MM};
pub use estimation::trend::TrendModel;
pub use estimation::variability::{adjust_projection, sample_std_dev, ADJUSTMENT_PER_YEAR};

pub use power_data::fetcher::PowerFetcher;

pub use types::date_key::DateKey;
pub use types::power_parameter::PowerParameter;
pub use types::prediction::{PredictionRequest, PredictionResult, RequestMode};
pub use types::series::{FilteredSubset, HistoricalRecord, HistoricalSeries, YearValue};

pub use estimation::error::EstimationError;
pub use power_data::error::PowerDataError;
pub use types::error::DateKeyError;
