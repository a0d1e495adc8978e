//! Decoding of the NASA POWER daily point JSON document.

use crate::power_data::error::PowerDataError;
use crate::types::date_key::DateKey;
use crate::types::power_parameter::PowerParameter;
use crate::types::series::{HistoricalRecord, HistoricalSeries};
use log::warn;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Marker NASA POWER uses for days without data when the header omits it.
const DEFAULT_FILL_VALUE: f64 = -999.0;

#[derive(Debug, Deserialize)]
pub(crate) struct PowerResponse {
    #[serde(default)]
    header: Option<Header>,
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Header {
    #[serde(default)]
    fill_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    // `preserve_order` keeps the document's date order.
    parameter: Map<String, Value>,
}

impl PowerResponse {
    pub(crate) fn from_slice(bytes: &[u8]) -> Result<Self, PowerDataError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub(crate) fn into_record(self) -> Result<HistoricalRecord, PowerDataError> {
        let fill_value = self
            .header
            .as_ref()
            .and_then(|header| header.fill_value)
            .unwrap_or(DEFAULT_FILL_VALUE);
        Ok(HistoricalRecord {
            temperature: self.series(PowerParameter::MaxTemperature, fill_value)?,
            precipitation: self.series(PowerParameter::Precipitation, fill_value)?,
        })
    }

    fn series(
        &self,
        parameter: PowerParameter,
        fill_value: f64,
    ) -> Result<HistoricalSeries, PowerDataError> {
        let values = self
            .properties
            .parameter
            .get(parameter.code())
            .and_then(Value::as_object)
            .ok_or_else(|| PowerDataError::MissingParameter(parameter.to_string()))?;

        let mut series = HistoricalSeries::with_capacity(values.len());
        let mut dropped = 0usize;
        for (raw_key, raw_value) in values {
            let key =
                DateKey::parse(raw_key).map_err(|_| PowerDataError::InvalidResponseKey {
                    parameter: parameter.to_string(),
                    key: raw_key.clone(),
                })?;
            match raw_value.as_f64() {
                Some(value) if value.is_finite() && value != fill_value => {
                    series.insert(key, value);
                }
                _ => dropped += 1,
            }
        }

        if dropped > 0 {
            warn!(
                "Dropped {} of {} {} values marked missing (fill value {})",
                dropped,
                values.len(),
                parameter,
                fill_value
            );
        }
        Ok(series)
    }
}
