//! Settings for the [`crate::Climatecast`] client.

use crate::types::date_key::DateKey;
use bon::Builder;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
pub const DEFAULT_COMMUNITY: &str = "RE";
/// First day of NASA POWER daily coverage.
pub const DEFAULT_HISTORY_START: DateKey = DateKey::new_unchecked(1981, 1, 1);
pub const DEFAULT_HISTORY_END: DateKey = DateKey::new_unchecked(2025, 10, 1);
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration.
///
/// Every field has a default, so `ClimatecastConfig::default()` (or
/// `ClimatecastConfig::builder().build()`) targets the public NASA POWER
/// endpoint with the 1981-01-01 to 2025-10-01 history window.
///
/// # Examples
///
/// ```
/// use climatecast::ClimatecastConfig;
/// use std::time::Duration;
///
/// let config = ClimatecastConfig::builder()
///     .reference_year(2026)
///     .timeout(Duration::from_secs(10))
///     .build();
/// assert_eq!(config.reference_year, 2026);
/// assert_eq!(config.history_start.to_string(), "19810101");
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ClimatecastConfig {
    /// Daily point endpoint of the NASA POWER API.
    #[builder(into, default = String::from(DEFAULT_BASE_URL))]
    pub base_url: String,

    /// NASA POWER user community; selects the unit conventions of the response.
    #[builder(into, default = String::from(DEFAULT_COMMUNITY))]
    pub community: String,

    /// First day of history fetched for every request.
    #[builder(default = DEFAULT_HISTORY_START)]
    pub history_start: DateKey,

    /// Last day of history fetched for every request.
    #[builder(default = DEFAULT_HISTORY_END)]
    pub history_end: DateKey,

    /// Anchor year of the variability adjustment: a target in this year gets
    /// no adjustment.
    #[builder(default = DEFAULT_REFERENCE_YEAR)]
    pub reference_year: i32,

    /// Limit for the whole HTTP exchange with the data provider.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl Default for ClimatecastConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClimatecastConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.community, "RE");
        assert_eq!(config.history_start, DateKey::parse("19810101").unwrap());
        assert_eq!(config.history_end, DateKey::parse("20251001").unwrap());
        assert_eq!(config.reference_year, 2025);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClimatecastConfig::builder()
            .base_url("http://127.0.0.1:9/point")
            .history_start(DateKey::parse("20000101").unwrap())
            .build();
        assert_eq!(config.base_url, "http://127.0.0.1:9/point");
        assert_eq!(config.history_start.to_string(), "20000101");
        assert_eq!(config.history_end, DEFAULT_HISTORY_END);
    }
}
