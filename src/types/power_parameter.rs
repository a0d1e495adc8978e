//! NASA POWER daily parameters requested by this crate.

use std::fmt;

/// A NASA POWER daily point parameter.
///
/// Every retrieval asks for [`PowerParameter::ALL`] in one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerParameter {
    /// Maximum air temperature at 2 meters, °C.
    MaxTemperature,
    /// Bias-corrected total precipitation, mm/day.
    Precipitation,
}

impl PowerParameter {
    pub const ALL: [PowerParameter; 2] =
        [PowerParameter::MaxTemperature, PowerParameter::Precipitation];

    pub(crate) fn code(&self) -> &'static str {
        match self {
            PowerParameter::MaxTemperature => "T2M_MAX",
            PowerParameter::Precipitation => "PRECTOTCORR",
        }
    }

    /// Comma-joined codes for the `parameters` query argument.
    pub(crate) fn query_value() -> String {
        Self::ALL
            .iter()
            .map(|parameter| parameter.code())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Formats a `PowerParameter` as its NASA POWER code.
///
/// # Examples
///
/// ```
/// use climatecast::PowerParameter;
///
/// assert_eq!(PowerParameter::MaxTemperature.to_string(), "T2M_MAX");
/// assert_eq!(format!("{}", PowerParameter::Precipitation), "PRECTOTCORR");
/// ```
impl fmt::Display for PowerParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
