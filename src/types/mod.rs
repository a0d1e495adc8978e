pub mod date_key;
pub mod error;
pub mod power_parameter;
pub mod prediction;
pub mod series;
