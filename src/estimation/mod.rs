pub mod error;
pub mod rain;
pub mod trend;
pub mod variability;
