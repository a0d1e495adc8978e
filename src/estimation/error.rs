use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimationError {
    #[error("Cannot fit a trend through {points} point(s) with {distinct_x} distinct x value(s); need at least 2 distinct")]
    DegenerateFit { points: usize, distinct_x: usize },

    #[error("No historical {what} matched the requested calendar day(s)")]
    EmptySample { what: &'static str },
}
