use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LanegenError {
    #[error("Invalid curve: expected 4 control points, got {count}")]
    InvalidCurve { count: usize },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, LanegenError>;
