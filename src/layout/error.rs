// src/layout/error.rs
use crate::math::error::MathError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("A layout run is already in progress")]
    RunInProgress,

    #[error("No finished layout available")]
    NoLayout,

    #[error("No layout run in progress")]
    NotRunning,

    #[error("Site index {index} out of range for {len} sites")]
    SiteIndexOutOfRange { index: usize, len: usize },

    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Invalid value {value} for item '{label}': values must be finite and non-negative")]
    InvalidValue { label: String, value: f64 },

    #[error("Dataset values sum to zero")]
    ZeroTotal,

    #[error("Invalid layout configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error(transparent)]
    Math(#[from] MathError),
}

pub type LayoutResult<T> = Result<T, LayoutError>;
