/// Error types for the configuration and inspector boundaries

use thiserror::Error;

use crate::inspector::TransformField;

/// Rejected edits coming from the details panel
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InspectorError {
    /// No object is selected, so there is nothing to edit
    #[error("no object is selected")]
    NoSelection,

    /// The value is NaN or infinite
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: TransformField, value: f64 },

    /// The text could not be parsed as a number
    #[error("{field}: cannot parse {input:?} as a number")]
    Parse { field: TransformField, input: String },

    /// The field name is not one of the nine transform scalars
    #[error("unknown transform field {0:?}")]
    UnknownField(String),
}

/// Invalid scene configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("field of view must lie strictly between 0 and pi radians, got {0}")]
    InvalidFov(f64),

    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    InvalidClipPlanes { near: f64, far: f64 },

    #[error("viewport must be at least 1x1, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

/// Any error raised by the core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Inspector(#[from] InspectorError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
