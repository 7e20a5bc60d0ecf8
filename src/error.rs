use thiserror::Error;

use crate::measurement::MeasurementKind;

/// Top-level error type for the snapgeo crate.
#[derive(Debug, Error)]
pub enum SnapgeoError {
    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Snap(#[from] SnapError),

    #[error(transparent)]
    Measurement(#[from] MeasurementError),
}

/// Errors raised by the scene-query collaborator.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Errors related to snapping setup.
#[derive(Debug, Error)]
pub enum SnapError {
    #[error("invalid snap configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors related to assembling measurements.
#[derive(Debug, Error)]
pub enum MeasurementError {
    #[error("{kind} measurement needs {required} points, got {got}")]
    InsufficientPoints {
        kind: MeasurementKind,
        required: usize,
        got: usize,
    },
}

/// Convenience type alias for results using [`SnapgeoError`].
pub type Result<T> = std::result::Result<T, SnapgeoError>;
