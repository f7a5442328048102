//! Geometry-layer error type.

use thiserror::Error;

use rpc_core::{CoreError, SubDetector};

/// Errors produced by `rpc-geometry`.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("{sub_detector} roll needs {expected} shape parameters, got {got}")]
    MissingParameters {
        sub_detector: SubDetector,
        expected:     usize,
        got:          usize,
    },

    #[error("invalid detector id: {0}")]
    Id(#[from] CoreError),

    #[error("geometry parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GeometryResult<T> = Result<T, GeometryError>;
