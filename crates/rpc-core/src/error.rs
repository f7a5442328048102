//! Core error type.
//!
//! `rpc-geometry` wraps `CoreError` as one variant of its own error enum via a
//! `From` impl, so `?` works across the crate boundary.

use thiserror::Error;

/// Errors produced while constructing or decoding identifiers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("{field} = {value} is out of range")]
    InvalidField { field: &'static str, value: i32 },

    #[error("raw id {0:#010x} is not an RPC detector id")]
    InvalidRawId(u32),
}

/// Shorthand result type for `rpc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
