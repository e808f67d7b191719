//! # Error Types
//!
//! This module defines error types used throughout the billcanvas library.
//!
//! Most editor and resolution operations are total and never return an
//! error. The variants below cover the few places where a caller-visible
//! failure is appropriate: bulk label runs without a base code and the
//! JSON/IO hand-off to the surrounding application.

use thiserror::Error;

/// Main error type for billcanvas operations
#[derive(Debug, Error)]
pub enum BillcanvasError {
    /// A label run was requested without a base code
    #[error("Missing base code: a label run needs a non-empty code")]
    MissingBaseCode,

    /// Input that cannot be turned into a print job
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// JSON (de)serialization error for documents and data contexts
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
