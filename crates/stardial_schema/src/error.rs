//! # Schema Error Types
//!
//! All errors that can occur while validating a persisted attribute
//! document.

use stardial_core::RatingError;
use thiserror::Error;

/// Errors that can occur at the attribute-store boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// An icon size string that could not be parsed.
    #[error("unparseable icon size '{0}'")]
    UnparseableIconSize(String),

    /// An icon size that is zero, negative, NaN, or infinite.
    #[error("icon size must be a finite positive number, got {0}")]
    NonPositiveIconSize(f64),

    /// An icon size above the per-unit maximum.
    #[error("icon size {value}{unit} exceeds maximum {max}{unit}")]
    IconSizeAboveMax {
        /// The offending value.
        value: f64,
        /// The maximum for this unit.
        max: f64,
        /// The unit in question.
        unit: crate::length::LengthUnit,
    },

    /// A justification keyword the schema does not know.
    #[error("unknown justification '{0}'")]
    UnknownJustification(String),

    /// A rating-level validation failure.
    #[error(transparent)]
    Rating(#[from] RatingError),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
