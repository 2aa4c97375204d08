//! # Rating Error Types
//!
//! All errors that can occur in the rating engine.

use thiserror::Error;

/// Errors that can occur in the rating engine.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RatingError {
    /// A star index outside the live range was activated.
    #[error("star index {index} out of range 1..={max_rating}")]
    StarIndexOutOfRange {
        /// The 1-based index that was activated.
        index: u32,
        /// The maximum rating at the time of activation.
        max_rating: u32,
    },

    /// A maximum rating above the product ceiling was requested.
    #[error("maximum rating {requested} exceeds ceiling {ceiling}")]
    MaxRatingAboveCeiling {
        /// The requested maximum.
        requested: u32,
        /// The configured ceiling.
        ceiling: u32,
    },

    /// A rating value that is not on the half-star grid.
    #[error("rating {0} is not a multiple of 0.5")]
    OffGrid(f64),

    /// A rating value that is negative, NaN, or infinite.
    #[error("rating {0} is not a finite non-negative number")]
    NotFinite(f64),

    /// A rating that exceeds the maximum it is paired with.
    #[error("rating {rating} exceeds maximum rating {max_rating}")]
    AboveMax {
        /// The offending rating, in stars.
        rating: f64,
        /// The maximum it was paired with.
        max_rating: u32,
    },
}

/// Result type for rating operations.
pub type RatingResult<T> = Result<T, RatingError>;
