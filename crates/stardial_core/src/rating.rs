//! Fixed-point rating state.
//!
//! Ratings sit on a half-star grid, so the canonical representation is an
//! integer count of half-steps: `Rating(5)` is 2.5 stars. Floats appear only
//! at the conversion boundary and are validated onto the grid, never rounded.

use crate::error::{RatingError, RatingResult};

/// Product ceiling for the maximum rating.
///
/// A policy limit, not an engine limit: the math works for any `u32`, but no
/// instance is allowed to configure more than this many stars.
pub const MAX_RATING_CEILING: u32 = 25;

/// A rating on the half-star grid, stored as half-steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u32);

impl Rating {
    /// Zero stars.
    pub const ZERO: Self = Self(0);

    /// Creates a rating from a raw half-step count.
    ///
    /// `half_steps = 5` is 2.5 stars.
    #[must_use]
    pub const fn from_half_steps(half_steps: u32) -> Self {
        Self(half_steps)
    }

    /// Creates a rating from a whole number of stars.
    #[must_use]
    pub const fn from_stars(stars: u32) -> Self {
        Self(stars * 2)
    }

    /// Returns the raw half-step count.
    #[must_use]
    pub const fn half_steps(self) -> u32 {
        self.0
    }

    /// Returns the number of full stars (the floor of the star value).
    #[must_use]
    pub const fn full_stars(self) -> u32 {
        self.0 / 2
    }

    /// Returns true if the rating ends in a half star.
    #[must_use]
    pub const fn has_half_star(self) -> bool {
        self.0 % 2 == 1
    }

    /// Returns the smaller of two ratings.
    #[must_use]
    pub const fn min(self, other: Self) -> Self {
        if self.0 <= other.0 {
            self
        } else {
            other
        }
    }

    /// Converts a float star value onto the grid.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::NotFinite`] for NaN, infinities, and negative
    /// values, and [`RatingError::OffGrid`] for values that are not an exact
    /// multiple of 0.5.
    pub fn try_from_f64(value: f64) -> RatingResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RatingError::NotFinite(value));
        }
        let half_steps = value * 2.0;
        if half_steps.fract() != 0.0 || half_steps > f64::from(u32::MAX) {
            return Err(RatingError::OffGrid(value));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let half_steps = half_steps as u32;
        Ok(Self(half_steps))
    }

    /// Returns the star value as a float, for display and serialization.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }
}

/// The rendered state of a single star position.
///
/// A closed enumeration: the engine never references concrete glyphs or
/// assets, the host maps these to whatever it draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconState {
    /// A fully lit star.
    Full,
    /// A half-lit star.
    Half,
    /// An unlit star.
    Empty,
}

/// Snapshot of the rating attributes the host currently holds.
///
/// Passed by value into every engine call and returned by value after
/// mutation. The engine never retains one of these between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatingState {
    /// Current rating, on the half-star grid.
    pub rating: Rating,
    /// Whole-star ceiling for this instance.
    pub max_rating: u32,
}

impl RatingState {
    /// Creates a validated state.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::MaxRatingAboveCeiling`] if `max_rating` is
    /// above [`MAX_RATING_CEILING`], and [`RatingError::AboveMax`] if the
    /// rating exceeds `max_rating`.
    pub fn new(rating: Rating, max_rating: u32) -> RatingResult<Self> {
        if max_rating > MAX_RATING_CEILING {
            return Err(RatingError::MaxRatingAboveCeiling {
                requested: max_rating,
                ceiling: MAX_RATING_CEILING,
            });
        }
        if rating > Rating::from_stars(max_rating) {
            return Err(RatingError::AboveMax {
                rating: rating.as_f64(),
                max_rating,
            });
        }
        Ok(Self { rating, max_rating })
    }

    /// Creates a state, clamping the rating into `[0, max_rating]`.
    ///
    /// `min` against a whole-star cap preserves the half-star grid, so no
    /// rounding is involved.
    #[must_use]
    pub const fn clamped(rating: Rating, max_rating: u32) -> Self {
        Self {
            rating: rating.min(Rating::from_stars(max_rating)),
            max_rating,
        }
    }

    /// Returns true if the rating is within `[0, max_rating]`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rating <= Rating::from_stars(self.max_rating)
    }
}
