//! Interaction policy.
//!
//! Maps discrete host events (star activated, maximum changed) onto a new
//! rating state. One click rule, applied everywhere:
//!
//! - Activating star `k` while the rating is exactly `k` demotes the clicked
//!   star to a half star (`rating = k - 0.5`).
//! - Any other activation of star `k` sets the rating to exactly `k`,
//!   discarding a previous half star.
//!
//! Re-activating the same position therefore toggles between `k` and
//! `k - 0.5`, which is how a half star is authored with a pointer.

use crate::error::{RatingError, RatingResult};
use crate::rating::{Rating, RatingState, MAX_RATING_CEILING};

/// Applies a star activation at 1-based `star_index`.
///
/// Pure: returns the new state, the input is untouched. The result is
/// always on the half-star grid and within `[0, max_rating]`.
///
/// # Errors
///
/// Returns [`RatingError::StarIndexOutOfRange`] when `star_index` is zero or
/// greater than `state.max_rating`; no state change is proposed.
pub fn activate_star(state: RatingState, star_index: u32) -> RatingResult<RatingState> {
    if star_index == 0 || star_index > state.max_rating {
        return Err(RatingError::StarIndexOutOfRange {
            index: star_index,
            max_rating: state.max_rating,
        });
    }

    let clicked = Rating::from_stars(star_index);
    let rating = if state.rating == clicked {
        // Toggle: demote the clicked full star to a half star.
        Rating::from_half_steps(clicked.half_steps() - 1)
    } else {
        clicked
    };

    Ok(RatingState {
        rating,
        max_rating: state.max_rating,
    })
}

/// Applies a change of the whole-star ceiling.
///
/// The rating is never rescaled; it is clamped to `min(rating, new_max)` so
/// the icon generator's precondition holds the moment the ceiling shrinks.
/// Clamping against a whole-star cap preserves the half-star grid.
///
/// # Errors
///
/// Returns [`RatingError::MaxRatingAboveCeiling`] when `new_max` exceeds
/// [`MAX_RATING_CEILING`]; no state change is proposed.
pub fn set_max_rating(state: RatingState, new_max: u32) -> RatingResult<RatingState> {
    if new_max > MAX_RATING_CEILING {
        return Err(RatingError::MaxRatingAboveCeiling {
            requested: new_max,
            ceiling: MAX_RATING_CEILING,
        });
    }

    Ok(RatingState::clamped(state.rating, new_max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(half_steps: u32, max_rating: u32) -> RatingState {
        RatingState {
            rating: Rating::from_half_steps(half_steps),
            max_rating,
        }
    }

    #[test]
    fn test_activation_promotes_to_clicked_star() {
        let next = activate_star(state(0, 5), 4).unwrap();
        assert_eq!(next.rating, Rating::from_stars(4));

        // A previous half star below the click is discarded.
        let next = activate_star(state(3, 5), 4).unwrap();
        assert_eq!(next.rating, Rating::from_stars(4));
    }

    #[test]
    fn test_reactivation_toggles_half_star() {
        // rating=3, click 3 -> 2.5; click 3 again -> 3.
        let demoted = activate_star(state(6, 5), 3).unwrap();
        assert_eq!(demoted.rating, Rating::from_half_steps(5));

        let restored = activate_star(demoted, 3).unwrap();
        assert_eq!(restored.rating, Rating::from_stars(3));
    }

    #[test]
    fn test_first_star_toggles_to_half() {
        let next = activate_star(state(2, 5), 1).unwrap();
        assert_eq!(next.rating, Rating::from_half_steps(1));
    }

    #[test]
    fn test_activation_result_stays_on_grid_and_in_range() {
        for max in 1..=10u32 {
            for half_steps in 0..=max * 2 {
                for index in 1..=max {
                    let next = activate_star(state(half_steps, max), index).unwrap();
                    assert!(next.is_valid());
                    assert_eq!(next.max_rating, max);
                }
            }
        }
    }

    #[test]
    fn test_activation_rejects_out_of_range_index() {
        let snapshot = state(6, 5);
        assert_eq!(
            activate_star(snapshot, 0),
            Err(RatingError::StarIndexOutOfRange {
                index: 0,
                max_rating: 5
            })
        );
        assert_eq!(
            activate_star(snapshot, 6),
            Err(RatingError::StarIndexOutOfRange {
                index: 6,
                max_rating: 5
            })
        );
    }

    #[test]
    fn test_max_shrink_clamps_rating() {
        // rating=4, max 5 -> 3 clamps the rating to 3.
        let next = set_max_rating(state(8, 5), 3).unwrap();
        assert_eq!(next.max_rating, 3);
        assert_eq!(next.rating, Rating::from_stars(3));
    }

    #[test]
    fn test_max_shrink_preserves_half_star_below_cap() {
        let next = set_max_rating(state(5, 5), 3).unwrap();
        assert_eq!(next.rating, Rating::from_half_steps(5));
    }

    #[test]
    fn test_max_growth_keeps_rating() {
        let next = set_max_rating(state(7, 5), 10).unwrap();
        assert_eq!(next.rating, Rating::from_half_steps(7));
        assert_eq!(next.max_rating, 10);
    }

    #[test]
    fn test_max_zero_empties_the_row() {
        let next = set_max_rating(state(8, 5), 0).unwrap();
        assert_eq!(next.rating, Rating::ZERO);
        assert_eq!(next.max_rating, 0);
    }

    #[test]
    fn test_max_above_ceiling_rejected() {
        assert_eq!(
            set_max_rating(state(0, 5), 26),
            Err(RatingError::MaxRatingAboveCeiling {
                requested: 26,
                ceiling: MAX_RATING_CEILING
            })
        );
    }
}
