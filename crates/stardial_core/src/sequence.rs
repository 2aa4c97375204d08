//! Icon sequence generation.
//!
//! The render side of the engine: a rating snapshot in, an ordered list of
//! icon states out. Deterministic, allocation-exact, no hidden state.

use crate::rating::{IconState, RatingState};

/// Computes the icon state for every star position `1..=max_rating`.
///
/// Position `i` (1-based) is:
/// - [`IconState::Full`] if `i <= floor(rating)`,
/// - [`IconState::Half`] if `i == floor(rating) + 1` and the rating ends in
///   a half star,
/// - [`IconState::Empty`] otherwise.
///
/// A `max_rating` of zero yields an empty sequence.
///
/// # Contract
///
/// `state.rating <= state.max_rating` is the caller's responsibility; the
/// mutation entry points ([`crate::activate_star`],
/// [`crate::set_max_rating`]) never produce a violating state. The generator
/// does not clamp: debug builds assert the invariant, release builds emit
/// the saturated sequence (every position `Full` once the full-star count
/// passes `max_rating`). Uniform policy, no soft error channel.
#[must_use]
pub fn icon_sequence(state: RatingState) -> Vec<IconState> {
    debug_assert!(state.is_valid(), "rating exceeds max_rating: {state:?}");

    let full = state.rating.full_stars();
    let half_at = if state.rating.has_half_star() {
        Some(full + 1)
    } else {
        None
    };

    (1..=state.max_rating)
        .map(|position| {
            if position <= full {
                IconState::Full
            } else if Some(position) == half_at {
                IconState::Half
            } else {
                IconState::Empty
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rating::Rating;
    use IconState::{Empty, Full, Half};

    fn state(half_steps: u32, max_rating: u32) -> RatingState {
        RatingState {
            rating: Rating::from_half_steps(half_steps),
            max_rating,
        }
    }

    #[test]
    fn test_all_empty_at_zero() {
        assert_eq!(
            icon_sequence(state(0, 5)),
            vec![Empty, Empty, Empty, Empty, Empty]
        );
    }

    #[test]
    fn test_all_full_at_max() {
        assert_eq!(
            icon_sequence(state(10, 5)),
            vec![Full, Full, Full, Full, Full]
        );
    }

    #[test]
    fn test_half_star_in_the_middle() {
        assert_eq!(
            icon_sequence(state(5, 5)),
            vec![Full, Full, Half, Empty, Empty]
        );
    }

    #[test]
    fn test_half_star_at_the_top() {
        assert_eq!(
            icon_sequence(state(9, 5)),
            vec![Full, Full, Full, Full, Half]
        );
    }

    #[test]
    fn test_zero_max_is_empty_sequence() {
        assert_eq!(icon_sequence(state(0, 0)), vec![]);
        assert_eq!(icon_sequence(state(1, 1)), vec![Half]);
    }

    #[test]
    fn test_counts_match_rating() {
        // Full count is floor(rating), half count is 0 or 1, rest empty.
        for max in 0..=25u32 {
            for half_steps in 0..=max * 2 {
                let icons = icon_sequence(state(half_steps, max));
                assert_eq!(icons.len(), max as usize);

                let full = icons.iter().filter(|i| **i == Full).count();
                let half = icons.iter().filter(|i| **i == Half).count();
                assert_eq!(full, (half_steps / 2) as usize);
                assert_eq!(half, (half_steps % 2) as usize);
            }
        }
    }

    #[test]
    fn test_pure_and_idempotent() {
        let snapshot = state(7, 10);
        let first = icon_sequence(snapshot);
        let second = icon_sequence(snapshot);
        assert_eq!(first, second);
    }
}
