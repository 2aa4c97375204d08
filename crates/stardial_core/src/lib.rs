//! # STARDIAL Core
//!
//! The rating display engine: pure functions mapping a rating snapshot to a
//! deterministic sequence of icon states, plus the policy that turns a star
//! activation back into a new rating.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   RATING PIPELINE                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  RatingState ──> icon_sequence ──> [Full|Half|Empty]     │
//! │       ▲                                                  │
//! │       └── activate_star / set_max_rating <── host events │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Philosophy
//!
//! The engine owns NOTHING. Every call takes the host's current snapshot by
//! value and returns a new value; there are no fields, no caches, no
//! singletons. Same inputs, same outputs, every time.
//!
//! Ratings live on a half-star grid, so they are stored as an integer count
//! of half-steps. A float that is not exactly on the grid is rejected at the
//! conversion boundary, never rounded silently.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod error;
pub mod interact;
pub mod rating;
pub mod sequence;

pub use error::{RatingError, RatingResult};
pub use interact::{activate_star, set_max_rating};
pub use rating::{IconState, Rating, RatingState, MAX_RATING_CEILING};
pub use sequence::icon_sequence;
