//! # STARDIAL Schema
//!
//! The attribute-store boundary. Hosts persist rating attributes as a loose
//! document whose shape drifted across plugin generations: early revisions
//! carried only `rating` and `maxRating`, later ones added `iconSize`, the
//! current one added `justification`. This crate owns that mess so the
//! engine never has to:
//!
//! - [`RawAttributes`] is the document exactly as persisted, optionals and
//!   all.
//! - [`migrate`](migrate::migrate) is the ONLY place where missing fields
//!   are detected and defaulted.
//! - [`BlockAttributes`] is the validated form the rest of the system
//!   consumes.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on rendering or widget crates. If you need
//! presentation types, put them in `stardial_ui`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod attributes;
pub mod error;
pub mod length;
pub mod migrate;

pub use attributes::{BlockAttributes, Justification, RawAttributes, RawIconSize};
pub use error::{SchemaError, SchemaResult};
pub use length::{IconSize, LengthUnit, SizeMetrics};
pub use migrate::{detect_version, migrate, SchemaVersion};
