//! # STARDIAL
//!
//! A star rating display engine for embedding hosts: pure rating math, an
//! attribute-store boundary with schema migration, and a pointer-driven
//! widget layer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         STARDIAL                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  ┌──────────────┐    ┌───────────────┐    ┌─────────────┐   │
//! │  │   schema     │    │     core      │    │     ui      │   │
//! │  │              │───>│               │<───│             │   │
//! │  │ • documents  │    │ • fixed-point │    │ • hit test  │   │
//! │  │ • migration  │    │ • sequences   │    │ • layout    │   │
//! │  │ • units      │    │ • click rule  │    │ • glyphs    │   │
//! │  └──────────────┘    └───────────────┘    └─────────────┘   │
//! │                                                             │
//! │  Host store ── snapshot in, new state out ── Host renderer  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host owns all state. Every call here takes the host's current
//! snapshot and returns values for the host to persist and draw.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub use stardial_core::{
    activate_star, icon_sequence, set_max_rating, IconState, Rating, RatingError, RatingResult,
    RatingState, MAX_RATING_CEILING,
};
pub use stardial_schema::{
    detect_version, migrate, BlockAttributes, IconSize, Justification, LengthUnit, RawAttributes,
    SchemaError, SchemaResult, SchemaVersion, SizeMetrics,
};
pub use stardial_ui::{
    Color, DisplayOptions, GlyphId, GlyphTable, PointerButton, PointerState, Rect, RenderCommand,
    RowResponse, StarRowLayout, StarRowWidget, StarStyle,
};

/// Everything the host's rendering surface needs for one frame of one
/// rating instance.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderDescription {
    /// Icon state per star position, in order.
    pub icons: Vec<IconState>,
    /// Presentation options, passed through untouched.
    pub options: DisplayOptions,
}

/// Describes a rating snapshot for the host's renderer.
#[must_use]
pub fn describe(state: RatingState, options: DisplayOptions) -> RenderDescription {
    RenderDescription {
        icons: icon_sequence(state),
        options,
    }
}

/// Opens a persisted attribute document into engine inputs.
///
/// Runs the schema migration, then splits the result into the rating
/// snapshot and the display options, with the icon size resolved against
/// `metrics`.
///
/// # Errors
///
/// Propagates validation errors from the schema; a rejected document must
/// not be applied in any part.
pub fn open_document(
    raw: &RawAttributes,
    metrics: SizeMetrics,
) -> SchemaResult<(RatingState, DisplayOptions)> {
    let attributes = migrate(raw)?;
    let options = DisplayOptions::from_attributes(&attributes, metrics);
    Ok((attributes.state, options))
}
