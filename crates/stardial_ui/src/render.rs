//! Render commands and the glyph lookup table.
//!
//! The engine's icon states are a closed enumeration; the mapping to
//! concrete glyphs lives here, on the host's side of the boundary. The core
//! crates never name an asset.

use stardial_core::IconState;

use crate::layout::Rect;
use crate::style::Color;

/// Identifier of a glyph in the host's atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphId(pub u32);

impl GlyphId {
    /// Creates a new glyph ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Lookup table from icon state to the host's glyph for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable {
    /// Glyph for a fully lit star.
    pub full: GlyphId,
    /// Glyph for a half-lit star.
    pub half: GlyphId,
    /// Glyph for an unlit star.
    pub empty: GlyphId,
}

impl GlyphTable {
    /// Creates a table from the host's three glyph IDs.
    #[must_use]
    pub const fn new(full: GlyphId, half: GlyphId, empty: GlyphId) -> Self {
        Self { full, half, empty }
    }

    /// Returns the glyph for an icon state.
    #[must_use]
    pub const fn glyph_for(&self, state: IconState) -> GlyphId {
        match state {
            IconState::Full => self.full,
            IconState::Half => self.half,
            IconState::Empty => self.empty,
        }
    }
}

/// A render command for the star row.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// A star glyph.
    Glyph {
        /// Bounds.
        bounds: Rect,
        /// Glyph to draw.
        glyph: GlyphId,
        /// Tint color.
        color: Color,
    },
}
