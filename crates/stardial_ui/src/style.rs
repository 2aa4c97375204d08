//! Star row styling.
//!
//! Colors and spacing only. Which glyph gets drawn is the
//! [`crate::render::GlyphTable`]'s business; how big it is comes from the
//! host's display options.

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    /// Lit star gold.
    pub const STAR_GOLD: Self = Self::rgba(1.0, 0.75, 0.15, 1.0);
    /// Unlit star gray.
    pub const STAR_DIM: Self = Self::rgba(0.45, 0.45, 0.5, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Converts to array format.
    #[must_use]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Style for a star row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarStyle {
    /// Tint for lit stars (full and the lit half).
    pub lit: Color,
    /// Tint for unlit stars.
    pub unlit: Color,
    /// Tint for the hovered star, regardless of its state.
    pub hover: Color,
    /// Gap between adjacent star cells, in pixels.
    pub gap: f32,
}

impl Default for StarStyle {
    fn default() -> Self {
        Self {
            lit: Color::STAR_GOLD,
            unlit: Color::STAR_DIM,
            hover: Color::STAR_GOLD.with_alpha(0.7),
            gap: 4.0,
        }
    }
}
