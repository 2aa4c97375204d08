//! Icon size lengths.
//!
//! The editor persists icon sizes as CSS-flavored strings ("32px", "2em")
//! or, in the oldest documents, bare numbers meaning pixels. This module
//! parses and validates them; conversion to concrete pixels happens against
//! an explicit [`SizeMetrics`] so the math stays deterministic.

use std::fmt;
use std::str::FromStr;

use crate::error::{SchemaError, SchemaResult};

/// The units an icon size may be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Device-independent pixels.
    Px,
    /// Relative to the element's font size.
    Em,
    /// Relative to the root font size.
    Rem,
    /// Percent of viewport width.
    Vw,
    /// Percent of viewport height.
    Vh,
}

impl LengthUnit {
    /// All units, longest suffix first so `rem` is not read as `em`.
    const ALL: [Self; 5] = [Self::Rem, Self::Em, Self::Px, Self::Vw, Self::Vh];

    /// Returns the unit's CSS suffix.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Vw => "vw",
            Self::Vh => "vh",
        }
    }

    /// Returns the largest value the settings surface accepts for this unit.
    #[must_use]
    pub const fn max_value(self) -> f64 {
        match self {
            Self::Px => 240.0,
            Self::Em | Self::Rem | Self::Vw | Self::Vh => 15.0,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Context for resolving relative lengths to pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMetrics {
    /// Root font size in pixels.
    pub root_font_px: f32,
    /// Viewport width in pixels.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
}

impl Default for SizeMetrics {
    fn default() -> Self {
        Self {
            root_font_px: 16.0,
            viewport_width: 1920.0,
            viewport_height: 1080.0,
        }
    }
}

/// A validated icon size: a positive finite value with a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSize {
    /// The numeric value.
    pub value: f64,
    /// The unit of the value.
    pub unit: LengthUnit,
}

impl IconSize {
    /// The default icon size when a document carries none.
    pub const DEFAULT: Self = Self {
        value: 32.0,
        unit: LengthUnit::Px,
    };

    /// Creates a validated icon size.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::NonPositiveIconSize`] for zero, negative, or
    /// non-finite values, and [`SchemaError::IconSizeAboveMax`] for values
    /// above the unit's maximum.
    pub fn new(value: f64, unit: LengthUnit) -> SchemaResult<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SchemaError::NonPositiveIconSize(value));
        }
        if value > unit.max_value() {
            return Err(SchemaError::IconSizeAboveMax {
                value,
                max: unit.max_value(),
                unit,
            });
        }
        Ok(Self { value, unit })
    }

    /// Resolves the size to concrete pixels against the given metrics.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_pixels(self, metrics: SizeMetrics) -> f32 {
        let value = self.value as f32;
        match self.unit {
            LengthUnit::Px => value,
            LengthUnit::Em | LengthUnit::Rem => value * metrics.root_font_px,
            LengthUnit::Vw => value / 100.0 * metrics.viewport_width,
            LengthUnit::Vh => value / 100.0 * metrics.viewport_height,
        }
    }

    /// Returns the persisted CSS representation, e.g. `32px`.
    #[must_use]
    pub fn css_value(self) -> String {
        format!("{}{}", self.value, self.unit)
    }
}

impl Default for IconSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for IconSize {
    type Err = SchemaError;

    fn from_str(s: &str) -> SchemaResult<Self> {
        let trimmed = s.trim();

        for unit in LengthUnit::ALL {
            if let Some(number) = trimmed.strip_suffix(unit.suffix()) {
                let value: f64 = number
                    .trim_end()
                    .parse()
                    .map_err(|_| SchemaError::UnparseableIconSize(s.to_owned()))?;
                return Self::new(value, unit);
            }
        }

        // Bare numbers are legacy documents; they always mean pixels.
        let value: f64 = trimmed
            .parse()
            .map_err(|_| SchemaError::UnparseableIconSize(s.to_owned()))?;
        Self::new(value, LengthUnit::Px)
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}
