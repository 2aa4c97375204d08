//! Persisted and validated attribute shapes.
//!
//! [`RawAttributes`] mirrors the document hosts actually persist, optional
//! fields and all. [`BlockAttributes`] is the validated form; constructing
//! one goes through [`crate::migrate::migrate`], which is the only place
//! missing fields are detected and defaulted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stardial_core::{Rating, RatingState};

use crate::error::{SchemaError, SchemaResult};
use crate::length::IconSize;

/// Default maximum rating for documents that omit it.
const DEFAULT_MAX_RATING: u32 = 5;

fn default_max_rating() -> u32 {
    DEFAULT_MAX_RATING
}

/// An icon size exactly as persisted: a CSS string in current documents, a
/// bare number in legacy ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawIconSize {
    /// Legacy form, a number of pixels.
    Number(f64),
    /// Current form, a CSS length such as `32px` or `2em`.
    Text(String),
}

impl RawIconSize {
    /// Parses and validates the raw value.
    ///
    /// # Errors
    ///
    /// Propagates the parse or bounds error from [`IconSize`].
    pub fn parse(&self) -> SchemaResult<IconSize> {
        match self {
            Self::Number(value) => IconSize::new(*value, crate::length::LengthUnit::Px),
            Self::Text(text) => text.parse(),
        }
    }
}

/// Horizontal alignment of the star row. Presentation only; no coupling to
/// the rating math.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Justification {
    /// No explicit alignment; hosts treat this as left.
    #[default]
    None,
    /// Align the row to the left edge.
    Left,
    /// Center the row.
    Center,
    /// Align the row to the right edge.
    Right,
}

impl Justification {
    /// Returns the persisted keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Justification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Justification {
    type Err = SchemaError;

    fn from_str(s: &str) -> SchemaResult<Self> {
        match s {
            "none" => Ok(Self::None),
            "left" => Ok(Self::Left),
            "center" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            other => Err(SchemaError::UnknownJustification(other.to_owned())),
        }
    }
}

/// The attribute document exactly as persisted by the host.
///
/// Field names follow the persisted camelCase shape. `iconSize` and
/// `justification` are absent in older document generations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawAttributes {
    /// Star rating, a number on the half-star grid.
    #[serde(default)]
    pub rating: f64,
    /// Whole-star ceiling.
    #[serde(rename = "maxRating", default = "default_max_rating")]
    pub max_rating: u32,
    /// Icon size, absent before the size control existed.
    #[serde(rename = "iconSize", default, skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<RawIconSize>,
    /// Row alignment, absent before the justification control existed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl Default for RawAttributes {
    fn default() -> Self {
        Self {
            rating: 0.0,
            max_rating: DEFAULT_MAX_RATING,
            icon_size: None,
            justification: None,
        }
    }
}

/// The validated attribute set the rest of the system consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockAttributes {
    /// Validated rating state.
    pub state: RatingState,
    /// Validated icon size.
    pub icon_size: IconSize,
    /// Row alignment.
    pub justification: Justification,
}

impl BlockAttributes {
    /// Builds validated attributes from already-defaulted parts.
    ///
    /// A persisted rating above the maximum is rejected, not clamped: the
    /// mutation entry points keep live state consistent, so a violating
    /// document is corrupt, and corrupt documents are not half-applied.
    ///
    /// # Errors
    ///
    /// Propagates rating-grid and range errors from the core crate.
    pub fn from_parts(
        rating: f64,
        max_rating: u32,
        icon_size: IconSize,
        justification: Justification,
    ) -> SchemaResult<Self> {
        let rating = Rating::try_from_f64(rating)?;
        let state = RatingState::new(rating, max_rating)?;
        Ok(Self {
            state,
            icon_size,
            justification,
        })
    }

    /// Serializes back to the current persisted shape.
    ///
    /// `Justification::None` is persisted as an absent field, matching what
    /// current editors write.
    #[must_use]
    pub fn to_raw(&self) -> RawAttributes {
        RawAttributes {
            rating: self.state.rating.as_f64(),
            max_rating: self.state.max_rating,
            icon_size: Some(RawIconSize::Text(self.icon_size.css_value())),
            justification: match self.justification {
                Justification::None => None,
                other => Some(other.as_str().to_owned()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stardial_core::RatingError;

    #[test]
    fn test_justification_keywords() {
        assert_eq!("left".parse::<Justification>(), Ok(Justification::Left));
        assert_eq!("none".parse::<Justification>(), Ok(Justification::None));
        assert_eq!(
            "justify".parse::<Justification>(),
            Err(SchemaError::UnknownJustification("justify".to_owned()))
        );
    }

    #[test]
    fn test_from_parts_validates_rating() {
        let err = BlockAttributes::from_parts(3.2, 5, IconSize::DEFAULT, Justification::None);
        assert_eq!(err, Err(SchemaError::Rating(RatingError::OffGrid(3.2))));

        let err = BlockAttributes::from_parts(6.0, 5, IconSize::DEFAULT, Justification::None);
        assert_eq!(
            err,
            Err(SchemaError::Rating(RatingError::AboveMax {
                rating: 6.0,
                max_rating: 5
            }))
        );
    }

    #[test]
    fn test_to_raw_round_trip() {
        let attrs =
            BlockAttributes::from_parts(3.5, 5, IconSize::DEFAULT, Justification::Center).unwrap();
        let raw = attrs.to_raw();

        assert!((raw.rating - 3.5).abs() < f64::EPSILON);
        assert_eq!(raw.max_rating, 5);
        assert_eq!(raw.icon_size, Some(RawIconSize::Text("32px".to_owned())));
        assert_eq!(raw.justification, Some("center".to_owned()));
    }

    #[test]
    fn test_none_justification_is_absent_when_persisted() {
        let attrs =
            BlockAttributes::from_parts(1.0, 5, IconSize::DEFAULT, Justification::None).unwrap();
        assert_eq!(attrs.to_raw().justification, None);
    }
}
