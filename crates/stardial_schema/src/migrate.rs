//! Schema migration.
//!
//! The persisted document gained fields over three generations:
//!
//! | version | fields                                         |
//! |---------|------------------------------------------------|
//! | V1      | `rating`, `maxRating`                          |
//! | V2      | V1 + `iconSize`                                |
//! | V3      | V2 + `justification` (current)                 |
//!
//! [`migrate`] is the single place where a document's generation is
//! detected and its missing fields defaulted. Nothing else in the workspace
//! checks field presence.

use tracing::info;

use crate::attributes::{BlockAttributes, Justification, RawAttributes};
use crate::error::SchemaResult;
use crate::length::IconSize;

/// A persisted document generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaVersion {
    /// Rating and maximum only.
    V1,
    /// Adds the icon size control.
    V2,
    /// Adds the justification control.
    V3,
}

impl SchemaVersion {
    /// The generation current editors write.
    pub const CURRENT: Self = Self::V3;
}

/// Detects which generation wrote a raw document.
///
/// Detection is structural: generations only ever added fields, so the
/// newest absent field dates the document.
#[must_use]
pub fn detect_version(raw: &RawAttributes) -> SchemaVersion {
    if raw.justification.is_some() {
        SchemaVersion::V3
    } else if raw.icon_size.is_some() {
        SchemaVersion::V2
    } else {
        SchemaVersion::V1
    }
}

/// Migrates a raw document to validated current-generation attributes.
///
/// Missing fields get their explicit defaults: 32px icons, no
/// justification. Present fields are parsed and validated; a document that
/// fails validation is rejected whole.
///
/// # Errors
///
/// Propagates icon-size, justification, and rating validation errors; the
/// caller must not apply any part of a rejected document.
pub fn migrate(raw: &RawAttributes) -> SchemaResult<BlockAttributes> {
    let version = detect_version(raw);
    if version != SchemaVersion::CURRENT {
        info!(?version, "migrating legacy attribute document");
    }

    let icon_size = match &raw.icon_size {
        Some(size) => size.parse()?,
        None => IconSize::DEFAULT,
    };
    let justification = match &raw.justification {
        Some(keyword) => keyword.parse()?,
        None => Justification::None,
    };

    BlockAttributes::from_parts(raw.rating, raw.max_rating, icon_size, justification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::RawIconSize;
    use crate::error::SchemaError;
    use crate::length::LengthUnit;
    use stardial_core::Rating;

    #[test]
    fn test_detects_generations() {
        let v1: RawAttributes = serde_json::from_str(r#"{"rating": 3, "maxRating": 5}"#).unwrap();
        assert_eq!(detect_version(&v1), SchemaVersion::V1);

        let v2: RawAttributes =
            serde_json::from_str(r#"{"rating": 3, "maxRating": 5, "iconSize": "24px"}"#).unwrap();
        assert_eq!(detect_version(&v2), SchemaVersion::V2);

        let v3: RawAttributes = serde_json::from_str(
            r#"{"rating": 3, "maxRating": 5, "iconSize": "24px", "justification": "center"}"#,
        )
        .unwrap();
        assert_eq!(detect_version(&v3), SchemaVersion::V3);
    }

    #[test]
    fn test_v1_document_gets_defaults() {
        let raw: RawAttributes =
            serde_json::from_str(r#"{"rating": 2.5, "maxRating": 5}"#).unwrap();
        let attrs = migrate(&raw).unwrap();

        assert_eq!(attrs.state.rating, Rating::from_half_steps(5));
        assert_eq!(attrs.state.max_rating, 5);
        assert_eq!(attrs.icon_size, IconSize::DEFAULT);
        assert_eq!(attrs.justification, Justification::None);
    }

    #[test]
    fn test_empty_document_gets_all_defaults() {
        let raw: RawAttributes = serde_json::from_str("{}").unwrap();
        let attrs = migrate(&raw).unwrap();

        assert_eq!(attrs.state.rating, Rating::ZERO);
        assert_eq!(attrs.state.max_rating, 5);
    }

    #[test]
    fn test_legacy_numeric_icon_size() {
        let raw: RawAttributes =
            serde_json::from_str(r#"{"rating": 1, "maxRating": 5, "iconSize": 48}"#).unwrap();
        let attrs = migrate(&raw).unwrap();

        assert_eq!(attrs.icon_size.value, 48.0);
        assert_eq!(attrs.icon_size.unit, LengthUnit::Px);
    }

    #[test]
    fn test_current_document_parses_fully() {
        let raw: RawAttributes = serde_json::from_str(
            r#"{"rating": 4.5, "maxRating": 5, "iconSize": "2em", "justification": "right"}"#,
        )
        .unwrap();
        let attrs = migrate(&raw).unwrap();

        assert_eq!(attrs.state.rating, Rating::from_half_steps(9));
        assert_eq!(attrs.icon_size.unit, LengthUnit::Em);
        assert_eq!(attrs.justification, Justification::Right);
    }

    #[test]
    fn test_rejected_document_is_rejected_whole() {
        let raw: RawAttributes = serde_json::from_str(
            r#"{"rating": 3, "maxRating": 5, "iconSize": "24px", "justification": "diagonal"}"#,
        )
        .unwrap();
        assert_eq!(
            migrate(&raw),
            Err(SchemaError::UnknownJustification("diagonal".to_owned()))
        );
    }

    #[test]
    fn test_round_trip_is_current_generation() {
        let raw: RawAttributes =
            serde_json::from_str(r#"{"rating": 2, "maxRating": 4}"#).unwrap();
        let migrated = migrate(&raw).unwrap().to_raw();

        assert_eq!(detect_version(&migrated), SchemaVersion::V2);
        assert_eq!(migrated.icon_size, Some(RawIconSize::Text("32px".to_owned())));
    }
}
