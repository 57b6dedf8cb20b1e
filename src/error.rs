use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The three input documents the map is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    BaseItems,
    Modifiers,
    ModGroups,
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::BaseItems => write!(f, "base item table"),
            Document::Modifiers => write!(f, "modifier table"),
            Document::ModGroups => write!(f, "mod group table"),
        }
    }
}

#[derive(Error, Debug)]
pub enum MapError {
    #[error("failed to read {document} from {path:?}: {source}")]
    Io {
        document: Document,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {document} from {path:?}: {source}")]
    Parse {
        document: Document,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed entry {key:?} in {document}: {reason}")]
    Malformed {
        document: Document,
        key: String,
        reason: String,
    },

    /// A group names a modifier id the modifier table does not have. Tiers for
    /// the rest of the group would be off by one, so this is never skipped.
    #[error(
        "modifier {id:?} in group {group:?} ({item_class} / {tag_combo:?}) is missing from the modifier table"
    )]
    MissingModifier {
        id: String,
        group: String,
        item_class: String,
        tag_combo: String,
    },
}

impl MapError {
    pub fn malformed(document: Document, key: impl Into<String>, reason: impl Into<String>) -> Self {
        MapError::Malformed {
            document,
            key: key.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_modifier_names_the_id() {
        let err = MapError::MissingModifier {
            id: "AbyssJewelAddedLife9".to_string(),
            group: "prefix/AddedLife".to_string(),
            item_class: "Abyss Jewels".to_string(),
            tag_combo: "abyss_jewel,default".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("\"AbyssJewelAddedLife9\""));
        assert!(msg.contains("prefix/AddedLife"));
        assert!(msg.contains("Abyss Jewels"));
    }

    #[test]
    fn test_malformed_names_the_document() {
        let err = MapError::malformed(Document::ModGroups, "Abyss Jewels", "expected an object");
        assert_eq!(
            err.to_string(),
            "malformed entry \"Abyss Jewels\" in mod group table: expected an object"
        );
    }
}
