use serde_json::Value;

use super::document::expect_object;
use crate::error::{Document, MapError, Result};
use crate::model::{BaseItem, Modifier, ModifierTable};

/// Parse the base item table, keeping document order
pub fn parse_base_items(root: &Value) -> Result<Vec<BaseItem>> {
    let root = expect_object(root, Document::BaseItems, "<root>")?;
    let mut items = Vec::with_capacity(root.len());

    for (key, entry) in root {
        expect_object(entry, Document::BaseItems, key)?;
        let mut item: BaseItem = serde_json::from_value(entry.clone())
            .map_err(|e| MapError::malformed(Document::BaseItems, key, e.to_string()))?;
        item.key = key.clone();
        items.push(item);
    }

    Ok(items)
}

/// Parse the modifier table
pub fn parse_modifiers(root: &Value) -> Result<ModifierTable> {
    let root = expect_object(root, Document::Modifiers, "<root>")?;
    let mut table = ModifierTable::new();

    for (id, entry) in root {
        expect_object(entry, Document::Modifiers, id)?;
        let modifier: Modifier = serde_json::from_value(entry.clone())
            .map_err(|e| MapError::malformed(Document::Modifiers, id, e.to_string()))?;
        table.insert(id.clone(), modifier);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReleaseState;
    use serde_json::json;

    #[test]
    fn test_parse_base_items_keeps_order_and_keys() {
        let items = parse_base_items(&json!({
            "Metadata/Items/Jewels/JewelAbyssRanged": {
                "domain": "abyss_jewel",
                "item_class": "AbyssJewel",
                "name": "Searching Eye Jewel",
                "tags": ["abyss_jewel", "default"],
                "release_state": "released"
            },
            "Metadata/Items/Jewels/JewelAbyssMelee": {
                "domain": "abyss_jewel",
                "item_class": "AbyssJewel",
                "name": "Murderous Eye Jewel",
                "tags": ["abyss_jewel", "default"],
                "release_state": "unreleased"
            }
        }))
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].key, "Metadata/Items/Jewels/JewelAbyssRanged");
        assert_eq!(items[0].display_name, "Searching Eye Jewel");
        assert_eq!(items[1].release_state, ReleaseState::Unreleased);
    }

    #[test]
    fn test_parse_base_items_rejects_wrong_field_type() {
        let err = parse_base_items(&json!({"Bad": {"tags": "abyss_jewel"}})).unwrap_err();
        assert!(matches!(
            err,
            MapError::Malformed { document: Document::BaseItems, ref key, .. } if key == "Bad"
        ));
    }

    #[test]
    fn test_parse_modifiers_defaults_stats() {
        let table = parse_modifiers(&json!({
            "AbyssJewelAddedLife1": {"text": "+(21-25) to maximum Life", "stats": [{"min": 21, "max": 25}]},
            "NoStats": {"text": "Cannot be Frozen"},
            "NullStats": {"stats": null}
        }))
        .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get("NoStats").unwrap().stats, json!(0));
        assert_eq!(table.get("NullStats").unwrap().stats, Value::Null);
        assert_eq!(table.get("NullStats").unwrap().text, None);
        assert!(table.get("Missing").is_none());
    }

    #[test]
    fn test_parse_modifiers_requires_object_root() {
        let err = parse_modifiers(&json!([])).unwrap_err();
        assert!(matches!(err, MapError::Malformed { document: Document::Modifiers, .. }));
    }
}
