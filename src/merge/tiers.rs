use crate::error::{MapError, Result};
use crate::genericize::genericize;
use crate::model::{BucketKey, ModGroup, ModifierTable, TieredMod};

/// Tier of each position in a group of `len` ids: `len` for the first id, down
/// to 1 for the last.
pub fn tier_sequence(len: usize) -> impl Iterator<Item = usize> {
    (1..=len).rev()
}

/// Resolve and number every id of `group`.
///
/// The first-listed modifier gets the highest numeric tier. An id missing from
/// `modifiers` fails the whole group.
pub fn tier_group(group: &ModGroup, modifiers: &ModifierTable, key: &BucketKey) -> Result<Vec<TieredMod>> {
    group
        .ids
        .iter()
        .zip(tier_sequence(group.ids.len()))
        .map(|(id, tier)| {
            let modifier = modifiers.get(id).ok_or_else(|| MapError::MissingModifier {
                id: id.clone(),
                group: group.name.clone(),
                item_class: key.item_class.clone(),
                tag_combo: key.tag_combo.clone(),
            })?;

            Ok(TieredMod {
                id: id.clone(),
                text: modifier.text.clone(),
                genericized_text: modifier.text.as_deref().map(genericize),
                stats: modifier.stats.clone(),
                tier,
                group: group.name.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Modifier;
    use serde_json::json;

    fn life_table() -> ModifierTable {
        let mut table = ModifierTable::new();
        for (i, range) in ["(21-25)", "(26-30)", "(31-35)", "(36-40)"].iter().enumerate() {
            table.insert(
                format!("AbyssJewelAddedLife{}", i + 1),
                Modifier {
                    stats: json!([{"id": "base_maximum_life", "min": 21, "max": 40}]),
                    text: Some(format!("+{} to maximum Life", range)),
                },
            );
        }
        table
    }

    fn life_group() -> ModGroup {
        ModGroup {
            name: "prefix/AddedLife".to_string(),
            ids: (1..=4).map(|i| format!("AbyssJewelAddedLife{}", i)).collect(),
        }
    }

    #[test]
    fn test_tier_sequence() {
        assert_eq!(tier_sequence(4).collect::<Vec<_>>(), [4, 3, 2, 1]);
        assert_eq!(tier_sequence(1).collect::<Vec<_>>(), [1]);
        assert_eq!(tier_sequence(0).count(), 0);
    }

    #[test]
    fn test_tiers_follow_list_order() {
        let key = BucketKey::new("Abyss Jewels", "abyss_jewel,default");
        let tiered = tier_group(&life_group(), &life_table(), &key).unwrap();

        let got: Vec<_> = tiered.iter().map(|m| (m.id.as_str(), m.tier)).collect();
        assert_eq!(
            got,
            [
                ("AbyssJewelAddedLife1", 4),
                ("AbyssJewelAddedLife2", 3),
                ("AbyssJewelAddedLife3", 2),
                ("AbyssJewelAddedLife4", 1),
            ]
        );
        assert_eq!(tiered[0].text.as_deref(), Some("+(21-25) to maximum Life"));
        assert_eq!(tiered[0].genericized_text.as_deref(), Some("+# to maximum Life"));
        assert_eq!(tiered[0].group, "prefix/AddedLife");
    }

    #[test]
    fn test_missing_modifier_is_fatal() {
        let mut group = life_group();
        group.ids.insert(2, "AbyssJewelAddedLife9".to_string());
        let key = BucketKey::new("Abyss Jewels", "abyss_jewel,default");

        let err = tier_group(&group, &life_table(), &key).unwrap_err();
        match err {
            MapError::MissingModifier { id, group, item_class, tag_combo } => {
                assert_eq!(id, "AbyssJewelAddedLife9");
                assert_eq!(group, "prefix/AddedLife");
                assert_eq!(item_class, "Abyss Jewels");
                assert_eq!(tag_combo, "abyss_jewel,default");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_absent_text_stays_absent() {
        let mut table = ModifierTable::new();
        table.insert("Silent", Modifier { stats: json!(0), text: None });
        let group = ModGroup { name: "g".into(), ids: vec!["Silent".into()] };

        let tiered = tier_group(&group, &table, &BucketKey::new("c", "t")).unwrap();
        assert_eq!(tiered[0].text, None);
        assert_eq!(tiered[0].genericized_text, None);
        assert_eq!(tiered[0].tier, 1);
    }
}
