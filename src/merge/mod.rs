pub mod tiers;

pub use tiers::*;

use tracing::{debug, info};

use crate::error::Result;
use crate::loader::GroupTable;
use crate::model::{BaseModMap, BucketKey, ModifierTable};

/// Attach mod groups and tiered modifiers to classified buckets.
///
/// Group-table keys are matched against the display item classes produced by
/// classification. Every tag combination under a matched key gets a bucket,
/// even one without bases; tag combinations with bases but no groups are left
/// without `mods`.
pub fn merge_groups(
    mut map: BaseModMap,
    groups: &GroupTable,
    modifiers: &ModifierTable,
) -> Result<BaseModMap> {
    for domain in &groups.domains {
        if !map.contains_class(&domain.domain) {
            debug!(domain = %domain.domain, "no classified bases for group table entry");
            continue;
        }

        for combo in &domain.tag_combos {
            let key = BucketKey::new(domain.domain.as_str(), combo.tag_combo.as_str());

            let mut tiered = Vec::new();
            for group in &combo.groups {
                tiered.extend(tier_group(group, modifiers, &key)?);
            }

            let bucket = map.bucket_mut(key);
            bucket.mods = Some(combo.mods.clone());
            bucket.mods_by_tiers.extend(tiered);
        }
    }

    info!(
        buckets = map.len(),
        tiered_mods = map.tiered_mod_count(),
        "merged mod groups"
    );

    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_bases;
    use crate::error::MapError;
    use crate::loader::parse_group_table;
    use crate::model::{BaseItem, Modifier, ReleaseState};
    use serde_json::json;

    fn jewel(key: &str, tags: &[&str]) -> BaseItem {
        BaseItem {
            key: key.to_string(),
            domain: "abyss_jewel".to_string(),
            item_class: "AbyssJewel".to_string(),
            display_name: key.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            release_state: ReleaseState::Released,
            inherits_from: Default::default(),
        }
    }

    fn modifiers(ids: &[&str]) -> ModifierTable {
        let mut table = ModifierTable::new();
        for id in ids {
            table.insert(
                *id,
                Modifier {
                    stats: json!(0),
                    text: Some(format!("{} (1-2)", id)),
                },
            );
        }
        table
    }

    #[test]
    fn test_groups_are_contiguous_and_descending() {
        let map = classify_bases(&[jewel("Eye", &["abyss_jewel", "default"])], "abyss_jewel");
        let groups = parse_group_table(&json!({
            "Abyss Jewels": {
                "abyss_jewel,default": {"mods": {
                    "prefix": {"Life": {"L1": 3000, "L2": 1000, "L3": 500}},
                    "suffix": {"Mana": ["M1", "M2"]}
                }}
            }
        }))
        .unwrap();

        let map = merge_groups(map, &groups, &modifiers(&["L1", "L2", "L3", "M1", "M2"])).unwrap();
        let bucket = map
            .get(&BucketKey::new("Abyss Jewels", "abyss_jewel,default"))
            .unwrap();

        let got: Vec<_> = bucket
            .mods_by_tiers
            .iter()
            .map(|m| (m.id.as_str(), m.tier))
            .collect();
        assert_eq!(got, [("L1", 3), ("L2", 2), ("L3", 1), ("M1", 2), ("M2", 1)]);
        assert_eq!(bucket.bases.len(), 1);
        assert_eq!(
            bucket.mods.as_ref().unwrap()["prefix"]["Life"]["L2"],
            json!(1000)
        );
    }

    #[test]
    fn test_unmatched_pairs_are_partial_buckets() {
        let map = classify_bases(&[jewel("Eye", &["abyss_jewel", "default"])], "abyss_jewel");
        let groups = parse_group_table(&json!({
            "Abyss Jewels": {
                "abyss_jewel,caster": {"mods": {"Spell": ["S1"]}}
            },
            "Rings": {
                "ring": {"mods": {"Life": ["R1"]}}
            }
        }))
        .unwrap();

        let map = merge_groups(map, &groups, &modifiers(&["S1"])).unwrap();

        let bases_only = map
            .get(&BucketKey::new("Abyss Jewels", "abyss_jewel,default"))
            .unwrap();
        assert!(bases_only.mods.is_none());
        assert!(bases_only.mods_by_tiers.is_empty());

        let mods_only = map
            .get(&BucketKey::new("Abyss Jewels", "abyss_jewel,caster"))
            .unwrap();
        assert!(mods_only.bases.is_empty());
        assert_eq!(mods_only.mods_by_tiers.len(), 1);

        // Rings never had bases, and R1 is not even in the modifier table
        assert!(!map.contains_class("Rings"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_missing_modifier_aborts_merge() {
        let map = classify_bases(&[jewel("Eye", &["abyss_jewel"])], "abyss_jewel");
        let groups = parse_group_table(&json!({
            "Abyss Jewels": {"abyss_jewel": {"mods": {"Life": ["L1", "Gone"]}}}
        }))
        .unwrap();

        let err = merge_groups(map, &groups, &modifiers(&["L1"])).unwrap_err();
        assert!(matches!(err, MapError::MissingModifier { ref id, .. } if id == "Gone"));
    }
}
