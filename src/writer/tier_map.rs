use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::{btree_map, BTreeMap};
use tracing::warn;

use crate::model::{BaseModMap, TieredMod};

/// One modifier at one tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierValue {
    pub id: String,
    /// Range of the modifier's first stat, what the trade overlay fills in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Value>,
    pub stats: Value,
}

impl From<&TieredMod> for TierValue {
    fn from(tiered: &TieredMod) -> Self {
        let first = tiered.stats.as_array().and_then(|stats| stats.first());
        let bound = |name: &str| first.and_then(|stat| stat.get(name)).cloned();

        Self {
            id: tiered.id.clone(),
            min: bound("min"),
            max: bound("max"),
            stats: tiered.stats.clone(),
        }
    }
}

/// Every tier seen for one genericized text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierMapEntry {
    pub name: String,
    /// Tier number -> modifier. Written with the tier as a string key.
    pub tier_values: BTreeMap<usize, TierValue>,
}

/// Genericized text -> tiers, for looking up the tier of a rolled modifier by
/// its display label. Written as a list of entries in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ModTierMap {
    entries: IndexMap<String, TierMapEntry>,
}

impl ModTierMap {
    /// Collect tiers from every bucket. The first modifier seen for a given
    /// (text, tier) pair wins.
    pub fn from_map(map: &BaseModMap) -> Self {
        let mut tiers = Self::default();

        for bucket in map.buckets() {
            for tiered in &bucket.mods_by_tiers {
                let Some(name) = tiered.genericized_text.as_deref() else {
                    continue;
                };

                let entry = tiers
                    .entries
                    .entry(name.to_string())
                    .or_insert_with(|| TierMapEntry {
                        name: name.to_string(),
                        tier_values: BTreeMap::new(),
                    });

                match entry.tier_values.entry(tiered.tier) {
                    btree_map::Entry::Vacant(slot) => {
                        slot.insert(TierValue::from(tiered));
                    }
                    btree_map::Entry::Occupied(slot) if slot.get().id != tiered.id => {
                        warn!(
                            text = name,
                            tier = tiered.tier,
                            kept = %slot.get().id,
                            ignored = %tiered.id,
                            "conflicting modifiers for tier"
                        );
                    }
                    btree_map::Entry::Occupied(_) => {}
                }
            }
        }

        tiers
    }

    pub fn get(&self, name: &str) -> Option<&TierMapEntry> {
        self.entries.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = &TierMapEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ModTierMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}
