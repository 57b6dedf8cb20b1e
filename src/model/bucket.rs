use indexmap::IndexMap;
use serde_json::Value;

use super::items::BaseEntry;
use super::modifiers::TieredMod;

/// Composite key of a bucket: display item class plus tag combination
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BucketKey {
    pub item_class: String,
    pub tag_combo: String,
}

impl BucketKey {
    pub fn new(item_class: impl Into<String>, tag_combo: impl Into<String>) -> Self {
        Self {
            item_class: item_class.into(),
            tag_combo: tag_combo.into(),
        }
    }
}

/// Everything known about one (item class, tag combination) pair
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct ClassTagBucket {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<BaseEntry>,
    /// Raw group table for this tag combination, as it appeared in the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mods: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mods_by_tiers: Vec<TieredMod>,
}

/// Item class -> tag combination -> bucket, both levels in insertion order
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(transparent)]
pub struct BaseModMap {
    classes: IndexMap<String, IndexMap<String, ClassTagBucket>>,
}

impl BaseModMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the bucket for `key`, creating an empty one at the end of its class if needed
    pub fn bucket_mut(&mut self, key: BucketKey) -> &mut ClassTagBucket {
        self.classes
            .entry(key.item_class)
            .or_default()
            .entry(key.tag_combo)
            .or_default()
    }

    pub fn get(&self, key: &BucketKey) -> Option<&ClassTagBucket> {
        self.classes.get(&key.item_class)?.get(&key.tag_combo)
    }

    pub fn contains_class(&self, item_class: &str) -> bool {
        self.classes.contains_key(item_class)
    }

    /// Item classes in first-seen order
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Tag combination -> bucket for one class, in insertion order
    pub fn class_buckets(&self, item_class: &str) -> impl Iterator<Item = (&str, &ClassTagBucket)> {
        self.classes
            .get(item_class)
            .into_iter()
            .flat_map(|buckets| buckets.iter().map(|(tag_combo, bucket)| (tag_combo.as_str(), bucket)))
    }

    /// All buckets, class by class
    pub fn buckets(&self) -> impl Iterator<Item = &ClassTagBucket> {
        self.classes.values().flat_map(IndexMap::values)
    }

    pub fn len(&self) -> usize {
        self.classes.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn base_count(&self) -> usize {
        self.buckets().map(|b| b.bases.len()).sum()
    }

    pub fn tiered_mod_count(&self) -> usize {
        self.buckets().map(|b| b.mods_by_tiers.len()).sum()
    }
}
