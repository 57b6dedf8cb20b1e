use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// One entry of the modifier table. Only the fields the map needs are kept.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Modifier {
    /// Stat ranges, passed through untouched. Absent in the export means `0`.
    #[serde(default = "absent_stats")]
    pub stats: Value,
    #[serde(default)]
    pub text: Option<String>,
}

fn absent_stats() -> Value {
    Value::from(0)
}

/// Modifier id -> modifier
#[derive(Debug, Clone, Default)]
pub struct ModifierTable {
    mods: HashMap<String, Modifier>,
}

impl ModifierTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, modifier: Modifier) {
        self.mods.insert(id.into(), modifier);
    }

    pub fn get(&self, id: &str) -> Option<&Modifier> {
        self.mods.get(id)
    }

    pub fn len(&self) -> usize {
        self.mods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mods.is_empty()
    }
}

/// An ordered family of modifier ids. List position is the only tier source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModGroup {
    /// Path of keys from the `mods` object down to the group, joined with `/`
    pub name: String,
    pub ids: Vec<String>,
}

/// A modifier placed in its group with a position-derived tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TieredMod {
    pub id: String,
    pub text: Option<String>,
    pub genericized_text: Option<String>,
    pub stats: Value,
    pub tier: usize,
    #[serde(skip)]
    pub group: String,
}
