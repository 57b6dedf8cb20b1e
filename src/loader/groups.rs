use serde_json::{Map, Value};

use super::document::{expect_object, kind};
use crate::error::{Document, MapError, Result};
use crate::model::ModGroup;

/// Mod groups eligible for one tag combination
#[derive(Debug, Clone, PartialEq)]
pub struct TagComboGroups {
    pub tag_combo: String,
    /// The `mods` object exactly as it appeared in the input
    pub mods: Value,
    /// Groups found in `mods`, in document order
    pub groups: Vec<ModGroup>,
}

/// All tag combinations listed under one group-table key
#[derive(Debug, Clone, PartialEq)]
pub struct DomainGroups {
    pub domain: String,
    pub tag_combos: Vec<TagComboGroups>,
}

/// The mod group table: domain -> tag combination -> groups
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTable {
    pub domains: Vec<DomainGroups>,
}

impl GroupTable {
    pub fn domain(&self, name: &str) -> Option<&DomainGroups> {
        self.domains.iter().find(|d| d.domain == name)
    }
}

/// Parse the mod group table document
pub fn parse_group_table(root: &Value) -> Result<GroupTable> {
    let root = expect_object(root, Document::ModGroups, "<root>")?;
    let mut domains = Vec::with_capacity(root.len());

    for (domain, combos) in root {
        let combos = expect_object(combos, Document::ModGroups, domain)?;
        let mut tag_combos = Vec::with_capacity(combos.len());

        for (tag_combo, entry) in combos {
            let entry_key = format!("{}/{}", domain, tag_combo);
            let entry = expect_object(entry, Document::ModGroups, &entry_key)?;

            // An entry without a `mods` field still gets an (empty) table
            let mods = entry
                .get("mods")
                .cloned()
                .unwrap_or_else(|| Value::Object(Map::new()));
            let groups = collect_groups(&mods, &entry_key)?;

            tag_combos.push(TagComboGroups {
                tag_combo: tag_combo.clone(),
                mods,
                groups,
            });
        }

        domains.push(DomainGroups {
            domain: domain.clone(),
            tag_combos,
        });
    }

    Ok(GroupTable { domains })
}

/// Flatten a `mods` object into its groups.
///
/// A group is either an array of ids or an object of id -> spawn weight. Any
/// other object is a section (`prefix`, `suffix`, ...) holding more groups.
pub fn collect_groups(mods: &Value, key: &str) -> Result<Vec<ModGroup>> {
    let mods = expect_object(mods, Document::ModGroups, &format!("{}/mods", key))?;
    let mut groups = Vec::new();
    walk_section(mods, "", key, &mut groups)?;
    Ok(groups)
}

fn walk_section(
    section: &Map<String, Value>,
    prefix: &str,
    key: &str,
    groups: &mut Vec<ModGroup>,
) -> Result<()> {
    for (name, value) in section {
        let path = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };

        match value {
            Value::Array(ids) => {
                let ids = ids
                    .iter()
                    .map(|id| {
                        id.as_str().map(str::to_string).ok_or_else(|| {
                            MapError::malformed(
                                Document::ModGroups,
                                format!("{}/{}", key, path),
                                format!("modifier id must be a string, found {}", kind(id)),
                            )
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                groups.push(ModGroup { name: path, ids });
            }
            Value::Object(entries) if entries.values().all(Value::is_number) => {
                groups.push(ModGroup {
                    name: path,
                    ids: entries.keys().cloned().collect(),
                });
            }
            Value::Object(entries) if entries.values().all(|v| v.is_object() || v.is_array()) => {
                walk_section(entries, &path, key, groups)?;
            }
            other => {
                return Err(MapError::malformed(
                    Document::ModGroups,
                    format!("{}/{}", key, path),
                    format!(
                        "expected a list of ids, an id -> weight object or a section, found {}",
                        if other.is_object() { "a mixed object" } else { kind(other) }
                    ),
                ));
            }
        }
    }

    Ok(())
}
