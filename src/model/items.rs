use serde::{Deserialize, Deserializer, Serialize};

/// Release state of a base item. Anything the exporter adds later lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum ReleaseState {
    Released,
    Unreleased,
    #[default]
    Other,
}

impl From<String> for ReleaseState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "released" => ReleaseState::Released,
            "unreleased" => ReleaseState::Unreleased,
            _ => ReleaseState::Other,
        }
    }
}

/// Parent item keys. Exports carry either a single key or a list; the shape is
/// written back out unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Inheritance {
    One(String),
    Many(Vec<String>),
}

impl Default for Inheritance {
    fn default() -> Self {
        Inheritance::Many(Vec::new())
    }
}

/// One entry of the base item table
#[derive(Debug, Clone, Deserialize)]
pub struct BaseItem {
    /// Table key, e.g. "Metadata/Items/Jewels/JewelAbyssMelee"
    #[serde(skip)]
    pub key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_class: String,
    #[serde(rename = "name", default, deserialize_with = "null_as_default")]
    pub display_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub release_state: ReleaseState,
    #[serde(default, deserialize_with = "null_as_default")]
    pub inherits_from: Inheritance,
}

impl BaseItem {
    pub fn is_released(&self) -> bool {
        self.release_state == ReleaseState::Released
    }
}

/// A base item as listed under its bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseEntry {
    pub full_name: String,
    pub base_name: String,
    pub released: bool,
    pub inherits_from: Inheritance,
}

impl From<&BaseItem> for BaseEntry {
    fn from(item: &BaseItem) -> Self {
        Self {
            full_name: item.key.clone(),
            base_name: item.display_name.clone(),
            released: item.is_released(),
            inherits_from: item.inherits_from.clone(),
        }
    }
}

/// Convert a compact item class ("AbyssJewel") into its plural display form
/// ("Abyss Jewels"). This string is a grouping key, so every place that builds
/// an item-class key must go through here.
pub fn display_item_class(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars().chain(std::iter::once('s')) {
        if c.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(c);
    }

    out.trim().to_string()
}

/// Join tags in their given order. Order is significant: `[a, b]` and `[b, a]`
/// are different combinations.
pub fn tag_combination(tags: &[String]) -> String {
    tags.join(",")
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
