pub mod document;
pub mod groups;
pub mod tables;

pub use document::*;
pub use groups::*;
pub use tables::*;

use tracing::info;

use crate::config::MapConfig;
use crate::error::{Document, Result};
use crate::model::{BaseItem, ModifierTable};

/// The three input tables, fully loaded
#[derive(Debug, Clone, Default)]
pub struct InputTables {
    pub base_items: Vec<BaseItem>,
    pub modifiers: ModifierTable,
    pub groups: GroupTable,
}

/// Load and structurally validate every input document named by `config`
pub fn load_tables(config: &MapConfig) -> Result<InputTables> {
    let base_items = parse_base_items(&read_document(&config.base_items_path(), Document::BaseItems)?)?;
    info!(count = base_items.len(), "loaded base items");

    let modifiers = parse_modifiers(&read_document(&config.mods_path(), Document::Modifiers)?)?;
    info!(count = modifiers.len(), "loaded modifiers");

    let groups = parse_group_table(&read_document(&config.mod_groups_path(), Document::ModGroups)?)?;
    info!(domains = groups.domains.len(), "loaded mod groups");

    Ok(InputTables {
        base_items,
        modifiers,
        groups,
    })
}
