use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT: &str = "output/class_base_mods.json";
pub const DEFAULT_DOMAIN: &str = "abyss_jewel";

pub const BASE_ITEMS_FILE: &str = "base_items.json";
pub const MODS_FILE: &str = "mods.json";
pub const MOD_GROUPS_FILE: &str = "mods_by_base.json";

/// Where inputs are read from, where outputs go and which domain is mapped
#[derive(Debug, Clone, PartialEq)]
pub struct MapConfig {
    pub data_dir: PathBuf,
    pub base_items_file: PathBuf,
    pub mods_file: PathBuf,
    pub mod_groups_file: PathBuf,
    pub output: PathBuf,
    /// Optional second output keyed by genericized text
    pub tier_map: Option<PathBuf>,
    pub domain: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

impl MapConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            base_items_file: PathBuf::from(BASE_ITEMS_FILE),
            mods_file: PathBuf::from(MODS_FILE),
            mod_groups_file: PathBuf::from(MOD_GROUPS_FILE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            tier_map: None,
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_tier_map(mut self, tier_map: Option<PathBuf>) -> Self {
        self.tier_map = tier_map;
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn base_items_path(&self) -> PathBuf {
        self.resolve(&self.base_items_file)
    }

    pub fn mods_path(&self) -> PathBuf {
        self.resolve(&self.mods_file)
    }

    pub fn mod_groups_path(&self) -> PathBuf {
        self.resolve(&self.mod_groups_file)
    }

    /// Input files are relative to the data dir unless given as absolute paths
    fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.join(file)
        }
    }
}
