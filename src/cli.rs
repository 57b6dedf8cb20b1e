use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{self, MapConfig};

#[derive(Parser, Debug)]
#[command(name = "poe-base-mod-map")]
#[command(version, about = "Build a base item / tiered modifier map from Path of Exile data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Input selection shared by every command that reads the data files
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Directory containing the input JSON files
    #[arg(short, long, env = "POE_MOD_MAP_DATA_DIR", default_value = config::DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Base item table, relative to the data directory
    #[arg(long, default_value = config::BASE_ITEMS_FILE)]
    pub base_items: PathBuf,

    /// Modifier table, relative to the data directory
    #[arg(long, default_value = config::MODS_FILE)]
    pub mods: PathBuf,

    /// Mod group table, relative to the data directory
    #[arg(long, default_value = config::MOD_GROUPS_FILE)]
    pub mod_groups: PathBuf,

    /// Base item domain to map
    #[arg(long, env = "POE_MOD_MAP_DOMAIN", default_value = config::DEFAULT_DOMAIN)]
    pub domain: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the map and write it to disk
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Output JSON path
        #[arg(short, long, env = "POE_MOD_MAP_OUTPUT", default_value = config::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Also write a genericized-text -> tier lookup to this path
        #[arg(short, long)]
        tier_map: Option<PathBuf>,
    },

    /// Print item classes and tag combinations without writing anything
    ListClasses {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the genericized form of modifier texts
    Genericize {
        /// Modifier texts, e.g. "Adds (5-10) to (15-20) Life"
        #[arg(required = true)]
        texts: Vec<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

impl InputArgs {
    pub fn into_config(self) -> MapConfig {
        let mut config = MapConfig::new(self.data_dir).with_domain(self.domain);
        config.base_items_file = self.base_items;
        config.mods_file = self.mods;
        config.mod_groups_file = self.mod_groups;
        config
    }
}
