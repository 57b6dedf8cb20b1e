pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod genericize;
pub mod loader;
pub mod merge;
pub mod model;
pub mod pipeline;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use config::MapConfig;
pub use error::{Document, MapError};
pub use model::{BaseModMap, BucketKey, ClassTagBucket};
pub use pipeline::{build_map, run_build, BuildSummary};
pub use ui::{ConsoleUi, Phase, SilentUi, Ui};
