use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

use crate::classify::classify_bases;
use crate::config::MapConfig;
use crate::loader::{load_tables, InputTables};
use crate::merge::merge_groups;
use crate::model::BaseModMap;
use crate::ui::{Phase, Ui};
use crate::writer::{commit_all, stage_json, ModTierMap};

/// What a finished build produced
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub output: PathBuf,
    pub tier_map: Option<PathBuf>,
    pub buckets: usize,
    pub bases: usize,
    pub tiered_mods: usize,
    pub elapsed: Duration,
}

/// Classify the bases of `domain` and merge their mod groups
pub fn build_map(tables: &InputTables, domain: &str, ui: &mut impl Ui) -> Result<BaseModMap> {
    ui.set_phase(Phase::Classifying);
    let map = classify_bases(&tables.base_items, domain);
    ui.log(format!(
        "{} base items in {} buckets for domain {:?}",
        map.base_count(),
        map.len(),
        domain
    ));

    ui.set_phase(Phase::Merging);
    let map = merge_groups(map, &tables.groups, &tables.modifiers)?;
    ui.log(format!("{} tiered modifiers", map.tiered_mod_count()));

    Ok(map)
}

/// Load and transform, without writing anything
pub fn load_and_build(config: &MapConfig, ui: &mut impl Ui) -> Result<BaseModMap> {
    ui.set_phase(Phase::Loading);
    let tables = load_tables(config)?;
    ui.log(format!(
        "{} base items, {} modifiers, {} group domains",
        tables.base_items.len(),
        tables.modifiers.len(),
        tables.groups.domains.len()
    ));

    build_map(&tables, &config.domain, ui)
}

/// Run the whole pipeline for `config`. Either every output is written or none is.
pub fn run_build(config: &MapConfig, ui: &mut impl Ui) -> Result<BuildSummary> {
    let start = Instant::now();

    let map = load_and_build(config, ui)?;

    // Serialize and stage every output before any of them replaces its destination
    ui.set_phase(Phase::Writing);
    let mut staged = vec![stage_json(&config.output, &map)
        .with_context(|| format!("Failed to write map to {:?}", config.output))?];

    let mut tier_texts = None;
    if let Some(path) = &config.tier_map {
        let tiers = ModTierMap::from_map(&map);
        staged.push(
            stage_json(path, &tiers)
                .with_context(|| format!("Failed to write tier map to {:?}", path))?,
        );
        tier_texts = Some(tiers.len());
    }

    commit_all(staged)?;
    ui.log(format!("Wrote {:?}", config.output));
    if let (Some(path), Some(count)) = (&config.tier_map, tier_texts) {
        ui.log(format!("Wrote {:?} ({} texts)", path, count));
    }

    ui.set_phase(Phase::Complete);

    let summary = BuildSummary {
        output: config.output.clone(),
        tier_map: config.tier_map.clone(),
        buckets: map.len(),
        bases: map.base_count(),
        tiered_mods: map.tiered_mod_count(),
        elapsed: start.elapsed(),
    };
    info!(
        buckets = summary.buckets,
        bases = summary.bases,
        tiered_mods = summary.tiered_mods,
        "build complete"
    );

    Ok(summary)
}
