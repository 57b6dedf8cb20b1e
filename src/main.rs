use anyhow::Result;
use poe_base_mod_map::{
    cli::{Cli, Commands},
    genericize::genericize,
    pipeline::{load_and_build, run_build},
    ui::ConsoleUi,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "poe_base_mod_map=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let mut ui = ConsoleUi::new();

    match cli.command {
        Commands::Build {
            input,
            output,
            tier_map,
        } => {
            let config = input
                .into_config()
                .with_output(output)
                .with_tier_map(tier_map);

            let summary = run_build(&config, &mut ui)?;

            println!(
                "\nMod map written to {:?} ({} buckets, {} bases, {} tiered mods) in {:.1}s",
                summary.output,
                summary.buckets,
                summary.bases,
                summary.tiered_mods,
                summary.elapsed.as_secs_f64()
            );
            if let Some(path) = summary.tier_map {
                println!("Tier map written to {:?}", path);
            }
        }

        Commands::ListClasses { input } => {
            let config = input.into_config();
            let map = load_and_build(&config, &mut ui)?;

            println!("\nItem classes for domain {:?}:\n", config.domain);
            for item_class in map.classes() {
                println!("  {}", item_class);
                for (tag_combo, bucket) in map.class_buckets(item_class) {
                    println!(
                        "    {:<40} {:>3} bases {:>4} tiered mods",
                        tag_combo,
                        bucket.bases.len(),
                        bucket.mods_by_tiers.len()
                    );
                }
            }
        }

        Commands::Genericize { texts } => {
            for text in texts {
                println!("{}", genericize(&text));
            }
        }
    }

    Ok(())
}
