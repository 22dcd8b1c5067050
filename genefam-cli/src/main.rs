use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use genefam_core::{config::Config, load_codon_table_from_path, run_qc, run_translate, FsStore};

mod cli;
use cli::{Args, Commands};

fn main() {
    let start = std::time::Instant::now();
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.level.as_str().to_lowercase()),
    )
    .init();

    if let Err(err) = run(args) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }

    info!("elapsed time: {:.3?}", start.elapsed());
}

fn run(args: Args) -> Result<()> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()
        .context("failed to build thread pool")?;

    let mut config = match &args.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    match args.command {
        Commands::Translate(overrides) => {
            overrides.apply(&mut config.translate);
            let config = config.translate;
            let table = load_codon_table_from_path(&config.codon_table).with_context(|| {
                format!("failed to load codon table {}", config.codon_table.display())
            })?;
            info!(
                "loaded codon table {} ({} codons)",
                config.codon_table.display(),
                table.len()
            );
            run_translate(&FsStore, &table, &config)
                .with_context(|| format!("translation of {} failed", config.root.display()))?;
        }
        Commands::Qc(overrides) => {
            overrides.apply(&mut config.qc);
            let written = run_qc(&FsStore, &config.qc).context("length comparison failed")?;
            info!("{} length reports written", written.len());
        }
    }

    Ok(())
}
