use anyhow::Context;
use clap::Parser;
use plugin_clean::Cleaner;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "plugin-clean")]
#[command(about = "Run flutter clean and remove the plugin's build artifact directories")]
struct Cli {
    /// Project root the artifact paths are relative to
    #[arg(short = 'C', long, default_value = ".")]
    root: PathBuf,

    /// Report what would be removed without touching anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Do not run `flutter clean` first
    #[arg(long)]
    skip_flutter: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut cleaner = Cleaner::new(&cli.root).dry_run(cli.dry_run);
    if cli.skip_flutter {
        cleaner = cleaner.without_command();
    }

    let report = cleaner
        .run()
        .with_context(|| format!("cleaning {} failed", cleaner.root().display()))?;

    if cli.dry_run {
        println!("{}", report.display_status());
    }

    Ok(())
}
