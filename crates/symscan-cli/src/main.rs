mod commands;
mod summary;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "symscan", about = "Symbol detection for architectural drawings")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Detection service base URL, overrides config and environment
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a drawing and run the full detection pipeline
    Run(commands::run::RunArgs),
    /// Clear uploads and outputs on the detection service
    Reset,
    /// Show the results of the last completed run
    Results(commands::results::ResultsArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let global = commands::GlobalArgs {
        config: cli.config,
        base_url: cli.base_url,
    };

    match &cli.command {
        Commands::Run(args) => commands::run::run(&global, args),
        Commands::Reset => commands::reset::run(&global),
        Commands::Results(args) => commands::results::run(&global, args),
        Commands::Config(args) => commands::config::run(args),
    }
}
