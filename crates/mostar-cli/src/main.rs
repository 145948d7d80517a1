mod cmd;
mod output;

use clap::{Parser, Subcommand};
use mostar_core::MoScriptRegistry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mostar",
    about = "MoStar command console — run MoScript diagnostics against the grid",
    version,
    propagate_version = true
)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered MoScripts
    List,

    /// Show one MoScript's descriptor
    Show {
        /// MoScript id (e.g. mo-fwd-eff-001)
        id: String,
    },

    /// Execute a MoScript against canned fixtures (or an input file)
    Run {
        /// MoScript id
        id: String,

        /// YAML or JSON file holding an input bag that replaces the canned fixtures
        #[arg(long)]
        inputs: Option<PathBuf>,
    },

    /// Execute every registered MoScript with canned fixtures
    RunAll,

    /// Show the execution history window recorded in this invocation
    History,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let mut registry = MoScriptRegistry::with_builtins();

    let result = match cli.command {
        Commands::List => cmd::list::run(&registry, cli.json),
        Commands::Show { id } => cmd::show::run(&registry, &id, cli.json),
        Commands::Run { id, inputs } => {
            cmd::run::run(&mut registry, &id, inputs.as_deref(), cli.json)
        }
        Commands::RunAll => cmd::run_all::run(&mut registry, cli.json),
        Commands::History => cmd::history::run(&registry, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
