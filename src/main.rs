use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use showstage::commands::{completions, graph, next, status};
use showstage::config::{OutputFormat, Settings};
use showstage::logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showstage")]
#[command(about = "Drone show launch checklist evaluator", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to ./showstage.toml or the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the status of every setup stage for a show state snapshot
    Status {
        /// Show state snapshot (.yaml, .yml or .json)
        state: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// List the stages recommended as the next action
    Next {
        /// Show state snapshot (.yaml, .yml or .json)
        state: PathBuf,
    },

    /// Show the setup stages with their requirements and suggestions
    Graph {
        /// Annotate stages with statuses from this snapshot
        #[arg(short, long)]
        state: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    logging::init(cli.verbose, &settings.log);

    if cli.no_color || !settings.output.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Commands::Status { state, format } => {
            status::execute(&state, format.unwrap_or(settings.output.format))
        }
        Commands::Next { state } => next::execute(&state),
        Commands::Graph { state, format } => graph::execute(
            state.as_deref(),
            format.unwrap_or(settings.output.format),
        ),
        Commands::Completions { shell } => completions::execute(&mut Cli::command(), &shell),
    }
}
