use std::io;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

use commands::{CornerArgs, OutputArgs, RectangleArgs};

/// Top-level CLI argument parser for the `tqec` command
#[derive(Parser)]
#[command(
    name = "tqec",
    about = "Build, scale and instantiate TQEC plaquette templates",
    version
)]
struct Cli {
    /// Log rescaling and instantiation details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `tqec` CLI
#[derive(Subcommand)]
enum Commands {
    /// Instantiate an L-shaped scalable corner
    Corner {
        #[command(flatten)]
        corner: CornerArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Instantiate an alternating rectangle
    Rectangle {
        #[command(flatten)]
        rectangle: RectangleArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "tqec=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Corner { corner, output } => commands::corner(&corner, &output),
        Commands::Rectangle { rectangle, output } => commands::rectangle(&rectangle, &output),
    };

    match result {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
