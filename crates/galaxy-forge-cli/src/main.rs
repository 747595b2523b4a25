mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use galaxy_forge_cli::terminal::ColorPalette;

use commands::{list::handle_list, load_galaxy, star::handle_star, stats::handle_stats};

#[derive(Parser, Debug)]
#[command(author, version, about = "Procedural galaxy generator")]
struct Cli {
    /// Star catalog file, or a directory containing `stars.csv`.
    /// Falls back to `GALAXY_FORGE_DATA`, then the platform data directory.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Disable ANSI colors in the output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print statistics for the generated galaxy.
    Stats {
        /// Emit JSON instead of the text report.
        #[arg(long)]
        json: bool,
        /// Keep stars without useful planets.
        #[arg(long)]
        keep_barren: bool,
    },
    /// Show one star with its sister and planets.
    Star {
        /// Star designation, e.g. "SOL".
        designation: String,
    },
    /// List admitted stars sorted by designation.
    List {
        /// Only list stars of this class (W, O, B, A, F, G, K, M, D, C, S).
        #[arg(long = "type")]
        star_type: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let palette = ColorPalette::for_flag(cli.no_color);
    let galaxy = load_galaxy(cli.data.as_deref())?;

    match cli.command {
        Command::Stats { json, keep_barren } => handle_stats(galaxy, json, keep_barren),
        Command::Star { designation } => handle_star(galaxy, &designation, &palette),
        Command::List { star_type } => handle_list(&galaxy, star_type.as_deref(), &palette),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
