//! Detective Quest - explore the manor, collect clues, accuse a suspect.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use investigation::console::{ConsoleDetective, OutputFormat};
use investigation::{CaseSession, Judgment};
use manor::CaseConfig;

#[derive(Parser)]
#[command(name = "detective-quest")]
#[command(about = "Explore the manor, collect clues and accuse a suspect", long_about = None)]
#[command(version)]
struct Cli {
    /// Case configuration file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write events as JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => CaseConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => CaseConfig::default(),
    };

    let mut session = CaseSession::seeded(config).context("building the manor")?;

    let format = if cli.json {
        OutputFormat::JsonLines
    } else {
        println!("Bem-vindo(a) ao Detective Quest! Explore a mansão a partir do Hall de Entrada.\n");
        OutputFormat::Text
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut detective = ConsoleDetective::new(stdin.lock(), BufWriter::new(stdout.lock()), format);

    let judgment = session.run(&mut detective)?;
    match judgment {
        Judgment::NoEvidence => info!(session = %session.id, "case closed without evidence"),
        Judgment::Verdict(verdict) => info!(
            session = %session.id,
            accused = %verdict.accused,
            support = verdict.support_count,
            "case closed"
        ),
    }

    Ok(())
}
