//! Command-line tooling for the varma point registry.
//!
//! - `resolve`: show how names normalize and which scene objects they hit
//! - `export`: write the registry table as JSON
//! - `check`: cross-check a scene manifest against the registry

mod check;
mod export;
mod manifest;
mod resolve;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use varma_core::{AliasRegistry, MatchPolicy, Matcher};

#[derive(Debug, Parser)]
#[command(
    name = "varma-tools",
    about = "Inspect and validate the varma point registry"
)]
struct Cli {
    /// Registry table JSON to use instead of the built-in one.
    #[arg(long, global = true, value_name = "FILE")]
    registry: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Normalize and resolve point names, one report line per name.
    Resolve {
        #[arg(required = true)]
        names: Vec<String>,
        /// Enable the substring fallback for this run.
        #[arg(long)]
        fuzzy: bool,
    },
    /// Write the registry table as pretty JSON.
    Export {
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
    },
    /// Compare a scene manifest's objects with the registry.
    Check {
        #[arg(long, value_name = "FILE")]
        scene: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = load_registry(cli.registry.as_deref())?;
    info!("Registry loaded: {} concepts", registry.len());

    match cli.command {
        Command::Resolve { names, fuzzy } => {
            let policy = if fuzzy {
                MatchPolicy::WITH_FALLBACK
            } else {
                MatchPolicy::EXACT
            };
            let matcher = Matcher::new(registry);
            for line in resolve::report(&matcher, &names, policy) {
                println!("{line}");
            }
        }
        Command::Export { out } => {
            export::write_registry(&registry, &out)?;
            println!("Wrote {}", out.display());
        }
        Command::Check { scene } => {
            let manifest = manifest::SceneManifest::load(&scene)?;
            let report = check::check_scene(&manifest, &registry);
            print!("{report}");
            if !report.is_clean() {
                bail!(
                    "scene '{}' does not match the registry ({} problems)",
                    manifest.name,
                    report.problem_count()
                );
            }
        }
    }

    Ok(())
}

fn load_registry(path: Option<&Path>) -> anyhow::Result<AliasRegistry> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading registry table {}", path.display()))?;
            AliasRegistry::from_json(&json)
                .with_context(|| format!("loading registry table {}", path.display()))
        }
        None => AliasRegistry::builtin().context("built-in registry table is invalid"),
    }
}
