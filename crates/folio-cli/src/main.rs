//! Folio Hero CLI
//!
//! Thin wrapper around folio-core for the terminal.
//!
//! ## Usage
//!
//! ```bash
//! # Run the typewriter for two full phrase cycles
//! folio-hero type --cycles 2
//!
//! # Try out custom phrases with a short hold
//! folio-hero type --phrase "Rust Developer" --phrase "Tinkerer" --hold-ms 500
//!
//! # Validate the configuration
//! folio-hero --config hero.json check
//!
//! # Write the default configuration
//! folio-hero init
//!
//! # Show contact details
//! folio-hero contact
//!
//! # Save the resume into ~/Downloads (or --dest)
//! folio-hero resume
//! ```

use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use folio_core::config::default_config_path;
use folio_core::logging::setup_logging;
use folio_core::{
    default_download_dir, download_resume, HeroConfig, PauseGate, TypewriterEngine,
    TypewriterSnapshot, VisibilityLatch,
};

/// Folio Hero - portfolio landing panel
#[derive(Parser)]
#[command(name = "folio-hero")]
#[command(version = "0.1.0")]
#[command(about = "Folio Hero - portfolio landing panel")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/folio-hero/hero.json, else built-in)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the typewriter in the terminal
    Type {
        /// Stop after this many full phrase cycles (0 runs until Ctrl+C)
        #[arg(long, default_value_t = 1)]
        cycles: u32,

        /// Phrase to type instead of the configured ones (repeatable)
        #[arg(short, long = "phrase")]
        phrases: Vec<String>,

        /// Override the per-character typing delay
        #[arg(long)]
        type_ms: Option<u64>,

        /// Override the per-character deleting delay
        #[arg(long)]
        delete_ms: Option<u64>,

        /// Override the hold after a fully typed phrase
        #[arg(long)]
        hold_ms: Option<u64>,
    },

    /// Validate the configuration and print a summary
    Check,

    /// Write the default configuration file
    Init {
        /// Destination (default: the per-user config path)
        #[arg(long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print contact details and profile links
    Contact,

    /// Save the resume file
    Resume {
        /// Destination directory (default: the user's download directory)
        #[arg(long)]
        dest: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config_path = cli.config;
    let load_config = || {
        HeroConfig::load_or_default(config_path.as_deref()).context("Failed to load hero config")
    };

    match cli.command {
        Commands::Type {
            cycles,
            phrases,
            type_ms,
            delete_ms,
            hold_ms,
        } => {
            let mut config = load_config()?;
            if !phrases.is_empty() {
                config.phrases = phrases;
            }
            if let Some(ms) = type_ms {
                config.timing.type_delay = Duration::from_millis(ms);
            }
            if let Some(ms) = delete_ms {
                config.timing.delete_delay = Duration::from_millis(ms);
            }
            if let Some(ms) = hold_ms {
                config.timing.hold_delay = Duration::from_millis(ms);
            }
            config.validate()?;
            run_typewriter(&config, cycles).await?;
        }

        Commands::Check => {
            let config = load_config()?;
            let phrases = config.phrase_list()?;
            println!("Config OK");
            println!();
            println!("Name: {}", config.personal.name);
            println!("Phrases ({}):", phrases.len());
            for phrase in phrases.iter() {
                println!("  - {:?}", phrase);
            }
            println!(
                "Timing: type {}ms, delete {}ms, hold {}ms",
                config.timing.type_delay.as_millis(),
                config.timing.delete_delay.as_millis(),
                config.timing.hold_delay.as_millis()
            );
            println!(
                "Resume: {} (saved as {})",
                config.resume.source.display(),
                config.resume.file_name
            );
        }

        Commands::Contact => {
            let config = load_config()?;
            let details = config.personal.contact_details();
            println!("Let's Connect!");
            println!();
            for (field, value) in details.entries() {
                println!("  {:<9} {}", format!("{}:", field), value);
            }
            println!();
            for link in config.personal.social_links() {
                println!("  {:<9} {}", format!("{}:", link.label), link.href);
            }
        }

        Commands::Init { path, force } => init_config(path, force)?,

        Commands::Resume { dest } => {
            let config = load_config()?;
            let dest = dest.unwrap_or_else(default_download_dir);
            let path = download_resume(&config.resume, &dest)?;
            println!("Resume saved to {}", path.display());
        }
    }

    Ok(())
}

fn init_config(path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = match path.or_else(default_config_path) {
        Some(path) => path,
        None => bail!("No config directory on this platform, pass --path"),
    };
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, HeroConfig::default().to_json_pretty()?)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

/// Type phrases until `cycles` phrase cycles complete (or Ctrl+C).
///
/// A terminal is always "visible", so the gate opens immediately. On a
/// TTY the line is redrawn in place; otherwise each frame gets its own line.
async fn run_typewriter(config: &HeroConfig, cycles: u32) -> Result<()> {
    let gate = PauseGate::new(VisibilityLatch::new());
    let handle = TypewriterEngine::spawn(config.phrase_list()?, config.timing, gate.subscribe())?;
    let mut frames = handle.subscribe();
    gate.mark_visible();

    let in_place = std::io::stdout().is_terminal();
    let mut stdout = std::io::stdout().lock();
    let mut completed = 0u64;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                writeln!(stdout)?;
                break;
            }
            changed = frames.changed() => {
                if changed.is_err() {
                    break;
                }
                let frame = frames.borrow_and_update().clone();
                render_frame(&mut stdout, &frame, in_place)?;

                if frame.cycle > completed {
                    completed = frame.cycle;
                    tracing::debug!(completed, "Phrase cycle complete");
                    if cycles > 0 && completed >= u64::from(cycles) {
                        if in_place {
                            writeln!(stdout)?;
                        }
                        break;
                    }
                }
            }
        }
    }

    handle.shutdown();
    Ok(())
}

fn render_frame(out: &mut impl Write, frame: &TypewriterSnapshot, in_place: bool) -> Result<()> {
    if in_place {
        write!(out, "\r\x1b[2KI'm a {}|", frame.text)?;
    } else {
        writeln!(out, "I'm a {}|", frame.text)?;
    }
    out.flush()?;
    Ok(())
}
