//! Folio CLI - Static export and content checks.
//!
//! # Usage
//!
//! ```bash
//! # Render the built-in content to ./dist
//! folio build
//!
//! # Render a content file to a custom directory
//! folio build --content content.yaml --out public
//!
//! # List placeholder links left in a content file
//! folio check --content content.yaml
//!
//! # Fail when a placeholder would render as a dead link
//! folio check --content content.yaml --strict
//! ```
//!
//! # Commands
//!
//! - `build` - Write `index.html` and static assets
//! - `check` - Report placeholder and duplicate content

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Folio portfolio tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the page to a static directory
    Build {
        /// Content file (YAML); the built-in content is used when omitted
        #[arg(short, long, env = "FOLIO_CONTENT_PATH")]
        content: Option<PathBuf>,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,

        /// Static asset directory copied to `<out>/static`
        #[arg(long, env = "FOLIO_STATIC_DIR", default_value = "crates/site/static")]
        static_dir: PathBuf,
    },
    /// Report placeholder links and duplicate keys
    Check {
        /// Content file (YAML); the built-in content is used when omitted
        #[arg(short, long, env = "FOLIO_CONTENT_PATH")]
        content: Option<PathBuf>,

        /// Exit with an error when a placeholder renders as a dead link
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Build {
            content,
            out,
            static_dir,
        } => {
            commands::build::run(content.as_deref(), &out, &static_dir)?;
        }
        Commands::Check { content, strict } => {
            commands::check::run(content.as_deref(), strict)?;
        }
    }
    Ok(())
}
