//! Folio CLI
//!
//! Inspect, validate, and scaffold the record collections of a portfolio site.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use folio::{ContentRepository, cmd::show::View};
use folio_core::{ArtworkType, ContentKind};

/// Command-line interface for folio.
#[derive(Parser)]
#[command(
    name = "folio",
    version,
    about = "Inspect and validate portfolio content"
)]
struct Cli {
    /// Path to configuration file (defaults to ./folio.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the configured content root
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate configuration and every record file
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// List a collection, most recent first
    List {
        /// Collection: case-studies, projects, artwork or writings
        kind: ContentKind,
        /// Only artwork of this type (photo, oil, illustration)
        #[arg(long = "type")]
        artwork_type: Option<ArtworkType>,
        /// Only writings carrying this tag
        #[arg(long)]
        tag: Option<String>,
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single record by slug
    Show {
        /// Collection: case-studies, projects, artwork or writings
        kind: ContentKind,
        /// Record slug (file name without extension)
        slug: String,
        /// Print the rendered body as HTML instead of JSON
        #[arg(long, conflicts_with = "toc")]
        html: bool,
        /// Print the body's heading outline instead of JSON
        #[arg(long)]
        toc: bool,
    },
    /// Create a new record from a template
    New {
        /// Collection: case-studies, projects, artwork or writings
        kind: ContentKind,
        /// Slug, used as the file name
        slug: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    folio::init_tracing(cli.verbose);

    let config = cli.config.as_deref();
    let root = cli.root.as_deref();

    match cli.command {
        Commands::Check { strict } => {
            folio::cmd::check::run(config, root, strict)?;
        }
        Commands::List {
            kind,
            artwork_type,
            tag,
            json,
        } => {
            let repo = open_repository(config, root)?;
            folio::cmd::list::run(&repo, kind, artwork_type, tag.as_deref(), json)?;
        }
        Commands::Show {
            kind,
            slug,
            html,
            toc,
        } => {
            let view = if html {
                View::Html
            } else if toc {
                View::Toc
            } else {
                View::Json
            };
            let repo = open_repository(config, root)?;
            folio::cmd::show::run(&repo, kind, &slug, view)?;
        }
        Commands::New { kind, slug } => {
            let repo = open_repository(config, root)?;
            folio::cmd::new::run(&repo, kind, &slug)?;
        }
    }

    Ok(())
}

fn open_repository(config: Option<&Path>, root: Option<&Path>) -> Result<ContentRepository> {
    let config = folio::load_config(config, root)?;
    let repo = ContentRepository::from_config(&config);
    tracing::debug!(root = %repo.root().display(), "Using content root");
    Ok(repo)
}
