//! Folio CLI Library
//!
//! Command implementations for the `folio` binary, exposed as a library so
//! they can be driven from tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, list, show, new)
//!
//! # Example
//!
//! ```no_run
//! use folio::cmd;
//! use folio_core::ContentKind;
//!
//! let config = folio::load_config(None, None).unwrap();
//! let repo = folio::ContentRepository::from_config(&config);
//! cmd::list::run(&repo, ContentKind::Writings, None, None, false).unwrap();
//! ```

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr, bail};

pub mod cmd;

pub use folio_content::ContentRepository;
pub use folio_core::Config;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Resolve the configuration for a CLI invocation.
///
/// An explicit `config_path` must exist. Without one, `folio.toml` in the
/// working directory is used when present and defaults otherwise. `root`
/// replaces the configured content root.
pub fn load_config(config_path: Option<&Path>, root: Option<&Path>) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => {
            if !path.exists() {
                bail!("Configuration file not found: {}", path.display());
            }
            Config::load(path).wrap_err("Failed to load configuration")?
        }
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            Config::load(Path::new(DEFAULT_CONFIG_FILE)).wrap_err("Failed to load configuration")?
        }
        None => {
            tracing::info!("no {DEFAULT_CONFIG_FILE} found, using defaults");
            Config::default()
        }
    };

    if let Some(root) = root {
        tracing::info!(root = %root.display(), "Overriding content root from CLI");
        config.content.root = PathBuf::from(root);
    }

    Ok(config)
}

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
