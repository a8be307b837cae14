//! `product-page` command line.

use clap::Parser;
use serde_json::{Value, json};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Interaction};
use crate::config::Config;
use crate::error::{ConfigError, PageError, ParseError};
use crate::types::Catalog;

#[derive(Debug, Parser)]
#[command(
    name = "product-page",
    about = "Render a product page and drive it with scripted interactions",
    version
)]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Catalog document; overrides the config file. Built-in catalog when absent.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Premium membership (free shipping); overrides the config file.
    #[arg(long, overrides_with = "no_premium")]
    pub premium: bool,

    /// Standard membership (flat shipping fee); overrides the config file.
    #[arg(long = "no-premium", overrides_with = "premium")]
    pub no_premium: bool,

    /// YAML interaction script, applied before any `--do` interactions.
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Interaction to apply, e.g. `hover=1`, `add_to_cart`, `name=Ann`,
    /// `rating=4`, `submit`. Repeatable.
    #[arg(long = "do", value_name = "INTERACTION")]
    pub interactions: Vec<String>,

    /// Print the final state as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug)]
pub enum CliError {
    Config(ConfigError),
    Io { path: PathBuf, source: std::io::Error },
    Catalog(Vec<PageError>),
    Script(ParseError),
    Json(serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config(_) | CliError::Io { .. } => 2,
            CliError::Catalog(_) | CliError::Script(_) => 3,
            CliError::Json(_) => 1,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Io { path, source } => write!(f, "cannot read {}: {}", path.display(), source),
            CliError::Catalog(errors) => {
                write!(f, "invalid catalog ({} errors)", errors.len())?;
                for e in errors {
                    write!(f, "\n  {}", e)?;
                }
                Ok(())
            }
            CliError::Script(e) => write!(f, "invalid script: {}", e),
            CliError::Json(e) => write!(f, "cannot encode output: {}", e),
        }
    }
}

impl std::error::Error for CliError {}

pub fn run_from_env() -> Result<(), CliError> {
    run(Cli::parse())
}

impl Cli {
    /// Applies command-line overrides on top of file configuration.
    pub fn merge(&self, mut config: Config) -> Config {
        if self.catalog.is_some() {
            config.catalog = self.catalog.clone();
        }
        if self.premium {
            config.premium = true;
        } else if self.no_premium {
            config.premium = false;
        }
        config
    }
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    let config = match &cli.config {
        Some(path) => Config::load(path).map_err(CliError::Config)?,
        None => Config::default(),
    };
    let config = cli.merge(config);

    init_tracing(&config);

    let catalog = load_catalog(&config)?;
    let mut interactions = match &cli.script {
        Some(path) => {
            let text = read(path)?;
            crate::parse::parse_script(&text).map_err(CliError::Script)?
        }
        None => Vec::new(),
    };
    for arg in &cli.interactions {
        interactions.push(parse_interaction(arg).map_err(CliError::Script)?);
    }

    let mut app = App::new(catalog.product, config.premium);
    let outcomes = app.run(interactions);
    tracing::debug!(message = "cli.done", interactions = outcomes.len());

    if cli.json {
        let state = json!({
            "premium": app.premium(),
            "cart": app.cart(),
            "view": app.view(),
        });
        let text = serde_json::to_string_pretty(&state).map_err(CliError::Json)?;
        println!("{}", text);
    } else {
        print!("{}", app.render_text());
    }
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(config.log_filter())
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_catalog(config: &Config) -> Result<Catalog, CliError> {
    let Some(path) = &config.catalog else {
        return Ok(Catalog::sample());
    };
    let text = read(path)?;
    let loaded = crate::load(&text).map_err(CliError::Catalog)?;
    for warning in &loaded.warnings {
        tracing::warn!(
            message = "catalog.warning",
            code = %warning.code,
            detail = %warning.message
        );
    }
    Ok(loaded.catalog)
}

fn read(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses `key` or `key=value` into an interaction.
pub fn parse_interaction(arg: &str) -> Result<Interaction, ParseError> {
    let value = match arg.split_once('=') {
        None => Value::String(arg.trim().to_string()),
        Some((key, raw)) => {
            let payload = match raw.parse::<u64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::String(raw.to_string()),
            };
            let mut map = serde_json::Map::new();
            map.insert(key.trim().to_string(), payload);
            Value::Object(map)
        }
    };
    serde_json::from_value(value).map_err(|e| {
        ParseError::new(
            crate::error::ParseErrorKind::TypeMismatch,
            format!("'{}': {}", arg, e),
        )
    })
}
