//! cocktail-finder - look up cocktail recipes by ingredient
//!
//! ```bash
//! cocktail-finder --recipes-containing -i "Rye Whiskey" Lemon
//! cocktail-finder --possible-recipes -i Whiskey Syrup Bitters --catalog bar.tsv
//! ```

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use cocktail_finder::config::CONFIG_ENV;
use cocktail_finder::{
    locate_catalog, no_match_message, Catalog, FinderConfig, Query, QueryMode, Recipe,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "cocktail-finder",
    about = "Find cocktail recipes by the ingredients they use",
    version
)]
struct Cli {
    /// Show all possible recipes given a list of bar ingredients
    #[arg(long)]
    possible_recipes: bool,

    /// Show recipes containing these ingredients
    #[arg(long)]
    recipes_containing: bool,

    /// Ingredients or ingredient groups to find recipes with
    #[arg(short, long, num_args = 1.., value_name = "INGREDIENT")]
    ingredients: Vec<String>,

    /// Catalog file (tab-separated); overrides the config file
    #[arg(long)]
    catalog: Option<Utf8PathBuf>,

    /// YAML config file
    #[arg(long, env = CONFIG_ENV)]
    config: Option<Utf8PathBuf>,

    /// Print matches as JSON
    #[arg(long)]
    json: bool,

    /// Log level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    // stdout carries the results
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Utf8PathBuf>) -> Result<FinderConfig> {
    match path {
        Some(path) => FinderConfig::from_path(path)
            .with_context(|| format!("Failed to load config from {path}")),
        None => Ok(FinderConfig::default()),
    }
}

fn print_recipes(recipes: &[&Recipe], json: bool) -> Result<()> {
    if json {
        let output = serde_json::to_string_pretty(recipes).context("Failed to serialize recipes")?;
        println!("{output}");
    } else {
        for recipe in recipes {
            println!("{recipe}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    // Reject bad invocations before touching the catalog
    let mode = QueryMode::from_flags(cli.possible_recipes, cli.recipes_containing)?;
    let query = Query::new(mode, cli.ingredients)?;
    debug!(?query, "parsed query");

    let config = load_config(cli.config.as_ref())?;
    let name = cli.catalog.unwrap_or_else(|| config.catalog.clone());
    let path = locate_catalog(&config.search_dirs, &name)
        .with_context(|| format!("Could not find catalog {name}"))?;
    info!(%path, "using catalog");

    let catalog = Catalog::from_path(&path, &config.groups)
        .with_context(|| format!("Failed to load catalog {path}"))?;

    let found = query.run(&catalog);
    if found.is_empty() && !cli.json {
        println!("{}", no_match_message(&query.tokens));
        return Ok(());
    }

    print_recipes(&found, cli.json)
}
