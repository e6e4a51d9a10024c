#[macro_use]
extern crate tracing;

mod config;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;

use budget_repo::schema::SchemaRepo;
use budget_repo::sqlx_repo::SQLxRepo;

use crate::config::Config;

#[actix_rt::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = registry::Registry::default()
        .with(LevelFilter::INFO)
        .with(tracing_subscriber::fmt::Layer::default());
    tracing::subscriber::set_global_default(subscriber).context("Unable to set up tracing")?;
    info!("tracing initialized");

    init_db().await
}

/// Recreates both tables from scratch. Existing rows are discarded.
async fn init_db() -> Result<(), anyhow::Error> {
    let config = match get_config_file() {
        Some(config_path) => {
            info!(config_path = %config_path.display(), "Loading config file");
            Config::from_file(config_path)?
        }
        None => {
            info!("No config file found, reading config from environment");
            Config::from_env()?
        }
    };

    if let Some(parent) = config.database_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create directory {}", parent.display())
            })?;
        }
    }

    let pool =
        budget_repo::sqlx_repo::connect(&config.database_file, config.max_pool_size).await?;
    let schema_repo = SQLxRepo::new(pool);
    warn!(database_file = %config.database_file.display(), "Dropping existing tables");
    schema_repo.reset_schema().await?;

    info!("Database initialized");
    Ok(())
}

fn get_config_file() -> Option<PathBuf> {
    let config_current_dir = PathBuf::from("config.toml");
    if config_current_dir.exists() {
        return Some(config_current_dir);
    }
    if let Ok(config_env) = std::env::var("CONFIGURATION_DIRECTORY") {
        let config_path = PathBuf::from(config_env).join("config.toml");
        if config_path.exists() {
            return Some(config_path);
        }
    }

    None
}
