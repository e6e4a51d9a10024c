use anyhow::{ensure, Context};
use serde::Deserialize;
use std::path::PathBuf;
use std::{env, fs};

const DEFAULT_MAX_POOL_SIZE: u32 = 5;

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    pub database_file: PathBuf,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
}

fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(&path)
            .with_context(|| format!("Unable to read config file {}", path.display()))?;
        Config::from_toml(&config)
    }

    pub fn from_toml(config: &str) -> Result<Config, anyhow::Error> {
        let config: Config = toml::from_str(config).context("Unable to parse config")?;
        config.validate()
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        let database_file = PathBuf::from(read_env("DATABASE_FILE")?);
        let max_pool_size = match env::var("MAX_POOL_SIZE") {
            Ok(size) => size
                .parse()
                .context("Unable to parse MAX_POOL_SIZE value")?,
            Err(_) => DEFAULT_MAX_POOL_SIZE,
        };

        let config = Config {
            database_file,
            max_pool_size,
        };
        config.validate()
    }

    fn validate(self) -> Result<Config, anyhow::Error> {
        ensure!(self.max_pool_size > 0, "max_pool_size must be at least 1");
        Ok(self)
    }
}

fn read_env(key: &str) -> Result<String, anyhow::Error> {
    env::var(key).with_context(|| format!("Unable to read env var: {}", key))
}
