use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_file: String,
    pub data_file: String,
    pub admin_keys: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            catalog_file: std::env::var("CATALOG_FILE")
                .unwrap_or_else(|_| "catalog.json".to_string()),
            data_file: std::env::var("DATA_FILE")
                .unwrap_or_else(|_| "submissions.csv".to_string()),
            admin_keys: std::env::var("ADMIN_KEYS").unwrap_or_default(),
        })
    }
}
