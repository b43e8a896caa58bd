// src/config.rs
use crate::domain::pricing::DiscountBasis;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    discount_basis: DiscountBasis,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://blog.db?mode=rwc".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible
    /// defaults for optional values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());

        let discount_basis = match env::var("PRICE_DISCOUNT_BASIS") {
            Ok(value) => value
                .parse::<DiscountBasis>()
                .map_err(|err| ConfigError::Invalid(err.to_string()))?,
            Err(_) => DiscountBasis::default(),
        };

        Ok(Self {
            database_url,
            discount_basis,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn discount_basis(&self) -> DiscountBasis {
        self.discount_basis
    }
}
