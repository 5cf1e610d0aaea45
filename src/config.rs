//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL for CORS
    pub frontend_url: String,
    /// Path to the emission factor table document
    pub factors_path: String,
    /// Annual CO₂ sequestration per tree (kg), for offset estimates
    pub tree_co2_kg_per_year: f64,
    /// Length of the default summary window in days
    pub default_window_days: u32,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            factors_path: "data/emission_factors.json".to_string(),
            tree_co2_kg_per_year: 21.0,
            default_window_days: 7,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a sensible default; the tree constant and window
    /// length fail loudly on unparseable overrides rather than falling
    /// back silently.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            factors_path: env::var("EMISSION_FACTORS_PATH")
                .unwrap_or_else(|_| "data/emission_factors.json".to_string()),
            tree_co2_kg_per_year: match env::var("TREE_CO2_KG_PER_YEAR") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("TREE_CO2_KG_PER_YEAR"))?,
                Err(_) => 21.0,
            },
            default_window_days: match env::var("SUMMARY_WINDOW_DAYS") {
                Ok(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid("SUMMARY_WINDOW_DAYS"))?,
                Err(_) => 7,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
