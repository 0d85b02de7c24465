use crate::error::AppError;
use std::env;

// Account-V1 goes through the continental routing host, not the platform
// host. Always `americas`, whatever RIOT_REGION says.
pub const ACCOUNT_ROUTING_URL: &str = "https://americas.api.riotgames.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    pub account_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key = env::var("RIOT_API_KEY").map_err(|_| {
            AppError::ConfigError(
                "RIOT_API_KEY not found in environment or .env file".to_string(),
            )
        })?;

        let region = env::var("RIOT_REGION").unwrap_or_else(|_| "na1".to_string());

        Ok(Config::new(api_key, &region))
    }

    pub fn new(api_key: String, region: &str) -> Self {
        Config {
            api_key,
            base_url: format!("https://{}.api.riotgames.com", region),
            account_url: ACCOUNT_ROUTING_URL.to_string(),
        }
    }
}
