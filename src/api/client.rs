use crate::config::Config;
use crate::error::AppError;

use super::endpoints::{account_by_riot_id_path, SummonerLookup};
use super::models::{require_field, SummonerRecord};

pub struct RiotApiClient {
    config: Config,
}

impl RiotApiClient {
    pub fn new(config: Config) -> Self {
        RiotApiClient { config }
    }

    /// One blocking GET against `url`, authenticated with the configured
    /// API key. Failures are logged here and handed back to the caller as
    /// is; there is no retry.
    fn fetch(&self, url: &str) -> Result<SummonerRecord, AppError> {
        let response = ureq::get(url)
            .set("X-Riot-Token", &self.config.api_key)
            .call();

        match response {
            Ok(resp) => resp
                .into_json::<SummonerRecord>()
                .map_err(|e| AppError::JsonError(e.to_string())),
            Err(ureq::Error::Status(status, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                eprintln!("HTTP error occurred: status {} for {}", status, url);
                Err(AppError::HttpError { status, body })
            }
            Err(e) => {
                eprintln!("Request error occurred: {}", e);
                Err(AppError::RequestError(e.to_string()))
            }
        }
    }

    /// Fetches the summoner record for any of the Summoner-V4 routes and
    /// returns the response body unmodified.
    pub fn get_summoner(&self, lookup: &SummonerLookup) -> Result<SummonerRecord, AppError> {
        let url = format!("{}{}", self.config.base_url, lookup.path());
        self.fetch(&url)
    }

    /// Resolves a Riot ID (game name + tag line) to a PUUID via Account-V1.
    pub fn get_puuid_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> Result<String, AppError> {
        let url = format!(
            "{}{}",
            self.config.account_url,
            account_by_riot_id_path(game_name, tag_line)
        );

        let account = self.fetch(&url)?;
        let puuid = require_field(&account, "puuid")?
            .as_str()
            .ok_or_else(|| AppError::MissingFieldError("puuid".to_string()))?;

        Ok(puuid.to_string())
    }
}
