use crate::error::AppError;
use serde_json::{Map, Value};

/// Raw summoner record as the API returns it. The API promises `id`,
/// `accountId`, `puuid`, `profileIconId`, `revisionDate`, `summonerLevel`
/// and `name`; nothing here validates that. The record is passed through
/// untouched and fields are only checked at the point of use.
pub type SummonerRecord = Map<String, Value>;

pub fn require_field<'a>(record: &'a SummonerRecord, field: &str) -> Result<&'a Value, AppError> {
    record
        .get(field)
        .ok_or_else(|| AppError::MissingFieldError(field.to_string()))
}
