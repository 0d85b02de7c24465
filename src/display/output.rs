use crate::api::models::{require_field, SummonerRecord};
use crate::error::AppError;
use colored::*;
use serde_json::Value;

/// The three summary lines for a summoner record, in display order.
pub fn summary_lines(record: &SummonerRecord) -> Result<[String; 3], AppError> {
    let name = require_field(record, "name")?;
    let level = require_field(record, "summonerLevel")?;
    let id = require_field(record, "id")?;

    Ok([
        format!("Summoner's name: {}", field_text(name)),
        format!("Summoner's level: {}", field_text(level)),
        format!("Summoner's ID: {}", field_text(id)),
    ])
}

pub fn print_summary(record: &SummonerRecord) -> Result<(), AppError> {
    for line in summary_lines(record)? {
        println!("{}", line);
    }
    Ok(())
}

// JSON strings render bare, everything else in its JSON form.
fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}
