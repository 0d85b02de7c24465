mod api;
mod config;
mod display;
mod error;

use api::client::RiotApiClient;
use api::endpoints::SummonerLookup;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{display_error, print_summary};
use error::AppError;

#[derive(Parser, Debug)]
#[command(name = "summoner-lookup")]
#[command(about = "Obtain summoner information using the Riot API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up a summoner by display name
    SummonerName {
        /// Summoner display name
        name: String,
    },

    /// Look up a summoner by account ID
    AccountId {
        /// Encrypted account ID
        account_id: String,
    },

    /// Look up a summoner by PUUID
    Puuid {
        /// Player universal unique identifier
        puuid: String,
    },

    /// Look up a summoner by summoner ID
    SummonerId {
        /// Encrypted summoner ID
        summoner_id: String,
    },

    /// Resolve a Riot ID (name + tag) to a PUUID
    RiotId {
        /// Riot game name
        game_name: String,

        /// Riot tag line
        tag_line: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli, config) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: Config) -> Result<(), AppError> {
    let client = RiotApiClient::new(config);

    let lookup = match cli.command {
        Command::SummonerName { name } => SummonerLookup::ByName(name),
        Command::AccountId { account_id } => SummonerLookup::ByAccountId(account_id),
        Command::Puuid { puuid } => SummonerLookup::ByPuuid(puuid),
        Command::SummonerId { summoner_id } => SummonerLookup::BySummonerId(summoner_id),
        Command::RiotId {
            game_name,
            tag_line,
        } => {
            let puuid = client.get_puuid_by_riot_id(&game_name, &tag_line)?;
            println!("The puuid of {} is: {}", game_name, puuid);
            return Ok(());
        }
    };

    let record = client.get_summoner(&lookup)?;
    print_summary(&record)
}
