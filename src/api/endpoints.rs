// Summoner-V4 URL builders. Identifiers are percent-encoded before being
// interpolated into a path segment.

use urlencoding::encode;

/// One lookup per Summoner-V4 route, carrying the identifier it searches by.
#[derive(Debug, Clone)]
pub enum SummonerLookup {
    ByName(String),
    ByAccountId(String),
    ByPuuid(String),
    BySummonerId(String),
}

impl SummonerLookup {
    /// Path under the regional host for this lookup.
    pub fn path(&self) -> String {
        match self {
            SummonerLookup::ByName(name) => {
                format!("/lol/summoner/v4/summoners/by-name/{}", encode(name))
            }
            SummonerLookup::ByAccountId(account_id) => {
                format!("/lol/summoner/v4/summoners/by-account/{}", encode(account_id))
            }
            SummonerLookup::ByPuuid(puuid) => {
                format!("/lol/summoner/v4/summoners/by-puuid/{}", encode(puuid))
            }
            SummonerLookup::BySummonerId(summoner_id) => {
                format!("/lol/summoner/v4/summoners/{}", encode(summoner_id))
            }
        }
    }
}

/// Account-V1 path resolving a Riot ID (game name + tag line) to an account.
pub fn account_by_riot_id_path(game_name: &str, tag_line: &str) -> String {
    format!(
        "/riot/account/v1/accounts/by-riot-id/{}/{}",
        encode(game_name),
        encode(tag_line)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_lookup_builds_its_route() {
        let cases = [
            (
                SummonerLookup::ByName("Faker".to_string()),
                "/lol/summoner/v4/summoners/by-name/Faker",
            ),
            (
                SummonerLookup::ByAccountId("b7gImwtB".to_string()),
                "/lol/summoner/v4/summoners/by-account/b7gImwtB",
            ),
            (
                SummonerLookup::ByPuuid("hi7994wx".to_string()),
                "/lol/summoner/v4/summoners/by-puuid/hi7994wx",
            ),
            (
                SummonerLookup::BySummonerId("91KHQCxV".to_string()),
                "/lol/summoner/v4/summoners/91KHQCxV",
            ),
        ];

        for (lookup, expected) in cases {
            assert_eq!(lookup.path(), expected);
        }
    }

    #[test]
    fn identifiers_are_percent_encoded() {
        let lookup = SummonerLookup::ByName("Hide on bush".to_string());
        assert_eq!(
            lookup.path(),
            "/lol/summoner/v4/summoners/by-name/Hide%20on%20bush"
        );

        assert_eq!(
            account_by_riot_id_path("Hide on bush", "KR#1"),
            "/riot/account/v1/accounts/by-riot-id/Hide%20on%20bush/KR%231"
        );
    }
}
