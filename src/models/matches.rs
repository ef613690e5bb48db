use super::{AllianceId, Extra, GuildId, MatchId, Timestamp};
use serde::{Deserialize, Serialize};

/// A guild-vs-guild match, returned by the `/guildmatches` endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildMatch {
    pub match_id: Option<MatchId>,
    pub match_type: Option<String>,
    pub start_time: Option<Timestamp>,
    pub status: Option<String>,
    pub attacker: Option<MatchGuild>,
    pub defender: Option<MatchGuild>,
    pub winner: Option<GuildId>,
    pub attacker_score: Option<u32>,
    pub defender_score: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One side of a [`GuildMatch`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchGuild {
    pub guild_id: Option<GuildId>,
    pub guild_name: Option<String>,
    pub alliance_id: Option<AllianceId>,
    pub alliance_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_retained() {
        let json = r#"{ "MatchId": "m1", "Attacker": { "GuildName": "A" }, "Territory": "T" }"#;

        let gvg: GuildMatch = serde_json::from_str(json).unwrap();
        assert_eq!(gvg.match_id.unwrap(), "m1");
        assert_eq!(gvg.attacker.unwrap().guild_name.as_deref(), Some("A"));
        assert_eq!(gvg.extra["Territory"], "T");
    }
}
