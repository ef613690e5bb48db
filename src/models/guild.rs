use super::{AllianceId, Extra, GuildId, PlayerId, PlayerInfo, Timestamp};
use serde::{Deserialize, Serialize};

/// Public profile of a guild, returned by `/guilds/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildInfo {
    #[serde(default)]
    pub id: GuildId,
    #[serde(default)]
    pub name: String,
    pub founder_id: Option<PlayerId>,
    pub founder_name: Option<String>,
    pub founded: Option<Timestamp>,
    pub alliance_id: Option<AllianceId>,
    pub alliance_name: Option<String>,
    pub alliance_tag: Option<String>,
    #[serde(rename = "killFame")]
    pub kill_fame: Option<u64>,
    pub death_fame: Option<u64>,
    pub attacks_won: Option<u64>,
    pub defenses_won: Option<u64>,
    pub member_count: Option<u32>,
}

/// A member of a guild, returned by `/guilds/{id}/members`.
///
/// Upstream sends full player profiles here; only the commonly used fields are named.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildMember {
    #[serde(default)]
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    pub avatar: Option<String>,
    pub avatar_ring: Option<String>,
    pub kill_fame: Option<u64>,
    pub death_fame: Option<u64>,
    pub fame_ratio: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Aggregated guild data, returned by `/guilds/{id}/data`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildData {
    pub guild: Option<GuildInfo>,
    pub overall: Option<GuildOverall>,
    #[serde(default)]
    pub top_players: Vec<PlayerInfo>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Lifetime totals of a guild, part of [`GuildData`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildOverall {
    pub kills: Option<u64>,
    pub gvg_kills: Option<u64>,
    pub gvg_won: Option<u64>,
    pub fame: Option<u64>,
}

/// Statistics of a guild, returned by `/guilds/{id}/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildStats {
    #[serde(rename = "killFame")]
    pub kill_fame: Option<u64>,
    pub death_fame: Option<u64>,
    pub attacks_won: Option<u64>,
    pub defenses_won: Option<u64>,
    pub member_count: Option<u32>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Kill statistics between two guilds, returned by `/guilds/{id}/fued/{rival}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildFeud {
    pub guild_id: Option<GuildId>,
    pub rival_guild_id: Option<GuildId>,
    pub kills: Option<u64>,
    pub deaths: Option<u64>,
    pub kill_fame: Option<u64>,
    pub death_fame: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_guild_info() {
        let json = r#"{
            "Id": "g1",
            "Name": "TEMPLARS_ORDER",
            "FounderName": "Founder",
            "Founded": "2018-02-14T15:40:12.532556Z",
            "AllianceTag": "TMPL",
            "killFame": 5000,
            "DeathFame": 1200,
            "MemberCount": 42
        }"#;

        let guild: GuildInfo = serde_json::from_str(json).unwrap();
        assert_eq!(guild.name, "TEMPLARS_ORDER");
        assert_eq!(guild.kill_fame, Some(5000));
        assert_eq!(guild.member_count, Some(42));
        assert!(guild.founded.is_some());
        assert!(guild.attacks_won.is_none());
    }

    #[test]
    fn guild_data_keeps_unknown_sections() {
        let json = r#"{
            "guild": { "Id": "g1", "Name": "G" },
            "overall": { "kills": 10, "gvgKills": 2, "gvgWon": 1, "fame": 99 },
            "topPlayers": [{ "Id": "p1", "Name": "Hero" }],
            "basic": { "memberCount": 3 }
        }"#;

        let data: GuildData = serde_json::from_str(json).unwrap();
        assert_eq!(data.guild.unwrap().id, "g1");
        assert_eq!(data.overall.unwrap().gvg_kills, Some(2));
        assert_eq!(data.top_players.len(), 1);
        assert_eq!(data.extra["basic"]["memberCount"], 3);
    }

    #[test]
    fn members_keep_extra_profile_fields() {
        let json = r#"[{ "Id": "p1", "Name": "Hero", "GuildName": "G", "KillFame": 1 }]"#;

        let members: Vec<GuildMember> = serde_json::from_str(json).unwrap();
        assert_eq!(members[0].kill_fame, Some(1));
        assert_eq!(members[0].extra["GuildName"], "G");
    }

    #[test]
    fn sparse_guilds_and_members_decode() {
        let members: Vec<GuildMember> = serde_json::from_str(r#"[{ "Id": "p1" }]"#).unwrap();
        assert_eq!(members[0].id, "p1");
        assert!(members[0].name.is_empty());

        let guild: GuildInfo = serde_json::from_str("{}").unwrap();
        assert!(guild.id.is_empty());
        assert!(guild.kill_fame.is_none());
    }
}
