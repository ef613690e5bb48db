use super::{AllianceId, Extra, GuildId, PlayerId, PlayerInfo};
use serde::{Deserialize, Serialize};

/// An entry of the player fame, guild fame or fame ratio leaderboards.
///
/// Player and guild leaderboards share this shape; `guild_*` fields describe the entry itself
/// on guild boards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FameRanking {
    pub id: Option<String>,
    pub name: Option<String>,
    pub guild_id: Option<GuildId>,
    pub guild_name: Option<String>,
    pub alliance_id: Option<AllianceId>,
    pub alliance_name: Option<String>,
    pub kill_fame: Option<u64>,
    pub death_fame: Option<u64>,
    pub fame_ratio: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// An entry of the guilds by attack or defense leaderboards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildRanking {
    pub id: Option<GuildId>,
    pub name: Option<String>,
    pub alliance_id: Option<AllianceId>,
    pub alliance_name: Option<String>,
    pub alliance_tag: Option<String>,
    pub attacks_won: Option<u64>,
    pub defenses_won: Option<u64>,
    #[serde(rename = "killFame")]
    pub kill_fame: Option<u64>,
    pub death_fame: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// An entry of the player weapon fame leaderboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WeaponRanking {
    pub player: Option<PlayerInfo>,
    pub player_id: Option<PlayerId>,
    pub fame: Option<u64>,
    pub weapon_category: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_leaderboards() {
        let fame: Vec<FameRanking> =
            serde_json::from_str(r#"[{ "Id": "p1", "Name": "Hero", "KillFame": 9, "FameRatio": 1.5 }]"#)
                .unwrap();
        assert_eq!(fame[0].fame_ratio, Some(1.5));

        let guilds: Vec<GuildRanking> =
            serde_json::from_str(r#"[{ "Id": "g1", "Name": "G", "AttacksWon": 4 }]"#).unwrap();
        assert_eq!(guilds[0].attacks_won, Some(4));

        let weapons: Vec<WeaponRanking> = serde_json::from_str(
            r#"[{ "Player": { "Id": "p1", "Name": "Hero" }, "Fame": 77, "Rank": 1 }]"#,
        )
        .unwrap();
        assert_eq!(weapons[0].player.as_ref().unwrap().name, "Hero");
        assert_eq!(weapons[0].fame, Some(77));
        assert_eq!(weapons[0].extra["Rank"], 1);
    }
}
