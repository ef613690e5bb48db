use super::{AllianceId, BattleId, GuildId, PlayerId, Timestamp};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A battle, returned by `/battles`.
///
/// Participants are keyed by their ID, as upstream sends them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Battle {
    #[serde(default)]
    pub id: BattleId,
    pub name: Option<String>,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    pub total_fame: Option<u64>,
    pub total_kills: Option<u64>,
    #[serde(default)]
    pub players: HashMap<String, BattlePlayer>,
    #[serde(default)]
    pub guilds: HashMap<String, BattleGuild>,
    #[serde(default)]
    pub alliances: HashMap<String, BattleAlliance>,
}

impl Battle {
    /// Returns the players of this battle sorted by kill fame, highest first.
    #[must_use]
    pub fn players_by_kill_fame(&self) -> Vec<&BattlePlayer> {
        let mut players = self.players.values().collect::<Vec<_>>();
        players.sort_by(|a, b| b.kill_fame.cmp(&a.kill_fame));
        players
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattlePlayer {
    #[serde(default)]
    pub id: PlayerId,
    pub name: Option<String>,
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub kill_fame: Option<u64>,
    pub guild_id: Option<GuildId>,
    pub guild_name: Option<String>,
    pub alliance_id: Option<AllianceId>,
    pub alliance_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleGuild {
    #[serde(default)]
    pub id: GuildId,
    pub name: Option<String>,
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub kill_fame: Option<u64>,
    pub alliance: Option<String>,
    pub alliance_id: Option<AllianceId>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleAlliance {
    #[serde(default)]
    pub id: AllianceId,
    pub name: Option<String>,
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub kill_fame: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_battle_and_ranks_players() {
        let json = r#"{
            "id": 981234,
            "startTime": "2024-05-01T12:00:00Z",
            "totalFame": 1000,
            "totalKills": 3,
            "players": {
                "a": { "id": "a", "name": "Low", "killFame": 10 },
                "b": { "id": "b", "name": "High", "killFame": 900, "guildName": "G" }
            },
            "guilds": { "g": { "id": "g", "name": "G", "kills": 3 } },
            "alliances": {}
        }"#;

        let battle: Battle = serde_json::from_str(json).unwrap();
        assert_eq!(battle.id, 981_234);
        assert!(battle.end_time.is_none());
        assert_eq!(battle.guilds["g"].kills, Some(3));

        let ranked = battle.players_by_kill_fame();
        assert_eq!(ranked[0].name.as_deref(), Some("High"));
        assert_eq!(ranked[1].name.as_deref(), Some("Low"));
    }

    #[test]
    fn battle_entries_without_ids_decode() {
        let json = r#"{ "players": { "a": { "name": "Anon" } }, "alliances": { "x": {} } }"#;

        let battle: Battle = serde_json::from_str(json).unwrap();
        assert_eq!(battle.id, 0);
        assert!(battle.players["a"].id.is_empty());
        assert!(battle.alliances["x"].id.is_empty());
    }
}
