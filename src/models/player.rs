use super::{AllianceId, GuildId, PlayerId};
use serde::{Deserialize, Serialize};

/// Public profile of a player, returned by `/players/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerInfo {
    #[serde(default)]
    pub id: PlayerId,
    #[serde(default)]
    pub name: String,
    pub guild_id: Option<GuildId>,
    pub guild_name: Option<String>,
    pub alliance_id: Option<AllianceId>,
    pub alliance_name: Option<String>,
    pub avatar: Option<String>,
    pub avatar_ring: Option<String>,
    pub kill_fame: Option<u64>,
    pub death_fame: Option<u64>,
    pub fame_ratio: Option<f64>,
    pub lifetime_statistics: Option<LifetimeStatistics>,
}

/// Lifetime fame totals of a player.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifetimeStatistics {
    #[serde(rename = "PvE")]
    pub pve: Option<PvE>,
    pub gathering: Option<Gathering>,
    pub crafting: Option<Crafting>,
    pub fishing_fame: Option<u64>,
    pub farming_fame: Option<u64>,
}

/// PvE fame, by zone.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PvE {
    #[serde(default)]
    pub total: u64,
    pub royal: Option<u64>,
    pub outlands: Option<u64>,
    pub avalon: Option<u64>,
    pub hellgate: Option<u64>,
}

/// Gathering fame, by resource.
///
/// Upstream nests further breakdowns under each resource, so values are kept as raw JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Gathering {
    pub fiber: Option<serde_json::Value>,
    pub hide: Option<serde_json::Value>,
    pub ore: Option<serde_json::Value>,
    pub rock: Option<serde_json::Value>,
    pub wood: Option<serde_json::Value>,
    pub all: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Crafting {
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_player() {
        let json = r#"{
            "Id": "p1",
            "Name": "Hero",
            "KillFame": 100,
            "FameRatio": 2.5,
            "LifetimeStatistics": {
                "PvE": { "Total": 9000, "Royal": 10 },
                "Gathering": { "Fiber": { "Total": 3 } },
                "FishingFame": 12
            }
        }"#;

        let player: PlayerInfo = serde_json::from_str(json).unwrap();
        assert_eq!(player.id, "p1");
        assert_eq!(player.fame_ratio, Some(2.5));
        let stats = player.lifetime_statistics.unwrap();
        assert_eq!(stats.pve.as_ref().map(|pve| pve.total), Some(9000));
        assert!(stats.gathering.unwrap().fiber.is_some());
        assert_eq!(stats.fishing_fame, Some(12));
        assert!(stats.crafting.is_none());
    }

    #[test]
    fn player_without_name_decodes() {
        let player: PlayerInfo = serde_json::from_str(r#"{ "Id": "p1" }"#).unwrap();
        assert_eq!(player.id, "p1");
        assert!(player.name.is_empty());
    }
}
