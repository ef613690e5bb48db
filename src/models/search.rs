use super::{AllianceId, GuildId, PlayerId};
use serde::{Deserialize, Serialize};

/// The result of a search by name, split into matching players and guilds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Players whose name matches the query, best match first.
    #[serde(default)]
    pub players: Vec<PlayerSearchEntry>,
    /// Guilds whose name matches the query, best match first.
    #[serde(default)]
    pub guilds: Vec<GuildSearchEntry>,
}

/// A player found by [`Client::search`][crate::Client::search].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerSearchEntry {
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
}

/// A guild found by [`Client::search`][crate::Client::search].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GuildSearchEntry {
    #[serde(default)]
    pub id: GuildId,
    #[serde(default)]
    pub name: String,
    pub alliance_id: Option<AllianceId>,
    pub alliance_name: Option<String>,
    /// Upstream spells this one in camel case.
    #[serde(rename = "killFame")]
    pub kill_fame: Option<u64>,
    pub death_fame: Option<u64>,
}
