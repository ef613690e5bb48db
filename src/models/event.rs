use super::{AllianceId, BattleId, EventId, GuildId, PlayerId, Timestamp};
use serde::{Deserialize, Serialize};

/// A kill event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    #[serde(default)]
    pub event_id: EventId,
    #[serde(default)]
    pub time_stamp: Timestamp,
    pub version: Option<u32>,
    pub killer: Option<Participant>,
    pub victim: Option<Participant>,
    pub total_victim_kill_fame: Option<u64>,
    /// Everyone credited with the kill, including the killer.
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Members of the killer's group who were present.
    #[serde(default)]
    pub group_members: Vec<Participant>,
    pub group_member_count: Option<u32>,
    #[serde(rename = "numberOfParticipants")]
    pub number_of_participants: Option<u32>,
    pub battle_id: Option<BattleId>,
    #[serde(rename = "Type")]
    pub kind: Option<String>,
}

/// A player taking part in an [`Event`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Participant {
    pub id: Option<PlayerId>,
    pub name: Option<String>,
    pub guild_id: Option<GuildId>,
    pub guild_name: Option<String>,
    pub alliance_id: Option<AllianceId>,
    pub alliance_name: Option<String>,
    pub avatar: Option<String>,
    pub avatar_ring: Option<String>,
    pub average_item_power: Option<f64>,
    pub equipment: Option<Equipment>,
    /// Slots may be empty, which upstream encodes as `null`.
    #[serde(default)]
    pub inventory: Vec<Option<Item>>,
    pub kill_fame: Option<u64>,
    pub death_fame: Option<u64>,
    pub damage_done: Option<f64>,
    pub support_healing_done: Option<f64>,
}

/// Equipped items of a [`Participant`], by slot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Equipment {
    pub main_hand: Option<Item>,
    pub off_hand: Option<Item>,
    pub head: Option<Item>,
    pub armor: Option<Item>,
    pub shoes: Option<Item>,
    pub bag: Option<Item>,
    pub cape: Option<Item>,
    pub mount: Option<Item>,
    pub potion: Option<Item>,
    pub food: Option<Item>,
}

/// An item stack.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    /// The unique item name, e.g. `T8_2H_CLAYMORE@3`.
    #[serde(rename = "Type")]
    #[serde(default)]
    pub kind: String,
    pub count: Option<u32>,
    pub quality: Option<u8>,
}
