//! Typed response payloads of the game-info API.
//!
//! Field names follow the upstream JSON, which mixes `PascalCase` and `camelCase` between
//! endpoints. Anything upstream may omit is optional, and names or IDs missing from a payload
//! decode to their empty default rather than failing the whole response.

mod battle;
mod event;
mod guild;
mod matches;
mod player;
mod ranking;
mod search;
mod status;

pub use battle::{Battle, BattleAlliance, BattleGuild, BattlePlayer};
pub use event::{Equipment, Event, Item, Participant};
pub use guild::{GuildData, GuildFeud, GuildInfo, GuildMember, GuildOverall, GuildStats};
pub use id::{AllianceId, BattleId, EventId, GuildId, MatchId, PlayerId};
pub use matches::{GuildMatch, MatchGuild};
pub use player::{Crafting, Gathering, LifetimeStatistics, PlayerInfo, PvE};
pub use ranking::{FameRanking, GuildRanking, WeaponRanking};
pub use search::{GuildSearchEntry, PlayerSearchEntry, SearchResult};
pub use status::ServerStatus;
pub use timestamp::Timestamp;

/// Fields a payload carries that its struct does not name.
pub type Extra = serde_json::Map<String, serde_json::Value>;

#[macro_use]
pub(crate) mod id {
    #[macro_export]
    macro_rules! id_type {
        (
            $(#[$meta:meta])*
            $vis:vis struct $name:ident(String);
        ) => {
            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
            #[derive(::serde::Serialize, ::serde::Deserialize)]
            #[serde(transparent)]
            $vis struct $name(String);

            impl $name {
                /// Creates a new ID from anything string-like.
                #[must_use]
                pub fn new(id: impl Into<String>) -> Self {
                    Self(id.into())
                }

                /// Returns the ID as a string slice.
                #[must_use]
                pub fn as_str(&self) -> &str {
                    &self.0
                }

                /// Consumes the ID, returning the inner string.
                #[must_use]
                pub fn into_inner(self) -> String {
                    self.0
                }
            }

            impl From<String> for $name {
                fn from(id: String) -> Self {
                    Self(id)
                }
            }

            impl From<&str> for $name {
                fn from(id: &str) -> Self {
                    Self(id.to_string())
                }
            }

            impl From<&$name> for $name {
                fn from(id: &$name) -> Self {
                    id.clone()
                }
            }

            impl From<$name> for String {
                fn from(id: $name) -> String {
                    id.0
                }
            }

            impl AsRef<str> for $name {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl PartialEq<str> for $name {
                fn eq(&self, other: &str) -> bool {
                    self.0 == other
                }
            }

            impl PartialEq<&str> for $name {
                fn eq(&self, other: &&str) -> bool {
                    self.0 == *other
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl ::std::ops::Deref for $name {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }
        };
        (
            $(#[$meta:meta])*
            $vis:vis struct $name:ident(u64);
        ) => {
            $(#[$meta])*
            #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Ord, PartialOrd, Hash)]
            #[derive(::serde::Serialize, ::serde::Deserialize)]
            #[serde(transparent)]
            $vis struct $name(u64);

            impl $name {
                /// Creates a new ID from a [`u64`].
                #[must_use]
                pub const fn new(id: u64) -> Self {
                    Self(id)
                }

                /// Returns the ID as a [`u64`].
                #[must_use]
                pub const fn get(&self) -> u64 {
                    self.0
                }
            }

            impl From<u64> for $name {
                fn from(id: u64) -> Self {
                    Self(id)
                }
            }

            impl From<$name> for u64 {
                fn from(id: $name) -> u64 {
                    id.0
                }
            }

            impl PartialEq<u64> for $name {
                fn eq(&self, other: &u64) -> bool {
                    self.0 == *other
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&self.0, f)
                }
            }

            impl ::std::ops::Deref for $name {
                type Target = u64;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }
        };
    }

    id_type! {
        /// Identifies a player. Player IDs are opaque, URL-safe strings.
        pub struct PlayerId(String);
    }

    id_type! {
        /// Identifies a guild.
        pub struct GuildId(String);
    }

    id_type! {
        /// Identifies an alliance. Upstream sends an empty string for "no alliance".
        pub struct AllianceId(String);
    }

    id_type! {
        /// Identifies a guild match.
        pub struct MatchId(String);
    }

    id_type! {
        /// Identifies a kill event.
        pub struct EventId(u64);
    }

    id_type! {
        /// Identifies a battle.
        pub struct BattleId(u64);
    }
}

/// Utility types for working with timestamps.
pub mod timestamp {
    /// The timestamp type, which is different depending on the features enabled.
    ///
    /// This is [`chrono::DateTime`] if the `chrono` feature is enabled, otherwise it is the raw
    /// ISO 8601 string sent by the API.
    #[cfg(feature = "chrono")]
    pub type Timestamp = chrono::DateTime<chrono::Utc>;
    /// The timestamp type, which is different depending on the features enabled.
    ///
    /// This is [`chrono::DateTime`] if the `chrono` feature is enabled, otherwise it is the raw
    /// ISO 8601 string sent by the API.
    #[cfg(not(feature = "chrono"))]
    pub type Timestamp = String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_ids_are_transparent() {
        let id: PlayerId = serde_json::from_str(r#""pN8sPYDPQ8WDIB1vXHuOCw""#).unwrap();
        assert_eq!(id, "pN8sPYDPQ8WDIB1vXHuOCw");
        assert_eq!(id.to_string(), "pN8sPYDPQ8WDIB1vXHuOCw");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""pN8sPYDPQ8WDIB1vXHuOCw""#);
    }

    #[test]
    fn numeric_ids_are_transparent() {
        let id: EventId = serde_json::from_str("1053216587").unwrap();
        assert_eq!(id, 1_053_216_587);
        assert_eq!(*id, 1_053_216_587);
        assert_eq!(BattleId::from(42).to_string(), "42");
    }
}
