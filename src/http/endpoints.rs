//! Every REST endpoint of the game-info API as a type.
//!
//! Each endpoint carries its path parameters as public fields and knows its query and
//! response types, so it can be sent through [`Http::request`][super::Http::request].

use super::query::{BattlesQuery, PageQuery, RangedQuery, SearchQuery};
use crate::models::{
    Battle, Event, EventId, FameRanking, GuildData, GuildFeud, GuildId, GuildInfo, GuildMatch,
    GuildMember, GuildRanking, GuildStats, MatchId, PlayerId, PlayerInfo, SearchResult,
    WeaponRanking,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;

/// Percent-encodes a value for use as a single path segment.
fn segment(value: &impl Display) -> String {
    url::form_urlencoded::byte_serialize(value.to_string().as_bytes())
        .map(|chunk| if chunk == "+" { "%20" } else { chunk })
        .collect()
}

macro_rules! query_type {
    () => { () };
    ($query:ty) => { $query };
}

macro_rules! endpoints {
    ($(
        $(#[$doc:meta])*
        $name:ident $({ $($params:ident: $ty:ty),+ })? $(? $query:ty)? => $response:ty
            = $method:ident $path:literal;
    )+) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Debug, Default, PartialEq, Eq)]
            pub struct $name { $($(pub $params: $ty),+)? }

            impl Endpoint for $name {
                type Query = query_type!($($query)?);
                type Response = $response;

                const METHOD: reqwest::Method = reqwest::Method::$method;
                const PATH: &'static str = $path;

                #[inline]
                fn path(&self) -> String {
                    format!($path, $($($params = segment(&self.$params)),+)?)
                }
            }
        )+
    };
}

endpoints! {
    // Search
    /// Searches players and guilds by name.
    Search ? SearchQuery => SearchResult = GET "/search";
    // Players
    GetPlayer { player_id: PlayerId } => PlayerInfo = GET "/players/{player_id}";
    GetPlayerTopKills { player_id: PlayerId } ? RangedQuery => Vec<Event>
        = GET "/players/{player_id}/topkills";
    GetPlayerSoloKills { player_id: PlayerId } ? RangedQuery => Vec<Event>
        = GET "/players/{player_id}/solokills";
    GetPlayerDeaths { player_id: PlayerId } => Vec<Event> = GET "/players/{player_id}/deaths";
    // Guilds
    GetGuild { guild_id: GuildId } => GuildInfo = GET "/guilds/{guild_id}";
    GetGuildData { guild_id: GuildId } => GuildData = GET "/guilds/{guild_id}/data";
    GetGuildTopKills { guild_id: GuildId } ? RangedQuery => Vec<Event>
        = GET "/guilds/{guild_id}/top";
    GetGuildStats { guild_id: GuildId } => GuildStats = GET "/guilds/{guild_id}/stats";
    GetGuildMembers { guild_id: GuildId } => Vec<GuildMember> = GET "/guilds/{guild_id}/members";
    /// The path is misspelled upstream.
    GetGuildFeud { guild_id: GuildId, rival_guild_id: GuildId } => GuildFeud
        = GET "/guilds/{guild_id}/fued/{rival_guild_id}";
    // Events
    GetEvent { event_id: EventId } => Event = GET "/events/{event_id}";
    GetRecentEvents ? PageQuery => Vec<Event> = GET "/events";
    GetEventsBetween { start: EventId, end: EventId } => Vec<Event>
        = GET "/events/{start}/history/{end}";
    // Guild matches
    GetGuildMatch { match_id: MatchId } ? PageQuery => GuildMatch = GET "/guildmatches/{match_id}";
    GetGuildMatchesTop => Vec<GuildMatch> = GET "/guildmatches/top";
    GetGuildMatchesNext ? PageQuery => Vec<GuildMatch> = GET "/guildmatches/next";
    GetGuildMatchesPast ? PageQuery => Vec<GuildMatch> = GET "/guildmatches/past";
    GetGuildMatchesHistory { guild_id: GuildId, rival_guild_id: GuildId } => Vec<GuildMatch>
        = GET "/guildmatches/history/{guild_id}/{rival_guild_id}";
    // Leaderboards
    GetPlayerFame ? RangedQuery => Vec<FameRanking> = GET "/playerfame";
    GetGuildFame ? RangedQuery => Vec<FameRanking> = GET "/guildfame";
    GetFameRatio ? RangedQuery => Vec<FameRanking> = GET "/fameratio";
    GetTopGuildsByAttack ? RangedQuery => Vec<GuildRanking> = GET "/topguildsbyattack";
    GetTopGuildsByDefense ? RangedQuery => Vec<GuildRanking> = GET "/topguildsbydefense";
    GetPlayerWeaponFame ? RangedQuery => Vec<WeaponRanking> = GET "/playerweaponfame";
    // Battles
    GetBattles ? BattlesQuery => Vec<Battle> = GET "/battles";
    // Items
    GetWeaponCategories => Vec<String> = GET "/items/_weaponCategories";
}

/// Any REST endpoint.
pub trait Endpoint {
    /// The query parameters the endpoint accepts, `()` if none.
    type Query: Serialize + Send;
    /// The decoded response body.
    type Response: DeserializeOwned;

    /// The HTTP method of the endpoint.
    const METHOD: reqwest::Method;
    /// The unformatted path of the endpoint.
    const PATH: &'static str;

    /// Returns the formatted path of the endpoint as a string, excluding the base URL.
    fn path(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_parameters_are_interpolated() {
        let endpoint = GetGuildFeud {
            guild_id: "g1".into(),
            rival_guild_id: "g2".into(),
        };
        assert_eq!(endpoint.path(), "/guilds/g1/fued/g2");

        let endpoint = GetEventsBetween {
            start: 10u64.into(),
            end: 20u64.into(),
        };
        assert_eq!(endpoint.path(), "/events/10/history/20");
    }

    #[test]
    fn path_parameters_are_percent_encoded() {
        let endpoint = GetPlayer {
            player_id: "a/b?c#d e".into(),
        };
        assert_eq!(endpoint.path(), "/players/a%2Fb%3Fc%23d%20e");

        let endpoint = GetGuildMembers {
            guild_id: "Ab-9_x.Y".into(),
        };
        assert_eq!(endpoint.path(), "/guilds/Ab-9_x.Y/members");
    }

    #[test]
    fn parameterless_paths_are_fixed() {
        assert_eq!(GetWeaponCategories {}.path(), "/items/_weaponCategories");
        assert_eq!(GetBattles {}.path(), GetBattles::PATH);
        assert_eq!(GetGuildMatchesTop::METHOD, reqwest::Method::GET);
    }
}
