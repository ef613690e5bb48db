//! Interact with the game-info API using the client module.

use crate::error::EntityKind;
use crate::http::endpoints::{self, Endpoint};
use crate::http::query::{BattlesQuery, Page, PageQuery, Range, RangedQuery, SearchQuery, Sort};
use crate::http::{ApiUri, Http, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::models::{
    Battle, Event, EventId, FameRanking, GuildData, GuildFeud, GuildId, GuildInfo, GuildMatch,
    GuildMember, GuildRanking, GuildStats, MatchId, PlayerId, PlayerInfo, SearchResult,
    ServerStatus, WeaponRanking,
};
use crate::{Error, Result, Server, StatusEnvironment};
use std::sync::Arc;
use std::time::Duration;

/// Configures options for a [`Client`].
#[derive(Clone, Debug)]
#[must_use = "must call `.into_client()` to build a `Client`"]
pub struct ClientOptions {
    /// The regional server to query.
    pub server: Server,
    /// Overrides the base URL of `server`, e.g. to go through a proxy.
    pub base_url: Option<String>,
    /// The timeout applied to every game-info request. Defaults to 10 seconds.
    pub timeout: Duration,
    /// The user agent to send. Defaults to `albion/<version>`.
    pub user_agent: String,
    /// Overrides the hosts status files are read from. See [`Http::with_options`].
    pub status_root: Option<String>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            server: Server::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            status_root: None,
        }
    }
}

impl ClientOptions {
    /// Creates a new set of client options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the server to query.
    #[inline]
    pub const fn server(mut self, server: Server) -> Self {
        self.server = server;
        self
    }

    /// Sets a custom base URL, replacing the server's official one.
    #[inline]
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = Some(base_url.as_ref().to_string());
        self
    }

    /// Sets the per-request timeout.
    #[inline]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[inline]
    pub fn user_agent(mut self, user_agent: impl AsRef<str>) -> Self {
        self.user_agent = user_agent.as_ref().to_string();
        self
    }

    /// Sets the root URL status files are read from.
    #[inline]
    pub fn status_root(mut self, status_root: impl AsRef<str>) -> Self {
        self.status_root = Some(status_root.as_ref().to_string());
        self
    }

    /// Builds a new [`Client`] with these options.
    pub fn into_client(self) -> Result<Client> {
        Client::from_options(self)
    }
}

/// A typed client for the Albion Online game-info API.
///
/// Every method issues exactly one GET request (two for the name lookups) and returns the
/// decoded body. The client is cheap to clone and can be shared between tasks.
///
/// # Example
/// ```no_run
/// use albion::{Client, Page, Range};
///
/// #[tokio::main]
/// async fn main() -> albion::Result<()> {
///     let client = Client::from_server_name("europe")?;
///     let guild_id = client.get_guild_id("TEMPLARS_ORDER").await?;
///     let kills = client
///         .get_guild_top_kills(guild_id, Page::default(), Some(Range::Month))
///         .await?;
///     println!("{} top kills this month", kills.len());
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    /// The HTTP client used to make requests to the REST API.
    pub http: Arc<Http>,
    server: Server,
}

impl Client {
    /// Creates a new client for the default server (Americas).
    pub fn new() -> Result<Self> {
        Self::from_options(ClientOptions::new())
    }

    /// Creates a new client for the given server.
    pub fn from_server(server: Server) -> Result<Self> {
        Self::from_options(ClientOptions::new().server(server))
    }

    /// Creates a new client for the server with the given key (`americas`, `europe` or `asia`).
    ///
    /// Fails with [`Error::InvalidServer`] for any other key.
    pub fn from_server_name(name: &str) -> Result<Self> {
        Self::from_server(name.parse()?)
    }

    /// Creates a new client with the given options.
    pub fn from_options(options: ClientOptions) -> Result<Self> {
        let uri = match options.base_url.as_deref() {
            Some(base_url) => ApiUri::Custom(base_url),
            None => ApiUri::Server(options.server),
        };
        let http = Http::with_options(
            uri,
            options.timeout,
            &options.user_agent,
            options.status_root.as_deref(),
        )?;

        Ok(Self {
            http: Arc::new(http),
            server: options.server,
        })
    }

    /// Returns the server this client was configured for.
    #[inline]
    #[must_use]
    pub const fn server(&self) -> Server {
        self.server
    }

    /// Returns the base URL every request is sent relative to.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    async fn get<E>(&self, endpoint: E) -> Result<E::Response>
    where
        E: Endpoint + Send + 'static,
        E::Response: Send,
    {
        self.http.request(endpoint).await
    }

    async fn get_with<E>(&self, endpoint: E, query: E::Query) -> Result<E::Response>
    where
        E: Endpoint + Send + 'static,
        E::Response: Send,
    {
        self.http.request(endpoint).query(query).await
    }

    /// Searches players and guilds by name.
    pub async fn search(&self, query: impl AsRef<str>) -> Result<SearchResult> {
        let query = SearchQuery {
            q: query.as_ref().to_string(),
        };
        self.get_with(endpoints::Search {}, query).await
    }

    /// Returns the ID of the first player found when searching for `name`.
    ///
    /// Fails with [`Error::NotFound`] if the search returns no players.
    pub async fn get_player_id(&self, name: impl AsRef<str>) -> Result<PlayerId> {
        let name = name.as_ref();
        let result = self.search(name).await?;

        result
            .players
            .into_iter()
            .next()
            .map(|player| player.id)
            .ok_or_else(|| not_found(EntityKind::Player, name))
    }

    /// Returns the profile of a player.
    pub async fn get_player_info(&self, player_id: impl Into<PlayerId>) -> Result<PlayerInfo> {
        self.get(endpoints::GetPlayer {
            player_id: player_id.into(),
        })
        .await
    }

    /// Returns the top kills of a player.
    ///
    /// The usual query is `Page::default()` with `Some(Range::Week)`. A `None` range is left
    /// out of the request, which is also what happens to a range parsed with [`Range::lenient`]
    /// from an unrecognized string.
    pub async fn get_player_topkills(
        &self,
        player_id: impl Into<PlayerId>,
        page: Page,
        range: Option<Range>,
    ) -> Result<Vec<Event>> {
        let endpoint = endpoints::GetPlayerTopKills {
            player_id: player_id.into(),
        };
        self.get_with(endpoint, RangedQuery::new(page, range)).await
    }

    /// Returns the solo kills of a player.
    pub async fn get_player_solokills(
        &self,
        player_id: impl Into<PlayerId>,
        page: Page,
        range: Option<Range>,
    ) -> Result<Vec<Event>> {
        let endpoint = endpoints::GetPlayerSoloKills {
            player_id: player_id.into(),
        };
        self.get_with(endpoint, RangedQuery::new(page, range)).await
    }

    /// Returns the recent deaths of a player.
    pub async fn get_player_deaths(&self, player_id: impl Into<PlayerId>) -> Result<Vec<Event>> {
        self.get(endpoints::GetPlayerDeaths {
            player_id: player_id.into(),
        })
        .await
    }

    /// Returns the ID of the first guild found when searching for `name`.
    ///
    /// Fails with [`Error::NotFound`] if the search returns no guilds.
    pub async fn get_guild_id(&self, name: impl AsRef<str>) -> Result<GuildId> {
        let name = name.as_ref();
        let result = self.search(name).await?;

        result
            .guilds
            .into_iter()
            .next()
            .map(|guild| guild.id)
            .ok_or_else(|| not_found(EntityKind::Guild, name))
    }

    /// Returns the profile of a guild.
    pub async fn get_guild_info(&self, guild_id: impl Into<GuildId>) -> Result<GuildInfo> {
        self.get(endpoints::GetGuild {
            guild_id: guild_id.into(),
        })
        .await
    }

    /// Returns aggregated guild data: profile, lifetime totals and top players.
    pub async fn get_guild_data(&self, guild_id: impl Into<GuildId>) -> Result<GuildData> {
        self.get(endpoints::GetGuildData {
            guild_id: guild_id.into(),
        })
        .await
    }

    /// Returns the top kills of a guild's members.
    pub async fn get_guild_top_kills(
        &self,
        guild_id: impl Into<GuildId>,
        page: Page,
        range: Option<Range>,
    ) -> Result<Vec<Event>> {
        let endpoint = endpoints::GetGuildTopKills {
            guild_id: guild_id.into(),
        };
        self.get_with(endpoint, RangedQuery::new(page, range)).await
    }

    /// Returns the kill and fame statistics of a guild.
    pub async fn get_guild_stats(&self, guild_id: impl Into<GuildId>) -> Result<GuildStats> {
        self.get(endpoints::GetGuildStats {
            guild_id: guild_id.into(),
        })
        .await
    }

    /// Returns the members of a guild.
    pub async fn get_guild_members(&self, guild_id: impl Into<GuildId>) -> Result<Vec<GuildMember>> {
        self.get(endpoints::GetGuildMembers {
            guild_id: guild_id.into(),
        })
        .await
    }

    /// Returns kill statistics between two guilds.
    pub async fn get_guild_feud(
        &self,
        guild_id: impl Into<GuildId>,
        rival_guild_id: impl Into<GuildId>,
    ) -> Result<GuildFeud> {
        self.get(endpoints::GetGuildFeud {
            guild_id: guild_id.into(),
            rival_guild_id: rival_guild_id.into(),
        })
        .await
    }

    /// Returns the status of a game environment.
    ///
    /// Accepts a [`StatusEnvironment`] or its key (`"live"` or `"staging"`). Any other key
    /// fails with [`Error::InvalidStatusEnvironment`] before a request is made.
    pub async fn get_server_status<S>(&self, environment: S) -> Result<ServerStatus>
    where
        S: TryInto<StatusEnvironment>,
        Error: From<S::Error>,
    {
        let environment = environment.try_into()?;
        self.http.server_status(environment).await
    }

    /// Returns a single kill event.
    pub async fn get_event(&self, event_id: impl Into<EventId>) -> Result<Event> {
        self.get(endpoints::GetEvent {
            event_id: event_id.into(),
        })
        .await
    }

    /// Returns the most recent kill events, usually with [`Page::recent_events`].
    pub async fn get_recent_events(&self, page: Page) -> Result<Vec<Event>> {
        self.get_with(endpoints::GetRecentEvents {}, PageQuery::from(page))
            .await
    }

    /// Returns the kill events between two event IDs.
    pub async fn get_events_between(
        &self,
        start: impl Into<EventId>,
        end: impl Into<EventId>,
    ) -> Result<Vec<Event>> {
        self.get(endpoints::GetEventsBetween {
            start: start.into(),
            end: end.into(),
        })
        .await
    }

    /// Returns a guild match, usually with [`Page::matches`].
    pub async fn get_guild_matches(
        &self,
        match_id: impl Into<MatchId>,
        page: Page,
    ) -> Result<GuildMatch> {
        let endpoint = endpoints::GetGuildMatch {
            match_id: match_id.into(),
        };
        self.get_with(endpoint, PageQuery::from(page)).await
    }

    /// Returns the top guild matches.
    pub async fn get_guild_matches_top(&self) -> Result<Vec<GuildMatch>> {
        self.get(endpoints::GetGuildMatchesTop {}).await
    }

    /// Returns upcoming guild matches.
    pub async fn get_guild_matches_next(&self, page: Page) -> Result<Vec<GuildMatch>> {
        self.get_with(endpoints::GetGuildMatchesNext {}, PageQuery::from(page))
            .await
    }

    /// Returns past guild matches, usually with [`Page::past_matches`].
    pub async fn get_guild_matches_past(&self, page: Page) -> Result<Vec<GuildMatch>> {
        self.get_with(endpoints::GetGuildMatchesPast {}, PageQuery::from(page))
            .await
    }

    /// Returns the match history between two guilds.
    pub async fn get_guild_matches_history(
        &self,
        guild_id: impl Into<GuildId>,
        rival_guild_id: impl Into<GuildId>,
    ) -> Result<Vec<GuildMatch>> {
        self.get(endpoints::GetGuildMatchesHistory {
            guild_id: guild_id.into(),
            rival_guild_id: rival_guild_id.into(),
        })
        .await
    }

    /// Returns the players with the most kill fame.
    pub async fn top_player_kill_fame(
        &self,
        page: Page,
        range: Option<Range>,
    ) -> Result<Vec<FameRanking>> {
        self.get_with(endpoints::GetPlayerFame {}, RangedQuery::new(page, range))
            .await
    }

    /// Returns the guilds with the most kill fame.
    pub async fn top_guild_kill_fame(
        &self,
        page: Page,
        range: Option<Range>,
    ) -> Result<Vec<FameRanking>> {
        self.get_with(endpoints::GetGuildFame {}, RangedQuery::new(page, range))
            .await
    }

    /// Returns the players with the best kill to death fame ratio.
    pub async fn top_kill_fame_ratio(
        &self,
        page: Page,
        range: Option<Range>,
    ) -> Result<Vec<FameRanking>> {
        self.get_with(endpoints::GetFameRatio {}, RangedQuery::new(page, range))
            .await
    }

    /// Returns the guilds with the most won attacks.
    pub async fn top_guilds_by_attack(
        &self,
        page: Page,
        range: Option<Range>,
    ) -> Result<Vec<GuildRanking>> {
        self.get_with(endpoints::GetTopGuildsByAttack {}, RangedQuery::new(page, range))
            .await
    }

    /// Returns the guilds with the most won defenses.
    pub async fn top_guilds_by_defense(
        &self,
        page: Page,
        range: Option<Range>,
    ) -> Result<Vec<GuildRanking>> {
        self.get_with(endpoints::GetTopGuildsByDefense {}, RangedQuery::new(page, range))
            .await
    }

    /// Returns the players with the most weapon fame.
    pub async fn player_weapon_ranking(
        &self,
        page: Page,
        range: Option<Range>,
    ) -> Result<Vec<WeaponRanking>> {
        self.get_with(endpoints::GetPlayerWeaponFame {}, RangedQuery::new(page, range))
            .await
    }

    /// Returns battles, usually with [`Page::battles`], no range and [`Sort::Recent`].
    pub async fn get_battles(
        &self,
        page: Page,
        range: Option<Range>,
        sort: Option<Sort>,
    ) -> Result<Vec<Battle>> {
        let query = BattlesQuery {
            offset: page.offset,
            limit: page.limit,
            range,
            sort,
        };
        self.get_with(endpoints::GetBattles {}, query).await
    }

    /// Returns the names of every weapon category.
    pub async fn get_weapon_categories(&self) -> Result<Vec<String>> {
        self.get(endpoints::GetWeaponCategories {}).await
    }
}

fn not_found(kind: EntityKind, name: &str) -> Error {
    warn!("search for {kind} '{name}' returned no results");
    Error::NotFound {
        kind,
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_for_each_server() {
        for key in Server::keys() {
            let client = Client::from_server_name(key).unwrap();
            assert_eq!(client.server().key(), key);
            assert_eq!(client.base_url(), client.server().api_url());
        }
    }

    #[test]
    fn default_client_targets_americas() {
        let client = Client::new().unwrap();
        assert_eq!(client.server(), Server::Americas);
        assert_eq!(client.base_url(), "https://gameinfo.albiononline.com/api/gameinfo");
    }

    #[test]
    fn unknown_server_name_fails() {
        let err = Client::from_server_name("invalid").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid server 'invalid', must be one of: americas, europe, asia"
        );
    }

    #[test]
    fn base_url_override_wins() {
        let client = ClientOptions::new()
            .server(Server::Asia)
            .base_url("http://localhost:3000")
            .timeout(Duration::from_secs(1))
            .into_client()
            .unwrap();
        assert_eq!(client.server(), Server::Asia);
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[tokio::test]
    async fn invalid_status_environment_fails_before_any_request() {
        // Unroutable on purpose: reaching the network would surface a reqwest error instead.
        let client = ClientOptions::new()
            .status_root("http://0.0.0.0:1")
            .into_client()
            .unwrap();

        let err = client.get_server_status("invalid").await.unwrap_err();
        assert!(matches!(err, Error::InvalidStatusEnvironment(ref env) if env == "invalid"));
        assert!(err.to_string().contains("'live' or 'staging'"));
    }
}
