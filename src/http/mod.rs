pub mod endpoints;
pub mod query;
mod status;

use crate::models::ServerStatus;
use crate::{Error, Result, Server, StatusEnvironment};
use bytes::{Buf, Bytes};
use endpoints::Endpoint;
use reqwest::Client;
use serde::de::DeserializeOwned;
#[cfg(not(feature = "simd"))]
use serde_json as json;
#[cfg(feature = "simd")]
use simd_json as json;
use std::{
    future::{Future, IntoFuture},
    pin::Pin,
    time::Duration,
};
use url::Url;

/// The timeout applied to every request to the game-info API unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The user agent sent with every request unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where the game-info API is hosted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApiUri<'a> {
    /// One of the official regional servers.
    Server(Server),
    /// Custom base URL, e.g. a proxy or a local mock.
    Custom(&'a str),
}

impl Default for ApiUri<'_> {
    fn default() -> Self {
        Self::Server(Server::default())
    }
}

impl<'a> ApiUri<'a> {
    /// Returns the URI as a string.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::Server(server) => server.api_url(),
            Self::Custom(uri) => *uri,
        }
    }
}

impl From<Server> for ApiUri<'_> {
    #[inline]
    fn from(server: Server) -> Self {
        Self::Server(server)
    }
}

impl<'a> From<&'a str> for ApiUri<'a> {
    #[inline]
    fn from(uri: &'a str) -> Self {
        Self::Custom(uri)
    }
}

/// An outgoing HTTP request.
#[derive(Clone, Debug)]
#[must_use = "must .await the request to send it"]
pub struct Request<'a, E: Endpoint> {
    client: &'a Client,
    server: &'a str,
    endpoint: E,
    query: Option<E::Query>,
}

impl<'a, E> IntoFuture for Request<'a, E>
where
    E: Endpoint + Send + 'a,
    E::Response: Send,
{
    type Output = Result<E::Response>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}

impl<'a, E: Endpoint> Request<'a, E> {
    /// Creates a new intermediate request.
    pub(crate) fn new(client: &'a Client, server: &'a str, endpoint: E) -> Self {
        Self {
            client,
            server,
            endpoint,
            query: None,
        }
    }

    /// Adds query parameters to the request.
    pub fn query(mut self, query: E::Query) -> Self {
        self.query = Some(query);
        self
    }

    /// Returns the full URL this request will be sent to, excluding the query string.
    #[must_use]
    pub fn url(&self) -> String {
        self.server.to_string() + &self.endpoint.path()
    }

    /// Sends the request.
    pub async fn send(self) -> Result<E::Response> {
        let url = self.url();
        debug!("{} {url}", E::METHOD);

        let mut request = self.client.request(E::METHOD, url);
        if let Some(query) = self.query {
            request = request.query(&query);
        }

        let response = request.send().await?;
        let status = response.status();
        trace!("{} {} responded with {status}", E::METHOD, E::PATH);

        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(Error::Http {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        decode(body)
    }
}

/// Decodes a JSON response body.
pub(crate) fn decode<T: DeserializeOwned>(body: Bytes) -> Result<T> {
    json::from_reader(body.reader()).map_err(Into::into)
}

/// The underlying HTTP client for the game-info API.
///
/// Bound to a single base URL for its whole lifetime. Most users want [`Client`][crate::Client]
/// instead, which wraps every endpoint in a typed method.
///
/// # Example
/// ```no_run
/// use albion::http::{endpoints, Http};
/// use albion::Server;
///
/// #[tokio::main]
/// async fn main() -> albion::Result<()> {
///     let http = Http::new(Server::Europe)?;
///     let categories = http.request(endpoints::GetWeaponCategories {}).await?;
///     println!("{} weapon categories", categories.len());
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Http {
    client: Client,
    status_client: Client,
    server: String,
    status_root: Option<String>,
}

impl Http {
    /// Creates a new HTTP client for the given API URI with the default timeout and user agent.
    pub fn new<'a>(uri: impl Into<ApiUri<'a>>) -> Result<Self> {
        Self::with_options(uri.into(), DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, None)
    }

    /// Creates a new HTTP client.
    ///
    /// `timeout` applies to requests against the game-info API only. `status_root`, if set,
    /// replaces the official status hosts: status files are then read from
    /// `{status_root}/{live|staging}/status.txt`.
    pub fn with_options(
        uri: ApiUri<'_>,
        timeout: Duration,
        user_agent: &str,
        status_root: Option<&str>,
    ) -> Result<Self> {
        let server = Url::parse(uri.as_str())?;
        let status_root = status_root
            .map(|root| Url::parse(root).map(|url| url.as_str().trim_end_matches('/').to_string()))
            .transpose()?;

        let client = reqwest::ClientBuilder::new()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        let status_client = reqwest::ClientBuilder::new().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            status_client,
            server: server.as_str().trim_end_matches('/').to_string(),
            status_root,
        })
    }

    /// Returns the base URL every request is sent relative to.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.server
    }

    /// Creates a new outgoing HTTP request to the given endpoint.
    pub fn request<E: Endpoint>(&self, endpoint: E) -> Request<E> {
        Request::new(&self.client, &self.server, endpoint)
    }

    /// Returns the URL of the status file for the given environment.
    #[must_use]
    pub fn status_url(&self, environment: StatusEnvironment) -> String {
        match &self.status_root {
            Some(root) => format!("{root}/{environment}/status.txt"),
            None => environment.status_url(),
        }
    }

    /// Fetches the status file of the given environment.
    ///
    /// This does not go through the game-info API and is not subject to its timeout.
    pub async fn server_status(&self, environment: StatusEnvironment) -> Result<ServerStatus> {
        status::fetch(&self.status_client, &self.status_url(environment)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_follows_server() {
        for server in Server::ALL {
            let http = Http::new(server).unwrap();
            assert_eq!(http.base_url(), server.api_url());
        }
    }

    #[test]
    fn custom_base_url_is_normalized() {
        let http = Http::new("http://127.0.0.1:8080/").unwrap();
        assert_eq!(http.base_url(), "http://127.0.0.1:8080");

        let request = http.request(endpoints::GetGuildMembers {
            guild_id: "g1".into(),
        });
        assert_eq!(request.url(), "http://127.0.0.1:8080/guilds/g1/members");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(Http::new("not a url"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn status_url_defaults_to_official_hosts() {
        let http = Http::new(Server::Asia).unwrap();
        assert_eq!(
            http.status_url(StatusEnvironment::Staging),
            "http://staging.albiononline.com/status.txt"
        );

        let http = Http::with_options(
            ApiUri::default(),
            DEFAULT_TIMEOUT,
            DEFAULT_USER_AGENT,
            Some("http://127.0.0.1:9000/"),
        )
        .unwrap();
        assert_eq!(
            http.status_url(StatusEnvironment::Live),
            "http://127.0.0.1:9000/live/status.txt"
        );
    }

    #[test]
    fn decode_reports_malformed_bodies() {
        let err = decode::<Vec<String>>(Bytes::from_static(b"<html>")).unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }
}
