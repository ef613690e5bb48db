use std::convert::Infallible;
use std::fmt;

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of entity a composite lookup was searching for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A player, looked up through [`Client::get_player_id`][crate::Client::get_player_id].
    Player,
    /// A guild, looked up through [`Client::get_guild_id`][crate::Client::get_guild_id].
    Guild,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "player",
            Self::Guild => "guild",
        })
    }
}

/// An error that occurs within the crate.
#[derive(Debug)]
pub enum Error {
    /// The given server key is not one of the registered servers.
    InvalidServer(String),
    /// The given status selector is neither `live` nor `staging`.
    InvalidStatusEnvironment(String),
    /// A filter value is not one the API accepts. Only returned when parsing a filter strictly.
    InvalidFilter {
        /// The query parameter, e.g. `range`.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A custom base URL could not be parsed.
    InvalidUrl(url::ParseError),
    /// An error occured within reqwest while requesting a resource, including timeouts.
    Reqwest(reqwest::Error),
    /// The API responded with a non-success status code.
    Http {
        /// The status code of the response.
        status: reqwest::StatusCode,
        /// The raw response body, lossily decoded as UTF-8.
        body: String,
    },
    /// An error occured while deserializing a response from the API.
    #[cfg(feature = "simd")]
    Deserialization(simd_json::Error),
    /// An error occured while deserializing a response from the API.
    #[cfg(not(feature = "simd"))]
    Deserialization(serde_json::Error),
    /// A lookup by name returned no search results.
    NotFound {
        /// What was being searched for.
        kind: EntityKind,
        /// The name that was searched.
        name: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidServer(server) => write!(
                f,
                "invalid server '{server}', must be one of: {}",
                crate::Server::keys().join(", ")
            ),
            Self::InvalidStatusEnvironment(env) => {
                write!(f, "invalid status server '{env}', must be 'live' or 'staging'")
            }
            Self::InvalidFilter { name, value } => write!(f, "unsupported {name} '{value}'"),
            Self::InvalidUrl(err) => write!(f, "invalid base URL: {err}"),
            Self::Reqwest(err) => write!(f, "request failed: {err}"),
            Self::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            Self::Deserialization(err) => write!(f, "failed to deserialize response: {err}"),
            Self::NotFound { kind, name } => write!(f, "no {kind} found matching '{name}'"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUrl(err) => Some(err),
            Self::Reqwest(err) => Some(err),
            Self::Deserialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Reqwest(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err)
    }
}

#[cfg(not(feature = "simd"))]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialization(err)
    }
}

#[cfg(feature = "simd")]
impl From<simd_json::Error> for Error {
    fn from(err: simd_json::Error) -> Self {
        Self::Deserialization(err)
    }
}

impl From<Infallible> for Error {
    fn from(err: Infallible) -> Self {
        match err {}
    }
}
