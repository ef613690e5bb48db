use crate::Error;
use std::fmt;
use std::str::FromStr;

/// A regional deployment of the Albion Online game-info API.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Server {
    /// The Americas server (Washington). This is the default.
    #[default]
    Americas,
    /// The Europe server (Amsterdam).
    Europe,
    /// The Asia server (Singapore).
    Asia,
}

impl Server {
    /// Every registered server, in registry order.
    pub const ALL: [Self; 3] = [Self::Americas, Self::Europe, Self::Asia];

    /// Returns the key used to select this server, e.g. `"europe"`.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Europe => "europe",
            Self::Asia => "asia",
        }
    }

    /// Returns the base URL of the game-info API hosted on this server.
    #[inline]
    #[must_use]
    pub const fn api_url(&self) -> &'static str {
        match self {
            Self::Americas => "https://gameinfo.albiononline.com/api/gameinfo",
            Self::Europe => "https://gameinfo-ams.albiononline.com/api/gameinfo",
            Self::Asia => "https://gameinfo-sgp.albiononline.com/api/gameinfo",
        }
    }

    /// Returns the keys of every registered server, in registry order.
    #[must_use]
    pub fn keys() -> [&'static str; 3] {
        Self::ALL.map(|server| server.key())
    }
}

impl FromStr for Server {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "americas" => Ok(Self::Americas),
            "europe" => Ok(Self::Europe),
            "asia" => Ok(Self::Asia),
            other => Err(Error::InvalidServer(other.to_string())),
        }
    }
}

impl TryFrom<&str> for Server {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Selects which game environment's status file to read.
///
/// This is unrelated to [`Server`]: the status files live outside the game-info API.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusEnvironment {
    /// The live game. This is the default.
    #[default]
    Live,
    /// The staging (test) server.
    Staging,
}

impl StatusEnvironment {
    /// Returns the selector as a string.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Staging => "staging",
        }
    }

    /// Returns the URL of the official status file for this environment.
    #[must_use]
    pub fn status_url(&self) -> String {
        format!("http://{}.albiononline.com/status.txt", self.as_str())
    }
}

impl FromStr for StatusEnvironment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" => Ok(Self::Live),
            "staging" => Ok(Self::Staging),
            other => Err(Error::InvalidStatusEnvironment(other.to_string())),
        }
    }
}

impl TryFrom<&str> for StatusEnvironment {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for StatusEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_select_matching_base_urls() {
        let cases = [
            ("americas", "https://gameinfo.albiononline.com/api/gameinfo"),
            ("europe", "https://gameinfo-ams.albiononline.com/api/gameinfo"),
            ("asia", "https://gameinfo-sgp.albiononline.com/api/gameinfo"),
        ];

        for (key, url) in cases {
            let server: Server = key.parse().unwrap();
            assert_eq!(server.key(), key);
            assert_eq!(server.api_url(), url);
        }
    }

    #[test]
    fn default_is_first_registry_entry() {
        assert_eq!(Server::default(), Server::ALL[0]);
        assert_eq!(Server::default(), Server::Americas);
    }

    #[test]
    fn unknown_server_is_rejected() {
        let err = "moon".parse::<Server>().unwrap_err();
        assert!(matches!(err, Error::InvalidServer(ref key) if key == "moon"));
        assert!(err.to_string().contains("americas, europe, asia"));
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert!("Europe".parse::<Server>().is_err());
    }

    #[test]
    fn status_environments() {
        assert_eq!(
            StatusEnvironment::Live.status_url(),
            "http://live.albiononline.com/status.txt"
        );
        assert_eq!(
            "staging".parse::<StatusEnvironment>().unwrap(),
            StatusEnvironment::Staging
        );
        assert!(matches!(
            StatusEnvironment::try_from("invalid"),
            Err(Error::InvalidStatusEnvironment(_))
        ));
    }
}
