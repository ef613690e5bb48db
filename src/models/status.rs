use super::Extra;
use serde::{Deserialize, Serialize};

/// The contents of a game environment's status file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerStatus {
    /// The server state, e.g. `online` or `offline`.
    pub status: Option<String>,
    /// A human readable message.
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl ServerStatus {
    /// Returns whether the status reports the server as online.
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("online"))
    }
}
