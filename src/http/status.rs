//! Status files of the game environments.
//!
//! These are served as plain text outside the game-info API and are sometimes prefixed with a
//! UTF-8 byte order mark, which JSON decoders reject.

use super::decode;
use crate::models::ServerStatus;
use crate::{Error, Result};
use bytes::Bytes;
use reqwest::Client;

/// The UTF-8 encoding of U+FEFF.
const BOM: &[u8] = b"\xEF\xBB\xBF";

pub(super) async fn fetch(client: &Client, url: &str) -> Result<ServerStatus> {
    debug!("GET {url}");

    let response = client.get(url).send().await?;
    let status = response.status();
    trace!("{url} responded with {status}");

    let body = response.bytes().await?;
    if !status.is_success() {
        return Err(Error::Http {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        });
    }

    decode_status(body)
}

/// Decodes a status file, stripping a leading byte order mark if plain decoding fails.
pub(super) fn decode_status(body: Bytes) -> Result<ServerStatus> {
    match decode(body.clone()) {
        Ok(status) => Ok(status),
        Err(_) if body.starts_with(BOM) => {
            debug!("status file starts with a byte order mark, decoding without it");
            decode(body.slice(BOM.len()..))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &str = r#"{ "status": "online", "message": "All good." }"#;

    #[test]
    fn plain_status() {
        let status = decode_status(Bytes::from_static(STATUS.as_bytes())).unwrap();
        assert!(status.is_online());
        assert_eq!(status.message.as_deref(), Some("All good."));
    }

    #[test]
    fn bom_prefixed_status_matches_plain() {
        let prefixed = format!("\u{feff}{STATUS}");
        assert!(prefixed.as_bytes().starts_with(BOM));

        let plain = decode_status(Bytes::from_static(STATUS.as_bytes())).unwrap();
        let stripped = decode_status(Bytes::from(prefixed)).unwrap();
        assert_eq!(plain, stripped);
    }

    #[test]
    fn other_failures_are_returned_unchanged() {
        let err = decode_status(Bytes::from_static(b"maintenance")).unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));

        let err = decode_status(Bytes::from_static(b"\xEF\xBB\xBFnot json")).unwrap_err();
        assert!(matches!(err, Error::Deserialization(_)));
    }
}
