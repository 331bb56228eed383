// SPDX-License-Identifier: GPL-3.0-or-later

use crate::api::common::Payload;
use anyhow::{Context, Result};
use base64::Engine as _;
use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

pub(crate) const AUTHENTICATION_ERROR: &str =
    "Could not authenticate credentials. Please check token and keys";

pub(crate) const CHECKSUM_HEADER: &str = "X-Checksum";
pub(crate) const TIMESTAMP_HEADER: &str = "X-Timestamp";
pub(crate) const APP_KEY_HEADER: &str = "X-AppKey";
pub(crate) const SESSION_TOKEN_HEADER: &str = "X-SessionToken";

/// Credentials kept after a successful session generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Session {
    pub api_secret: String,
    /// Token obtained from the login flow.
    pub api_session: String,
    /// Base64 token issued by the service, sent on signed requests.
    pub session_token: String,
    pub user_id: String,
}

/// Seconds precision, milliseconds are always zero.
pub(crate) fn format_timestamp(date_time: DateTime<Utc>) -> String {
    date_time.format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}

pub(crate) fn checksum(timestamp: &str, body: &str, api_secret: &str) -> String {
    let digest = Sha256::digest(format!("{timestamp}{body}{api_secret}").as_bytes());
    format!("token {digest:x}")
}

/// Extracts the session token from a customer details response. The token decodes to
/// `user_id:session_key`.
pub(crate) fn parse_session(
    envelope: &Payload,
    api_secret: &str,
    api_session: &str,
) -> Result<Session> {
    let session_token = envelope
        .get("Success")
        .and_then(|success| success.get("session_token"))
        .and_then(|token| token.as_str())
        .context(AUTHENTICATION_ERROR)?;
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(session_token)
        .context(AUTHENTICATION_ERROR)?;
    let decoded = String::from_utf8(decoded).context(AUTHENTICATION_ERROR)?;
    let (user_id, _session_key) = decoded.split_once(':').context(AUTHENTICATION_ERROR)?;

    Ok(Session {
        api_secret: api_secret.into(),
        api_session: api_session.into(),
        session_token: session_token.into(),
        user_id: user_id.into(),
    })
}

/// Fails when the envelope reports an error with a non 200 status, otherwise leaves it alone.
pub(crate) fn check_envelope(envelope: &Payload) -> Result<()> {
    let status = envelope.get("Status").and_then(|status| status.as_u64());
    let error = envelope.get("Error").filter(|error| !error.is_null());
    match (status, error) {
        (Some(200), _) | (_, None) => Ok(()),
        (status, Some(error)) => {
            let message = error
                .as_str()
                .map(String::from)
                .unwrap_or_else(|| error.to_string());
            match status {
                Some(status) => anyhow::bail!("breeze api error ({status}): {message}"),
                None => anyhow::bail!("breeze api error: {message}"),
            }
        }
    }
}
