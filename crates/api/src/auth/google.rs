//! Google credential verification.
//!
//! The console's Google button posts the raw ID-token credential. Rather
//! than verifying the signature locally, the token is sent to Google's
//! tokeninfo endpoint, which validates it and returns the claims. The
//! audience must match our configured client id.

use orchard_core::error::CoreError;
use serde::Deserialize;

/// Google's token introspection endpoint.
const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Subset of the tokeninfo claims we read.
#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    email: Option<String>,
    email_verified: Option<String>,
}

/// Verify a Google ID-token credential and return the verified email.
///
/// Fails with `Unauthorized` for any token Google rejects, an audience
/// mismatch, or an unverified email; fails with `Internal` when Google is
/// unreachable.
pub async fn verify_credential(
    http: &reqwest::Client,
    credential: &str,
    client_id: &str,
) -> Result<String, CoreError> {
    let response = http
        .get(TOKENINFO_URL)
        .query(&[("id_token", credential)])
        .send()
        .await
        .map_err(|e| CoreError::Internal(format!("tokeninfo request failed: {e}")))?;

    if !response.status().is_success() {
        return Err(CoreError::Unauthorized(
            "Invalid Google credential".to_string(),
        ));
    }

    let info: TokenInfo = response
        .json()
        .await
        .map_err(|e| CoreError::Internal(format!("tokeninfo response unreadable: {e}")))?;

    if info.aud != client_id {
        tracing::warn!(aud = %info.aud, "Google credential issued for a different client");
        return Err(CoreError::Unauthorized(
            "Invalid Google credential".to_string(),
        ));
    }

    if info.email_verified.as_deref() != Some("true") {
        return Err(CoreError::Unauthorized(
            "Google account email is not verified".to_string(),
        ));
    }

    info.email.ok_or_else(|| {
        CoreError::Unauthorized("Google credential carries no email".to_string())
    })
}
