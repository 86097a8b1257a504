//! The transport + resolver shared by every operation.

use serde_json::Value;

use crate::core::CcError;

/// Issues a single GET against `url` and parses the full body as JSON.
///
/// A transport failure (connect, read) surfaces as [`CcError::Transport`]
/// before any parse is attempted, so a dead host can never masquerade as a
/// malformed document. HTTP status codes are deliberately not inspected: the
/// service reports its own outcome inside the JSON body, and classifying that
/// is the caller's job.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(http), err))]
pub(crate) async fn fetch_json(http: &reqwest::Client, url: &str) -> Result<Value, CcError> {
    let resp = http.get(url).send().await.map_err(|e| CcError::Transport {
        url: url.to_string(),
        source: e,
    })?;

    let body = resp.text().await.map_err(|e| CcError::Transport {
        url: url.to_string(),
        source: e,
    })?;

    serde_json::from_str(&body).map_err(|e| CcError::Json {
        url: url.to_string(),
        source: e,
    })
}
