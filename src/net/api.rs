//! REST helper for the single analysis-service call.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`.
//! Server-side (SSR): a stub returning a transport error, since the query
//! endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed [`QueryError`] instead of panics so a dead backend
//! degrades to a transcript entry without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::QueryError;
#[cfg(feature = "hydrate")]
use super::types::QueryRequest;
use super::types::QueryResponse;

/// Default analysis-service origin when `GOVDATA_API_URL` is unset.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Analysis-service origin, captured once at compile time.
///
/// The WASM client has no runtime process environment, so the base URL is
/// baked in at build time and read-only afterwards.
pub fn api_base() -> &'static str {
    option_env!("GOVDATA_API_URL").unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn query_endpoint(base: &str) -> String {
    format!("{}/query", base.trim_end_matches('/'))
}

/// Send one query to `POST {base}/query` and decode the JSON response.
///
/// # Errors
///
/// [`QueryError::Transport`] when the request cannot be sent or never
/// completes, [`QueryError::Protocol`] for any non-2xx status regardless
/// of body content, and [`QueryError::Decode`] when the body is not the
/// expected JSON shape.
pub async fn post_query(query: &str) -> Result<QueryResponse, QueryError> {
    #[cfg(feature = "hydrate")]
    {
        let url = query_endpoint(api_base());
        let request = gloo_net::http::Request::post(&url)
            .json(&QueryRequest {
                query: query.to_owned(),
            })
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        let resp = request
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(QueryError::Protocol(resp.status()));
        }
        resp.json::<QueryResponse>()
            .await
            .map_err(|e| QueryError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err(QueryError::Transport("not available on server".to_owned()))
    }
}
