//! REST API helpers for the assistants backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every helper returns `ApiError::Unavailable`; the UI
//! renders its "not loaded yet" state until the browser fetches for real.
//!
//! ERROR HANDLING
//! ==============
//! Helpers return `Result<_, ApiError>` and never panic. Loaders in `state`
//! turn failures into an `error` field on the owning store.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Agent, Deployment, ManagedTool};
use crate::config::ClientConfig;
use crate::state::experimental::ExperimentalFeatures;

fn deployments_path(all: bool) -> String {
    if all {
        "/v1/deployments?all=true".to_owned()
    } else {
        "/v1/deployments".to_owned()
    }
}

fn tools_path(agent_id: Option<&str>) -> String {
    match agent_id.filter(|id| !id.is_empty()) {
        Some(id) => format!("/v1/tools?agent_id={}", urlencoding::encode(id)),
        None => "/v1/tools".to_owned(),
    }
}

fn agent_path(agent_id: &str) -> String {
    format!("/v1/agents/{}", urlencoding::encode(agent_id))
}

const EXPERIMENTAL_FEATURES_PATH: &str = "/v1/experimental_features/";

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(config: &ClientConfig, path: &str) -> Result<T, ApiError> {
    let url = config.endpoint(path);
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { endpoint: path.to_owned(), status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn get_json<T: serde::de::DeserializeOwned>(config: &ClientConfig, path: &str) -> Result<T, ApiError> {
    let _ = (config, path);
    Err(ApiError::Unavailable)
}

/// List deployments from `/v1/deployments`; `all` includes unavailable ones.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds with a non-OK
/// status, or the body does not decode.
pub async fn fetch_deployments(config: &ClientConfig, all: bool) -> Result<Vec<Deployment>, ApiError> {
    get_json(config, &deployments_path(all)).await
}

/// List managed tools, optionally scoped to one agent.
///
/// # Errors
///
/// See [`fetch_deployments`].
pub async fn fetch_managed_tools(config: &ClientConfig, agent_id: Option<&str>) -> Result<Vec<ManagedTool>, ApiError> {
    get_json(config, &tools_path(agent_id)).await
}

/// Fetch the experimental feature flag map.
///
/// # Errors
///
/// See [`fetch_deployments`].
pub async fn fetch_experimental_features(config: &ClientConfig) -> Result<ExperimentalFeatures, ApiError> {
    let flags = get_json(config, EXPERIMENTAL_FEATURES_PATH).await?;
    Ok(ExperimentalFeatures { flags })
}

/// Fetch a single agent by id.
///
/// # Errors
///
/// See [`fetch_deployments`].
pub async fn fetch_agent(config: &ClientConfig, agent_id: &str) -> Result<Agent, ApiError> {
    get_json(config, &agent_path(agent_id)).await
}
