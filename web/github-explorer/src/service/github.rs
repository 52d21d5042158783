use gloo_net::http::{Request, RequestBuilder};
use log::Level;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::form_urlencoded;
use web_sys::AbortSignal;

use crate::{
    config::api::ApiConfig,
    model::github::{RepositoriesPage, UserStats},
};

pub const DEFAULT_PAGE: u32 = 1;

/// A request to the stats API did not produce a usable response.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
}

/// Percent-encodes `segment` for use as one URL path segment.
fn encode_path_segment(segment: &str) -> String {
    // form encoding writes spaces as '+', a literal '+' is already %2B
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Aborts come from views unmounting and are not failures.
fn failure_level(aborted: bool) -> Level {
    if aborted {
        Level::Debug
    } else {
        Level::Error
    }
}

fn log_failure(what: &str, e: &FetchError, signal: Option<&AbortSignal>) {
    let aborted = signal.is_some_and(AbortSignal::aborted);
    log::log!(failure_level(aborted), "Error fetching {what}: {e}");
}

/// Client for the stats API. Every call is a single GET without retries.
#[derive(Debug, Clone, PartialEq)]
pub struct GitHubService {
    config: ApiConfig,
}

impl Default for GitHubService {
    fn default() -> Self {
        Self::new(ApiConfig::load())
    }
}

impl GitHubService {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn user_url(&self, username: &str) -> String {
        format!("{}/{}", self.base_url(), encode_path_segment(username))
    }

    pub fn repositories_url(&self, username: &str) -> String {
        format!("{}/repositories", self.user_url(username))
    }

    pub fn badge_url(&self, username: &str) -> String {
        format!("{}/badge", self.user_url(username))
    }

    pub async fn get_user_repositories(
        &self,
        username: &str,
        page: u32,
        signal: Option<&AbortSignal>,
    ) -> Result<RepositoriesPage, FetchError> {
        let request =
            Request::get(&self.repositories_url(username)).query([("page", page.to_string())]);

        Self::get_json(request, signal).await.map_err(|e| {
            log_failure("user repositories", &e, signal);
            e
        })
    }

    pub async fn get_user_stats(
        &self,
        username: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<UserStats, FetchError> {
        let request = Request::get(&self.user_url(username));

        Self::get_json(request, signal).await.map_err(|e| {
            log_failure("user stats", &e, signal);
            e
        })
    }

    async fn get_json<T: DeserializeOwned>(
        request: RequestBuilder,
        signal: Option<&AbortSignal>,
    ) -> Result<T, FetchError> {
        let response = request.abort_signal(signal).send().await?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        Ok(response.json::<T>().await?)
    }
}
