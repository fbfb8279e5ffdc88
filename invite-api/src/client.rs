//! Typed REST client for the invitation backend.

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::{CeremonyDetails, Friend, GraduationInfo};
use log::debug;
use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Handle to the backend. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Ask the backend to create its sample records. Idempotent on the
    /// backend side; the response body is not inspected.
    pub async fn init_data(&self) -> Result<()> {
        let url = self.config.endpoint(["init-data"]);
        debug!("POST {}", url);
        let response = self.http.post(url.clone()).send().await?;
        check_status(response, &url, "sample data").map(|_| ())
    }

    /// All invitees, in backend order.
    pub async fn friends(&self) -> Result<Vec<Friend>> {
        self.get_json(self.config.endpoint(["friends"]), "friend list")
            .await
    }

    /// One invitee. A 404 or a `null` body is reported as `NotFound`.
    pub async fn friend(&self, id: &str) -> Result<Friend> {
        self.get_json(
            self.config.endpoint(["friends", id]),
            &format!("friend {}", id),
        )
        .await
    }

    pub async fn graduation_info(&self) -> Result<GraduationInfo> {
        self.get_json(
            self.config.endpoint(["graduation-info"]),
            "graduation info",
        )
        .await
    }

    /// Fetch the invitee and the ceremony info concurrently. Fails if either
    /// request fails.
    pub async fn ceremony_details(&self, friend_id: &str) -> Result<CeremonyDetails> {
        let (friend, info) =
            futures::future::try_join(self.friend(friend_id), self.graduation_info()).await?;
        Ok(CeremonyDetails { friend, info })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, resource: &str) -> Result<T> {
        debug!("GET {}", url);
        let response = self.http.get(url.clone()).send().await?;
        let response = check_status(response, &url, resource)?;
        response
            .json::<Option<T>>()
            .await?
            .ok_or_else(|| ApiError::not_found(resource))
    }
}

fn check_status(response: Response, url: &Url, resource: &str) -> Result<Response> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::not_found(resource));
    }
    if !status.is_success() {
        return Err(ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(response)
}
