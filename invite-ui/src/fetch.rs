//! View states and the loaders each view runs on mount.
//!
//! Loaders never fail: every error is logged here and folded into a
//! `ViewState` the view can render directly.

use invite_api::{ApiClient, ApiError, CeremonyDetails, Friend};
use log::{error, info, warn};

/// Loading → Ready | NotFound | Failed. There are no retries, so a view never
/// leaves a terminal state until it is remounted.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    /// The backend answered but had nothing to show
    NotFound,
    /// The request itself failed
    Failed,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Loading
    }
}

impl<T> ViewState<T> {
    /// Fold a fetch result into a state, logging any error under `what`.
    pub fn from_result(result: Result<T, ApiError>, what: &str) -> Self {
        match result {
            Ok(value) => ViewState::Ready(value),
            Err(e) if e.is_not_found() => {
                warn!("No {} available: {}", what, e);
                ViewState::NotFound
            }
            Err(e) => {
                error!("Error fetching {}: {}", what, e);
                ViewState::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Trigger backend seeding. Returns whether it succeeded; a failure is only
/// logged since the friend list may already exist.
pub async fn seed_sample_data(api: &ApiClient) -> bool {
    match api.init_data().await {
        Ok(()) => {
            info!("Sample data initialized");
            true
        }
        Err(e) => {
            warn!("Failed to initialize sample data: {}", e);
            false
        }
    }
}

/// Friend list for the homepage. An empty list counts as not found.
pub async fn load_friends(api: &ApiClient) -> ViewState<Vec<Friend>> {
    match ViewState::from_result(api.friends().await, "friends") {
        ViewState::Ready(friends) if friends.is_empty() => ViewState::NotFound,
        state => state,
    }
}

pub async fn load_friend(api: &ApiClient, friend_id: &str) -> ViewState<Friend> {
    ViewState::from_result(api.friend(friend_id).await, "friend")
}

pub async fn load_ceremony(api: &ApiClient, friend_id: &str) -> ViewState<CeremonyDetails> {
    ViewState::from_result(api.ceremony_details(friend_id).await, "ceremony details")
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use invite_api::ApiConfig;
    use serde_json::json;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::new(&server.base_url()).unwrap())
    }

    #[test]
    fn test_default_is_loading() {
        let state: ViewState<Friend> = ViewState::default();
        assert!(state.is_loading());
    }

    #[test]
    fn test_from_result_maps_errors() {
        let missing: ViewState<Friend> =
            ViewState::from_result(Err(ApiError::not_found("friend 9")), "friend");
        assert_eq!(missing, ViewState::NotFound);

        let failed: ViewState<Friend> = ViewState::from_result(
            Err(ApiError::Status {
                status: 502,
                url: "http://backend/api/friends/9".to_string(),
            }),
            "friend",
        );
        assert_eq!(failed, ViewState::Failed);
    }

    #[tokio::test]
    async fn test_seed_reports_success_and_failure() {
        let server = MockServer::start_async().await;
        let ok = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/init-data");
                then.status(200).json_body(json!({"message": "ok"}));
            })
            .await;
        assert!(seed_sample_data(&client_for(&server)).await);
        ok.delete_async().await;

        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/init-data");
                then.status(500);
            })
            .await;
        assert!(!seed_sample_data(&client_for(&server)).await);
    }

    #[tokio::test]
    async fn test_friends_loading_to_ready() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/friends");
                then.status(200).json_body(json!([{"id": "1", "name": "An"}]));
            })
            .await;

        let state = load_friends(&client_for(&server)).await;
        assert_eq!(
            state,
            ViewState::Ready(vec![Friend {
                id: "1".to_string(),
                name: "An".to_string()
            }])
        );
    }

    #[tokio::test]
    async fn test_empty_friend_list_is_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/friends");
                then.status(200).json_body(json!([]));
            })
            .await;

        assert_eq!(load_friends(&client_for(&server)).await, ViewState::NotFound);
    }

    #[tokio::test]
    async fn test_friend_list_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/friends");
                then.status(500);
            })
            .await;

        assert_eq!(load_friends(&client_for(&server)).await, ViewState::Failed);
    }

    #[tokio::test]
    async fn test_missing_friend() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/friends/nobody");
                then.status(404);
            })
            .await;

        assert_eq!(
            load_friend(&client_for(&server), "nobody").await,
            ViewState::NotFound
        );
    }

    #[tokio::test]
    async fn test_ceremony_ready_keeps_friend() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/friends/42");
                then.status(200).json_body(json!({"id": "42", "name": "Giang"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/graduation-info");
                then.status(200).json_body(json!({
                    "graduate_name": "Nguyen Van Tuyen",
                    "major": "Software Engineering",
                    "date": "19/08/2025",
                    "time": "14:00",
                    "location": "FPT University Hanoi",
                    "address": "Hoa Lac Hi-Tech Park",
                }));
            })
            .await;

        match load_ceremony(&client_for(&server), "42").await {
            ViewState::Ready(details) => {
                assert_eq!(details.friend.id, "42");
                assert_eq!(details.info.time, "14:00");
            }
            other => panic!("expected ready state, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ceremony_with_missing_info() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/friends/42");
                then.status(200).json_body(json!({"id": "42", "name": "Giang"}));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/graduation-info");
                then.status(404);
            })
            .await;

        assert_eq!(
            load_ceremony(&client_for(&server), "42").await,
            ViewState::NotFound
        );
    }
}
