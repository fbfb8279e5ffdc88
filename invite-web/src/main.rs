//! Graduation Ceremony Invitation
//!
//! Three pages backed by the invitation REST API:
//! - `/` lists friends (seeding the backend's sample data first)
//! - `/invite/:friend_id` asks the friend to confirm the date
//! - `/ceremony/:friend_id` shows the personalized ceremony card
//!
//! Data flow:
//! 1. `build.rs` copies `BACKEND_URL` into `INVITE_BACKEND_URL` at build time.
//! 2. On mount the backend URL is resolved (page origin when empty) and an
//!    `ApiClient` is built from it.
//! 3. `AppState` is provided via context and the router renders the view
//!    matching the current URL; each view fetches its own data.

use anyhow::Context;
use dioxus::prelude::*;
use invite_api::{ApiClient, ApiConfig};
use invite_ui::components::{StatusScreen, Tone};
use invite_ui::{theme, AppState, Route};

/// Backend base URL baked in by `build.rs`.
const BACKEND_URL: &str = env!("INVITE_BACKEND_URL");

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting graduation invitation site");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("main"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| backend_client().map_err(|e| format!("{:#}", e)));

    match client {
        Ok(api) => rsx! {
            Site { api: api }
        },
        Err(err) => {
            log::error!("Cannot reach backend: {}", err);
            rsx! {
                StatusScreen { message: err, tone: Tone::Error }
            }
        }
    }
}

#[component]
fn Site(api: ApiClient) -> Element {
    use_context_provider(|| AppState::new(api.clone()));

    rsx! {
        div {
            style: theme::FONT,
            Router::<Route> {}
        }
    }
}

/// Build the API client from the baked-in URL, falling back to the origin
/// the page was served from.
fn backend_client() -> anyhow::Result<ApiClient> {
    let base_url = if BACKEND_URL.is_empty() {
        page_origin().context("no BACKEND_URL configured and page origin unavailable")?
    } else {
        BACKEND_URL.to_string()
    };
    log::info!("Using backend at {}", base_url);
    let config = ApiConfig::new(&base_url)
        .with_context(|| format!("invalid backend URL {}", base_url))?;
    Ok(ApiClient::new(config))
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
