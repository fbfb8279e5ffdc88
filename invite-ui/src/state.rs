//! Application state managed via Dioxus context.
//!
//! The root component provides one `AppState` with `use_context_provider`;
//! views retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use invite_api::ApiClient;

/// Shared application state for every view.
#[derive(Clone)]
pub struct AppState {
    /// Backend client
    pub api: ApiClient,
    /// Whether sample data has been seeded during this session
    pub seeded: Signal<bool>,
}

impl AppState {
    /// Must be called inside a component (signals need a live scope).
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            seeded: Signal::new(false),
        }
    }
}
