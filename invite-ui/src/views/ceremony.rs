//! Ceremony details page. The friend and the graduation info are fetched
//! concurrently; the card only renders once both have arrived.

use crate::components::{CeremonyCard, HomeLink, StatusScreen, Tone};
use crate::copy;
use crate::fetch::{load_ceremony, ViewState};
use crate::route::FriendId;
use crate::state::AppState;
use crate::theme;
use dioxus::prelude::*;

#[component]
pub fn Ceremony(friend_id: FriendId) -> Element {
    let state = use_context::<AppState>();

    let ceremony = use_resource(use_reactive((&friend_id,), move |(friend_id,)| {
        let api = state.api.clone();
        async move { load_ceremony(&api, friend_id.as_str()).await }
    }));

    let view = (*ceremony.read()).clone().unwrap_or_default();

    match view {
        ViewState::Loading => rsx! {
            StatusScreen { message: copy::LOADING.to_string() }
        },
        ViewState::NotFound | ViewState::Failed => rsx! {
            StatusScreen { message: copy::INFO_NOT_FOUND.to_string(), tone: Tone::Error }
        },
        ViewState::Ready(details) => rsx! {
            div {
                style: theme::PAGE_WARM_REVERSED,
                div {
                    style: theme::CONTAINER,
                    CeremonyCard { details: details }
                    div {
                        style: "margin-top: 32px; text-align: center;",
                        HomeLink { button: true }
                    }
                }
            }
        },
    }
}
