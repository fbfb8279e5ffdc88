//! Per-friend invitation page with the date confirmation button.

use crate::components::{HomeLink, InvitationCard, StatusScreen, Tone};
use crate::copy;
use crate::fetch::{load_friend, ViewState};
use crate::route::{FriendId, Route};
use crate::state::AppState;
use crate::theme;
use dioxus::prelude::*;

#[component]
pub fn Invitation(friend_id: FriendId) -> Element {
    let state = use_context::<AppState>();

    let friend = use_resource(use_reactive((&friend_id,), move |(friend_id,)| {
        let api = state.api.clone();
        async move { load_friend(&api, friend_id.as_str()).await }
    }));

    let view = (*friend.read()).clone().unwrap_or_default();

    match view {
        ViewState::Loading => rsx! {
            StatusScreen { message: copy::LOADING.to_string() }
        },
        ViewState::NotFound | ViewState::Failed => rsx! {
            StatusScreen { message: copy::FRIEND_NOT_FOUND.to_string(), tone: Tone::Error }
        },
        ViewState::Ready(_) => rsx! {
            div {
                style: theme::PAGE_CENTERED,
                InvitationCard {
                    Link {
                        to: Route::Ceremony { friend_id: friend_id.clone() },
                        span {
                            style: theme::PRIMARY_BUTTON,
                            {copy::CONFIRM_BUTTON}
                        }
                    }
                    div {
                        style: "margin-top: 32px;",
                        HomeLink {}
                    }
                }
            }
        },
    }
}
