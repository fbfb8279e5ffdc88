//! Homepage: event header and the list of invitees.
//!
//! On first mount in a session the backend is asked to seed its sample data,
//! then the friend list is fetched. Later mounts skip the seeding call.

use crate::components::{FriendRow, StatusScreen, Tone};
use crate::copy;
use crate::fetch::{load_friends, seed_sample_data, ViewState};
use crate::state::AppState;
use crate::theme;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();

    let listing = use_resource(move || {
        let api = state.api.clone();
        let mut seeded = state.seeded;
        async move {
            // peek: writing `seeded` below must not re-run this resource
            if !*seeded.peek() && seed_sample_data(&api).await {
                seeded.set(true);
            }
            load_friends(&api).await
        }
    });

    let view = (*listing.read()).clone().unwrap_or_default();

    match view {
        ViewState::Loading => rsx! {
            StatusScreen { message: copy::LOADING.to_string() }
        },
        ViewState::Failed => rsx! {
            StatusScreen { message: copy::FRIENDS_UNAVAILABLE.to_string(), tone: Tone::Error }
        },
        ViewState::NotFound => rsx! {
            HomeFrame {
                p {
                    style: "text-align: center; font-size: 18px; color: #C2410C;",
                    {copy::NO_FRIENDS}
                }
            }
        },
        ViewState::Ready(friends) => rsx! {
            HomeFrame {
                for friend in friends.iter() {
                    FriendRow { key: "{friend.id}", friend: friend.clone() }
                }
            }
        },
    }
}

/// Page header plus the white card that holds the list.
#[component]
fn HomeFrame(children: Element) -> Element {
    rsx! {
        div {
            style: theme::PAGE_WARM,
            div {
                style: theme::CONTAINER,
                div {
                    style: "text-align: center; margin-bottom: 48px;",
                    h1 {
                        style: "font-size: 48px; font-weight: bold; color: #9A3412; margin: 0 0 16px 0;",
                        {copy::HOME_TITLE}
                    }
                    p {
                        style: "font-size: 20px; color: #C2410C; margin: 0;",
                        {copy::HOST_NAME}
                    }
                    p {
                        style: "font-size: 18px; color: #EA580C; margin: 8px 0 0 0;",
                        {copy::HOME_SUBTITLE}
                    }
                }
                div {
                    style: theme::CARD,
                    h2 {
                        style: "font-size: 30px; font-weight: bold; text-align: center; color: #9A3412; margin: 0 0 32px 0;",
                        {copy::FRIEND_LIST_HEADING}
                    }
                    {children}
                }
            }
        }
    }
}
