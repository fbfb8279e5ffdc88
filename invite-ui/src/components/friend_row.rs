use crate::copy;
use crate::route::Route;
use crate::theme;
use dioxus::prelude::*;
use invite_api::Friend;

#[derive(Props, Clone, PartialEq)]
pub struct FriendRowProps {
    pub friend: Friend,
}

/// One homepage entry, linking to the friend's invitation.
#[component]
pub fn FriendRow(props: FriendRowProps) -> Element {
    let friend = props.friend;

    rsx! {
        Link {
            to: Route::Invitation { friend_id: friend.id.clone().into() },
            div {
                style: theme::FRIEND_ROW,
                span {
                    style: "font-size: 20px; font-weight: 600; color: #9A3412;",
                    "{friend.name}"
                }
                span {
                    style: "font-weight: 500; color: #EA580C;",
                    {copy::OPEN_INVITATION_HINT}
                }
            }
        }
    }
}
