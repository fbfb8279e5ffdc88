//! Reusable Dioxus RSX components for the invitation views.

mod ceremony_card;
mod friend_row;
mod home_link;
mod invitation_card;
mod status_screen;

pub use ceremony_card::CeremonyCard;
pub use friend_row::FriendRow;
pub use home_link::HomeLink;
pub use invitation_card::InvitationCard;
pub use status_screen::{StatusScreen, Tone};
