//! One component per route.

mod ceremony;
mod home;
mod invitation;
mod not_found;

pub use ceremony::Ceremony;
pub use home::Home;
pub use invitation::Invitation;
pub use not_found::PageNotFound;
