//! URL → view mapping.

use crate::views::{Ceremony, Home, Invitation, PageNotFound};
use dioxus::prelude::*;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    /// Friend list
    #[route("/")]
    Home {},
    /// Date confirmation for one friend
    #[route("/invite/:friend_id")]
    Invitation { friend_id: FriendId },
    /// Ceremony card for one friend
    #[route("/ceremony/:friend_id")]
    Ceremony { friend_id: FriendId },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Friend identifier as a single path segment.
///
/// `Display` percent-encodes every reserved character (`/` included), so an
/// identifier never spills into a second segment. The router percent-decodes
/// each segment before `FromStr` runs, so parsing takes the text as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FriendId(String);

impl FriendId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FriendId {
    fn from(id: String) -> Self {
        FriendId(id)
    }
}

impl From<&str> for FriendId {
    fn from(id: &str) -> Self {
        FriendId(id.to_string())
    }
}

impl fmt::Display for FriendId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&urlencoding::encode(&self.0))
    }
}

impl FromStr for FriendId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FriendId(s.to_string()))
    }
}
