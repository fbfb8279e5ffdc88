use crate::components::HomeLink;
use crate::copy;
use crate::theme;
use dioxus::prelude::*;

/// Fallback for any path outside the three known routes.
#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    log::warn!("No route for /{}", segments.join("/"));

    rsx! {
        div {
            style: theme::PAGE_CENTERED,
            div {
                style: "text-align: center;",
                div {
                    style: theme::STATUS_ERROR,
                    {copy::PAGE_NOT_FOUND}
                }
                div {
                    style: "margin-top: 24px;",
                    HomeLink {}
                }
            }
        }
    }
}
