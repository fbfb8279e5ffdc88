use crate::copy;
use crate::route::Route;
use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HomeLinkProps {
    /// Render as a filled button instead of an underlined link
    #[props(default)]
    pub button: bool,
}

/// "Back to homepage" link.
#[component]
pub fn HomeLink(props: HomeLinkProps) -> Element {
    let style = if props.button {
        theme::SECONDARY_BUTTON
    } else {
        theme::TEXT_LINK
    };

    rsx! {
        Link {
            to: Route::Home {},
            span {
                style: style,
                {copy::BACK_HOME}
            }
        }
    }
}
