//! Full-page status message (loading, not found).

use crate::theme;
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tone {
    #[default]
    Info,
    Error,
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusScreenProps {
    pub message: String,
    #[props(default)]
    pub tone: Tone,
}

/// Centers a single line of text on the page gradient.
#[component]
pub fn StatusScreen(props: StatusScreenProps) -> Element {
    let text_style = match props.tone {
        Tone::Info => theme::STATUS_TEXT,
        Tone::Error => theme::STATUS_ERROR,
    };

    rsx! {
        div {
            style: theme::PAGE_CENTERED,
            div {
                style: text_style,
                "{props.message}"
            }
        }
    }
}
