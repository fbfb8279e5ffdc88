use crate::copy;
use crate::theme;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct InvitationCardProps {
    /// Actions rendered under the message (confirm button, back link)
    pub children: Element,
}

/// Date-confirmation card shown on the invitation page.
#[component]
pub fn InvitationCard(props: InvitationCardProps) -> Element {
    rsx! {
        div {
            style: theme::CARD_NARROW,
            div {
                style: "margin-bottom: 32px;",
                h1 {
                    style: "font-size: 36px; font-weight: bold; color: #1F2937; margin: 0 0 16px 0;",
                    {copy::INVITATION_DATE}
                }
                div {
                    style: "width: 64px; height: 4px; background: #EF4444; margin: 0 auto 24px auto;",
                }
                p {
                    style: "font-size: 18px; font-weight: 600; color: #DC2626; line-height: 1.6;",
                    {copy::INVITATION_MESSAGE}
                }
            }
            {props.children}
        }
    }
}
