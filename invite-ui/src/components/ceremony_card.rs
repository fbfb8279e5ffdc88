//! The personalized ceremony invitation card.

use crate::copy;
use crate::theme;
use dioxus::prelude::*;
use invite_api::CeremonyDetails;

#[derive(Props, Clone, PartialEq)]
pub struct CeremonyCardProps {
    pub details: CeremonyDetails,
}

/// University header, hero banner, graduate and major, the invitee's name and
/// the time/venue blocks.
#[component]
pub fn CeremonyCard(props: CeremonyCardProps) -> Element {
    let info = &props.details.info;
    let friend = &props.details.friend;
    let graduate = info.headline_name();
    let major = info.headline_major();
    let schedule = info.schedule();
    let invitee = format!("{} {}", copy::INVITEE_PREFIX, friend.name);

    rsx! {
        div {
            style: "text-align: center; margin-bottom: 32px; color: #9A3412;",
            div {
                style: "font-size: 14px; font-weight: 500; margin-bottom: 8px;",
                {copy::ORGANIZATION}
            }
            div {
                style: "font-size: 18px; font-weight: bold;",
                {copy::UNIVERSITY}
            }
        }

        div {
            style: theme::CARD_WIDE,
            div {
                style: theme::HERO,
                h1 {
                    style: "font-size: 60px; font-weight: bold; color: white; margin: 0 0 16px 0; letter-spacing: 0.025em;",
                    {copy::HERO_TITLE}
                }
                h2 {
                    style: "font-size: 60px; font-weight: bold; color: white; margin: 0 0 16px 0; letter-spacing: 0.025em;",
                    {copy::HERO_SUBTITLE}
                    span {
                        style: "font-size: 36px; margin-left: 16px; color: #FEF08A;",
                        {copy::HERO_YEAR}
                    }
                }
                p {
                    style: "font-size: 24px; color: rgba(255, 255, 255, 0.9); font-style: italic; font-weight: 300; margin: 0;",
                    {copy::TAGLINE}
                }
            }

            div {
                style: "padding: 32px; text-align: center;",
                div {
                    style: "margin-bottom: 32px;",
                    h3 {
                        style: "font-size: 24px; font-weight: bold; color: #1F2937; margin: 0 0 8px 0;",
                        {copy::GRADUATE_LABEL}
                    }
                    h2 {
                        style: "font-size: 36px; font-weight: bold; color: #9A3412; margin: 0;",
                        "{graduate}"
                    }
                }
                div {
                    style: "margin-bottom: 32px;",
                    h4 {
                        style: "font-size: 20px; font-weight: 600; color: #374151; margin: 0 0 8px 0;",
                        {copy::MAJOR_LABEL}
                    }
                    p {
                        style: "font-size: 24px; font-weight: 500; color: #C2410C; margin: 0;",
                        "{major}"
                    }
                }

                div {
                    style: theme::HIGHLIGHT,
                    p {
                        style: "font-size: 20px; font-weight: 600; font-style: italic; color: #9A3412; margin: 0;",
                        "{invitee}"
                    }
                }

                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 24px; font-size: 18px;",
                    div {
                        style: theme::INFO_BLOCK,
                        div {
                            style: "margin-bottom: 12px; font-weight: bold; color: #9A3412;",
                            span { style: "font-size: 24px; margin-right: 8px;", "⏰" }
                            {copy::TIME_LABEL}
                        }
                        p {
                            style: "font-weight: 500; color: #C2410C; margin: 0;",
                            "{schedule}"
                        }
                    }
                    div {
                        style: theme::INFO_BLOCK_ALT,
                        div {
                            style: "margin-bottom: 12px; font-weight: bold; color: #9A3412;",
                            span { style: "font-size: 24px; margin-right: 8px;", "📍" }
                            {copy::VENUE_LABEL}
                        }
                        p {
                            style: "font-weight: 500; color: #C2410C; margin: 0;",
                            "{info.location}"
                        }
                    }
                }

                div {
                    style: "margin-top: 24px; border-radius: 16px; padding: 24px; background: linear-gradient(90deg, #FFF7ED, #FEFCE8);",
                    p {
                        style: "font-weight: 500; color: #C2410C; line-height: 1.6; margin: 0;",
                        "{info.address}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_api::{Friend, GraduationInfo};

    fn details() -> CeremonyDetails {
        CeremonyDetails {
            friend: Friend {
                id: "42".to_string(),
                name: "Giang".to_string(),
            },
            info: GraduationInfo {
                graduate_name: "Nguyen Van Tuyen".to_string(),
                major: "Software Engineering".to_string(),
                date: "19/08/2025".to_string(),
                time: "14:00".to_string(),
                location: "FPT University Hanoi".to_string(),
                address: "Hoa Lac Hi-Tech Park, Thach That, Hanoi".to_string(),
            },
        }
    }

    fn render() -> String {
        let mut dom = VirtualDom::new_with_props(
            CeremonyCard,
            CeremonyCardProps { details: details() },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_personalized_for_invitee() {
        assert!(render().contains("This invitation is for: Giang"));
    }

    #[test]
    fn test_graduate_and_major_uppercased() {
        let html = render();
        assert!(html.contains("NGUYEN VAN TUYEN"));
        assert!(html.contains("SOFTWARE ENGINEERING"));
        assert!(!html.contains("Nguyen Van Tuyen"));
    }

    #[test]
    fn test_schedule_and_venue() {
        let html = render();
        assert!(html.contains("14:00 - 19/08/2025"));
        assert!(html.contains("FPT University Hanoi"));
        assert!(html.contains("Hoa Lac Hi-Tech Park, Thach That, Hanoi"));
    }
}
