//! Horizontal row of icon-only social link buttons.
//!
//! DESIGN
//! ======
//! One static table drives every rendering of the row, so the header chrome
//! and the pause overlay always agree on targets, ordering, and accessible
//! names. Variants only swap sizing classes; they never reorder or filter.

use leptos::prelude::*;

use crate::util::external_link::{EXTERNAL_REL, EXTERNAL_TARGET};

#[cfg(test)]
#[path = "social_links_test.rs"]
mod social_links_test;

/// Sizing presets for the row, named after the surface that embeds it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RowVariant {
    /// Compact buttons for the fixed header strip.
    #[default]
    Header,
    /// Large buttons for the pause overlay card.
    Overlay,
}

/// Class bundle resolved per variant: button size, icon size, item gap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct RowStyle {
    button_class: &'static str,
    icon_class: &'static str,
    gap_class: &'static str,
}

const fn row_style(variant: RowVariant) -> RowStyle {
    match variant {
        RowVariant::Header => RowStyle {
            button_class: "social-links__btn--sm",
            icon_class: "social-links__icon--sm",
            gap_class: "social-links--gap-sm",
        },
        RowVariant::Overlay => RowStyle {
            button_class: "social-links__btn--lg",
            icon_class: "social-links__icon--lg",
            gap_class: "social-links--gap-lg",
        },
    }
}

/// Full class list for the row container: base, variant gap, then any
/// caller-supplied classes.
fn row_class(variant: RowVariant, extra: Option<&'static str>) -> String {
    let gap = row_style(variant).gap_class;
    match extra {
        Some(extra) => format!("social-links {gap} {extra}"),
        None => format!("social-links {gap}"),
    }
}

/// Icon glyphs available to social links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SocialIcon {
    GitHub,
    X,
    Telegram,
}

/// One social destination: stable id, target URL, and accessible naming.
#[derive(Clone, Copy)]
struct SocialLink {
    id: &'static str,
    href: &'static str,
    label: &'static str,
    title: &'static str,
    icon: SocialIcon,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        id: "github",
        href: "https://github.com/wquguru/nof0",
        label: "Open GitHub repository",
        title: "GitHub",
        icon: SocialIcon::GitHub,
    },
    SocialLink {
        id: "x",
        href: "https://twitter.com/intent/follow?screen_name=wquguru",
        label: "Follow on X (Twitter)",
        title: "Follow on X",
        icon: SocialIcon::X,
    },
    SocialLink {
        id: "telegram",
        href: "https://t.me/nof0_ai",
        label: "Join Telegram group",
        title: "Join Telegram",
        icon: SocialIcon::Telegram,
    },
];

/// Horizontal list of icon-only anchor buttons, one per social channel.
///
/// `variant` selects the sizing preset (header chrome by default) and
/// `class` appends extra row classes for the embedding surface.
#[component]
pub fn SocialLinks(
    #[prop(optional)] variant: RowVariant,
    #[prop(optional)] class: Option<&'static str>,
) -> impl IntoView {
    let style = row_style(variant);

    view! {
        <div class=row_class(variant, class)>
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    let link = *link;
                    view! {
                        <a
                            class=format!("social-links__btn {}", style.button_class)
                            href=link.href
                            target=EXTERNAL_TARGET
                            rel=EXTERNAL_REL
                            aria-label=link.label
                            title=link.title
                            style:border-color="var(--chip-border)"
                            style:color="var(--btn-inactive-fg)"
                        >
                            <span
                                class=format!("social-links__icon {}", style.icon_class)
                                aria-hidden="true"
                            >
                                {render_icon(link.icon)}
                            </span>
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn render_icon(icon: SocialIcon) -> impl IntoView {
    match icon {
        SocialIcon::GitHub => view! {
            <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M12 .5C5.73.5.97 5.26.97 11.54c0 4.86 3.15 8.98 7.52 10.43.55.1.75-.24.75-.53 0-.26-.01-1.13-.02-2.05-3.06.67-3.71-1.3-3.71-1.3-.5-1.28-1.22-1.63-1.22-1.63-.99-.68.08-.67.08-.67 1.09.08 1.66 1.12 1.66 1.12.98 1.67 2.56 1.19 3.19.91.1-.71.38-1.19.69-1.46-2.44-.28-5.01-1.22-5.01-5.42 0-1.2.43-2.18 1.12-2.95-.11-.28-.49-1.42.11-2.96 0 0 .93-.3 3.05 1.13.89-.25 1.84-.38 2.79-.38.95 0 1.9.13 2.79.38 2.12-1.43 3.05-1.13 3.05-1.13.6 1.54.22 2.68.11 2.96.69.77 1.12 1.75 1.12 2.95 0 4.21-2.57 5.14-5.02 5.41.39.34.73 1.01.73 2.03 0 1.46-.01 2.63-.01 2.98 0 .29.19.64.75.53 4.37-1.45 7.52-5.57 7.52-10.43C23.03 5.26 18.27.5 12 .5z"/>
            </svg>
        }
        .into_any(),
        SocialIcon::X => view! {
            <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M18.244 2H21.5l-7.5 8.57L23 22h-6.555l-5.12-6.622L5.38 22H2.12l8.08-9.236L2 2h6.69l4.64 6.02L18.244 2zm-2.296 18h1.82L8.16 4H6.25l9.698 16z"/>
            </svg>
        }
        .into_any(),
        SocialIcon::Telegram => view! {
            <svg viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d="M21.04 3.16 3.45 10.2c-1.21.48-1.2 1.16-.22 1.46l4.5 1.4 10.43-6.6c.5-.3.96-.14.58.18l-8.45 7.5-.32 4.66c.47 0 .68-.22.93-.47l2.24-2.17 4.67 3.37c.85.47 1.45.23 1.66-.78L22.7 4.7c.3-1.21-.46-1.76-1.66-1.54Z"/>
            </svg>
        }
        .into_any(),
    }
}
