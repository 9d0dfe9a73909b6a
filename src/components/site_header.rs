//! Fixed top strip with the brand mark and the compact social row.
//!
//! The strip owns the `--header-h` band; the pause overlay starts directly
//! below it.

use leptos::prelude::*;

use crate::components::social_links::SocialLinks;

/// Site header: brand on the left, compact social links on the right.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header
            class="site-header"
            style:background="var(--background)"
            style:border-color="var(--panel-border)"
        >
            <a class="site-header__brand" href="/" style:color="var(--foreground)">
                "nof0"
            </a>
            <SocialLinks/>
        </header>
    }
}
