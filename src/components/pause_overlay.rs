//! Full-viewport announcement overlay shown while the live backend is paused.

use leptos::prelude::*;

use crate::components::social_links::{RowVariant, SocialLinks};
use crate::util::external_link::{EXTERNAL_REL, EXTERNAL_TARGET};

#[cfg(test)]
#[path = "pause_overlay_test.rs"]
mod pause_overlay_test;

#[derive(Clone, Copy)]
struct ResourceLink {
    id: &'static str,
    label: &'static str,
    href: &'static str,
    description: &'static str,
}

const RESOURCE_LINKS: &[ResourceLink] = &[
    ResourceLink {
        id: "docs",
        label: "文档",
        href: "https://wquguru.gitbook.io/nof0",
        description: "产品背景与 Roadmap",
    },
    ResourceLink {
        id: "prompt",
        label: "逆向提示词",
        href: "https://gist.github.com/wquguru/7d268099b8c04b7e5b6ad6fae922ae83",
        description: "复盘当前策略提示词",
    },
];

const BADGE_LABEL: &str = "公告";
const HEADLINE: &str = "第一季度已经结束，100%开源后端正在开发中";
const DETAIL: &str = "/api/nof1 接口已暂停，现有页面内容暂为静态展示。我们正自建后端，\
完成后会第一时间恢复交互与数据推送。";
const CHANNELS_LABEL: &str = "主要渠道";
const RESOURCES_LABEL: &str = "更多资源";

/// Fixed overlay covering everything below the header: announcement copy,
/// the large social row, and two resource-link cards. Always rendered when
/// mounted; showing or hiding it is the parent's decision.
#[component]
pub fn PauseOverlay() -> impl IntoView {
    view! {
        <div class="pause-overlay" aria-live="polite">
            <div class="pause-overlay__backdrop" style:background="var(--background)"></div>
            <div class="pause-overlay__center">
                <div
                    class="pause-overlay__card"
                    style:border-color="var(--panel-border)"
                    style:color="var(--foreground)"
                >
                    <div class="pause-overlay__badge" style:color="var(--muted-text)">
                        {BADGE_LABEL}
                    </div>
                    <div class="pause-overlay__copy">
                        <p class="pause-overlay__headline">{HEADLINE}</p>
                        <p class="pause-overlay__detail" style:color="var(--muted-text)">
                            {DETAIL}
                        </p>
                    </div>
                    <div class="pause-overlay__section">
                        <div class="pause-overlay__section-label" style:color="var(--muted-text)">
                            {CHANNELS_LABEL}
                        </div>
                        <SocialLinks variant=RowVariant::Overlay class="social-links--center"/>
                    </div>
                    <div class="pause-overlay__section">
                        <div class="pause-overlay__section-label" style:color="var(--muted-text)">
                            {RESOURCES_LABEL}
                        </div>
                        <div class="pause-overlay__resources">
                            {RESOURCE_LINKS
                                .iter()
                                .map(|item| {
                                    let item = *item;
                                    view! {
                                        <a
                                            class="pause-overlay__resource"
                                            href=item.href
                                            target=EXTERNAL_TARGET
                                            rel=EXTERNAL_REL
                                            style:border-color="var(--panel-border)"
                                        >
                                            <div class="pause-overlay__resource-label">
                                                {item.label}
                                            </div>
                                            <p
                                                class="pause-overlay__resource-desc"
                                                style:color="var(--muted-text)"
                                            >
                                                {item.description}
                                            </p>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
