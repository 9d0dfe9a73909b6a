use super::*;

#[test]
fn overlay_offers_exactly_two_resources() {
    assert_eq!(RESOURCE_LINKS.len(), 2);

    let mut ids: Vec<&str> = RESOURCE_LINKS.iter().map(|item| item.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), RESOURCE_LINKS.len(), "resource ids must be distinct");
}

#[test]
fn docs_card_points_at_the_handbook() {
    let docs = &RESOURCE_LINKS[0];
    assert_eq!(docs.id, "docs");
    assert_eq!(docs.label, "文档");
    assert_eq!(docs.href, "https://wquguru.gitbook.io/nof0");
    assert_eq!(docs.description, "产品背景与 Roadmap");
}

#[test]
fn prompt_card_points_at_the_gist() {
    let prompt = &RESOURCE_LINKS[1];
    assert_eq!(prompt.id, "prompt");
    assert_eq!(prompt.label, "逆向提示词");
    assert_eq!(prompt.href, "https://gist.github.com/wquguru/7d268099b8c04b7e5b6ad6fae922ae83");
    assert_eq!(prompt.description, "复盘当前策略提示词");
}

#[test]
fn every_resource_card_is_complete() {
    for item in RESOURCE_LINKS {
        assert!(!item.label.is_empty(), "{} needs a label", item.id);
        assert!(!item.description.is_empty(), "{} needs a description", item.id);
        assert!(item.href.starts_with("https://"), "{} must be an absolute URL", item.id);
    }
}

#[test]
fn announcement_copy_is_present() {
    assert!(!BADGE_LABEL.is_empty());
    assert!(!HEADLINE.is_empty());
    assert!(!DETAIL.is_empty());
    assert!(!CHANNELS_LABEL.is_empty());
    assert!(!RESOURCES_LABEL.is_empty());
}
