use super::*;

#[test]
fn row_lists_every_channel_exactly_once() {
    assert_eq!(SOCIAL_LINKS.len(), 3);

    let mut ids: Vec<&str> = SOCIAL_LINKS.iter().map(|link| link.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), SOCIAL_LINKS.len(), "link ids must be distinct");
}

#[test]
fn links_keep_declaration_order_and_targets() {
    let hrefs: Vec<&str> = SOCIAL_LINKS.iter().map(|link| link.href).collect();
    assert_eq!(
        hrefs,
        vec![
            "https://github.com/wquguru/nof0",
            "https://twitter.com/intent/follow?screen_name=wquguru",
            "https://t.me/nof0_ai",
        ]
    );
}

#[test]
fn every_link_carries_accessible_naming() {
    for link in SOCIAL_LINKS {
        assert!(!link.label.is_empty(), "{} is missing an aria-label", link.id);
        assert!(!link.title.is_empty(), "{} is missing a tooltip title", link.id);
        assert!(link.href.starts_with("https://"), "{} must be an absolute URL", link.id);
    }
}

#[test]
fn icons_match_their_channels() {
    assert_eq!(SOCIAL_LINKS[0].icon, SocialIcon::GitHub);
    assert_eq!(SOCIAL_LINKS[1].icon, SocialIcon::X);
    assert_eq!(SOCIAL_LINKS[2].icon, SocialIcon::Telegram);
}

#[test]
fn header_is_the_default_variant() {
    assert_eq!(RowVariant::default(), RowVariant::Header);
}

#[test]
fn header_preset_uses_compact_classes() {
    let style = row_style(RowVariant::Header);
    assert_eq!(style.button_class, "social-links__btn--sm");
    assert_eq!(style.icon_class, "social-links__icon--sm");
    assert_eq!(style.gap_class, "social-links--gap-sm");
}

#[test]
fn overlay_preset_uses_large_classes() {
    let style = row_style(RowVariant::Overlay);
    assert_eq!(style.button_class, "social-links__btn--lg");
    assert_eq!(style.icon_class, "social-links__icon--lg");
    assert_eq!(style.gap_class, "social-links--gap-lg");
}

#[test]
fn presets_never_collide() {
    let header = row_style(RowVariant::Header);
    let overlay = row_style(RowVariant::Overlay);
    assert_ne!(header, overlay);
    assert_ne!(header.button_class, overlay.button_class);
    assert_ne!(header.icon_class, overlay.icon_class);
    assert_ne!(header.gap_class, overlay.gap_class);
}

#[test]
fn row_class_starts_from_the_base_class() {
    assert_eq!(
        row_class(RowVariant::Header, None),
        "social-links social-links--gap-sm"
    );
    assert_eq!(
        row_class(RowVariant::Overlay, None),
        "social-links social-links--gap-lg"
    );
}

#[test]
fn row_class_appends_caller_classes_last() {
    assert_eq!(
        row_class(RowVariant::Overlay, Some("social-links--center")),
        "social-links social-links--gap-lg social-links--center"
    );
}
