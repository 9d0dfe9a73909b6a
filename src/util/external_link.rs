//! Shared attributes for anchors that leave the app.
//!
//! DESIGN
//! ======
//! Every outbound anchor must open a detached browsing context: the new tab
//! gets no `window.opener` handle and no referrer. Centralizing the two
//! attribute values keeps the social row and the overlay cards in agreement.

#[cfg(test)]
#[path = "external_link_test.rs"]
mod external_link_test;

/// `target` attribute for outbound anchors.
pub const EXTERNAL_TARGET: &str = "_blank";

/// `rel` attribute for outbound anchors.
pub const EXTERNAL_REL: &str = "noopener noreferrer";
