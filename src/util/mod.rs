//! Utility helpers shared across UI modules.

pub mod external_link;
