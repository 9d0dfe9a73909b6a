//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the static chrome of the paused dashboard: all of them
//! are plain functions from `const` configuration to markup, with no state
//! and no effects.

pub mod pause_overlay;
pub mod site_header;
pub mod social_links;
