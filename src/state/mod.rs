//! State - per-frame helpers that follow a list's children.
//!
//! - **scroll** - keep a scroll view centred on a child, or pinned

pub mod scroll;

pub use scroll::{scroll_value_for_target, AutoScrollToTarget, ScrollPin, ScrollView};
