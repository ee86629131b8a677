//! Engine - the host boundary.
//!
//! A list does not own the tree its children live in. This module defines
//! what it needs from that tree and ships a reference implementation:
//! - Host: `NodeId` handles, `SizeSource` / `LayoutHost` traits, `LayoutIgnorer`
//! - Tracker: driven-property claims taken while children are positioned
//! - Mode: live vs preview execution signal
//! - Scene: `SceneGraph`, an in-memory host used by tests and demos

mod host;
mod mode;
mod scene;
mod tracker;

pub use host::*;
pub use mode::*;
pub use scene::*;
pub use tracker::*;
