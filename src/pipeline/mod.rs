//! Pipeline - driving lists through the host's frame.
//!
//! # Frame Flow
//!
//! ```text
//! structural change → on_children_changed ┐
//! rect resize       → on_dimensions_changed ├─▶ pending flag
//! config update     → set_config            ┘        │
//!                                                  tick ─▶ request_layout_rebuild
//!                                                              │
//!                              rebuild_layout: input(H) → input(V) → set(H) → set(V)
//! ```
//!
//! - **list** - [`AnimatedList`], the orchestrator and its state machine
//! - **frame** - the host-side driver: [`rebuild_layout`] runs the two-phase
//!   protocol for one participant, [`run_frame`] runs a whole tick against a
//!   [`SceneGraph`](crate::engine::SceneGraph)

mod frame;
mod list;

pub use frame::{rebuild_layout, run_frame, FrameReport};
pub use list::{AnimatedList, ListState, PendingChange};

use crate::engine::LayoutHost;
use crate::types::{Axis, SizeReport};

/// The contract a container offers its host's layout engine.
///
/// Hosts call `calculate_layout_input` for both axes, read the reports, then
/// call `set_layout` for both axes once the container's rect is final.
pub trait LayoutParticipant {
    fn calculate_layout_input(&mut self, axis: Axis, host: &dyn LayoutHost);
    fn size_report(&self, axis: Axis) -> SizeReport;
    fn set_layout(&mut self, axis: Axis, host: &mut dyn LayoutHost);
}
