//! Frame driver - one host tick for a set of lists.
//!
//! ```ignore
//! let mut lists = vec![AnimatedList::new(container, config)];
//! lists[0].on_enable(&mut scene);
//! loop {
//!     let report = run_frame(&mut lists, &mut scene);
//!     // render...
//! }
//! ```

use tracing::trace;

use crate::engine::{LayoutHost, NodeId, SceneGraph};
use crate::types::Axis;

use super::{AnimatedList, LayoutParticipant};

/// What one frame did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Lists told their children changed.
    pub notified: Vec<NodeId>,
    /// Lists whose tick requested a rebuild.
    pub requested: Vec<NodeId>,
    /// Lists laid out this frame.
    pub rebuilt: Vec<NodeId>,
}

/// Run the host's two-phase layout protocol for one participant.
///
/// The host's rebuilding flag is raised for the duration, so a list ticked
/// from inside a layout callback keeps its work pending.
pub fn rebuild_layout<P: LayoutParticipant + ?Sized>(participant: &mut P, scene: &mut SceneGraph) {
    scene.set_rebuilding(true);

    for axis in Axis::ALL {
        participant.calculate_layout_input(axis, &*scene);
    }
    for axis in Axis::ALL {
        participant.set_layout(axis, scene);
    }

    scene.set_rebuilding(false);
}

/// Run one tick:
/// 1. route structural changes to the lists owning the changed containers
/// 2. tick every list, draining pending rebuilds
/// 3. lay out every container the host was asked to rebuild
pub fn run_frame(lists: &mut [AnimatedList], scene: &mut SceneGraph) -> FrameReport {
    let mut report = FrameReport::default();

    for parent in scene.take_changed_parents() {
        for list in lists.iter_mut().filter(|l| l.container() == parent) {
            list.on_children_changed();
            report.notified.push(parent);
        }
    }

    for list in lists.iter_mut() {
        if list.tick(scene) {
            report.requested.push(list.container());
        }
    }

    for container in scene.take_dirty() {
        for list in lists.iter_mut().filter(|l| l.container() == container) {
            rebuild_layout(list, scene);
            report.rebuilt.push(container);
        }
    }

    trace!(
        notified = report.notified.len(),
        rebuilt = report.rebuilt.len(),
        "frame complete"
    );
    report
}

// =============================================================================
// Tests
// =============================================================================
