//! Host interface - what a list needs from the scene graph it lives in.
//!
//! The list never owns its children. It reads sizes, writes transforms and
//! probes optional capabilities through these traits, so the same layout code
//! runs against any retained-mode tree.

use std::fmt;
use std::rc::Rc;

use taffy::{Point, Size};

use crate::transition::{AnimatedElement, Ease};
use crate::types::Axis;

use super::DrivenProperties;

// =============================================================================
// Node Handle
// =============================================================================

/// Handle to a node in the host scene graph.
///
/// Generational: once a node is destroyed its slot may be reused, but the new
/// occupant gets a new generation and therefore a different handle. Equality
/// is identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

// =============================================================================
// Capabilities
// =============================================================================

/// Optional capability: a child that can opt out of layout.
pub trait LayoutIgnorer {
    fn ignore_layout(&self) -> bool;
}

/// A fixed ignore flag, for hosts that store it as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IgnoreLayout(pub bool);

impl LayoutIgnorer for IgnoreLayout {
    fn ignore_layout(&self) -> bool {
        self.0
    }
}

// =============================================================================
// Host Traits
// =============================================================================

/// Read-only size queries. `None` means the node is gone.
pub trait SizeSource {
    fn is_alive(&self, node: NodeId) -> bool;
    fn min_size(&self, node: NodeId, axis: Axis) -> Option<f32>;
    fn preferred_size(&self, node: NodeId, axis: Axis) -> Option<f32>;
}

/// Everything a list consumes from its host.
pub trait LayoutHost: SizeSource {
    /// Immediate children of `container`, in order, filtered to structurally
    /// active ones.
    fn active_children(&self, container: NodeId) -> Vec<NodeId>;

    /// Current size of a node's rect.
    fn rect_size(&self, node: NodeId) -> Option<Size<f32>>;

    fn position(&self, node: NodeId) -> Option<Point<f32>>;
    fn set_position(&mut self, node: NodeId, position: Point<f32>);
    fn set_size(&mut self, node: NodeId, size: Size<f32>);
    fn set_pivot(&mut self, node: NodeId, pivot: Point<f32>);
    fn set_anchors(&mut self, node: NodeId, min: Point<f32>, max: Point<f32>);

    fn layout_ignorer(&self, node: NodeId) -> Option<Rc<dyn LayoutIgnorer>>;
    fn animated_element(&self, node: NodeId) -> Option<Rc<dyn AnimatedElement>>;

    /// Mark `container` for a layout pass. Idempotent within a tick.
    fn request_layout_rebuild(&mut self, container: NodeId);

    /// Whether the host is currently inside its own layout pass.
    fn is_rebuilding_layout(&self) -> bool;

    /// Record that `owner` controls `properties` of `node`.
    fn claim_driven(&mut self, owner: NodeId, node: NodeId, properties: DrivenProperties);

    /// Drop every claim `owner` holds on `node`.
    fn release_driven(&mut self, owner: NodeId, node: NodeId);

    /// Start a position tween. Hosts without an animation backend snap.
    fn tween_position(&mut self, node: NodeId, target: Point<f32>, _duration: f32, _ease: Ease) {
        self.set_position(node, target);
    }

    /// Stop any tweens running on `node`.
    fn kill_tweens(&mut self, _node: NodeId) {}
}
