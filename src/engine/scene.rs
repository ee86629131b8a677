//! SceneGraph - In-memory reference host.
//!
//! A small retained tree implementing [`LayoutHost`], used by the test suite
//! and by hosts that want something to start from:
//! - Generational slots with a free list for O(1) reuse
//! - Recursive destroy with per-node destroy callbacks
//! - Structural change log (which parents had children added/removed/moved)
//! - Dirty set for layout rebuild requests, deduplicated until drained
//! - Recorded tween requests in place of a real animation backend

use std::collections::HashMap;
use std::rc::Rc;

use taffy::{Point, Size};

use crate::error::SceneError;
use crate::transition::{AnimatedElement, Ease};
use crate::types::{Axis, ZERO_POINT, ZERO_SIZE};

use super::{DrivenProperties, LayoutHost, LayoutIgnorer, NodeId, SizeSource};

// =============================================================================
// Node Storage
// =============================================================================

struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    active: bool,
    min_size: Size<f32>,
    preferred_size: Size<f32>,
    position: Point<f32>,
    size: Size<f32>,
    pivot: Point<f32>,
    anchor_min: Point<f32>,
    anchor_max: Point<f32>,
    ignorer: Option<Rc<dyn LayoutIgnorer>>,
    animator: Option<Rc<dyn AnimatedElement>>,
    driven: HashMap<NodeId, DrivenProperties>,
}

impl Node {
    fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            children: Vec::new(),
            active: true,
            min_size: ZERO_SIZE,
            preferred_size: ZERO_SIZE,
            position: ZERO_POINT,
            size: ZERO_SIZE,
            pivot: Point { x: 0.5, y: 0.5 },
            anchor_min: Point { x: 0.5, y: 0.5 },
            anchor_max: Point { x: 0.5, y: 0.5 },
            ignorer: None,
            animator: None,
            driven: HashMap::new(),
        }
    }
}

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// A position tween the host was asked to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenRequest {
    pub node: NodeId,
    pub from: Point<f32>,
    pub target: Point<f32>,
    pub duration: f32,
    pub ease: Ease,
}

// =============================================================================
// SceneGraph
// =============================================================================

/// Reference scene graph.
#[derive(Default)]
pub struct SceneGraph {
    slots: Vec<Slot>,
    free: Vec<u32>,
    destroy_callbacks: HashMap<NodeId, Vec<Box<dyn FnOnce()>>>,
    changed_parents: Vec<NodeId>,
    dirty: Vec<NodeId>,
    rebuild_requests: usize,
    rebuilding: bool,
    tweens: Vec<TweenRequest>,
    killed: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Allocation
    // -------------------------------------------------------------------------

    /// Create a detached root node.
    pub fn create_node(&mut self) -> NodeId {
        self.allocate(None)
    }

    /// Create a node appended to `parent`'s children.
    pub fn create_child(&mut self, parent: NodeId) -> Result<NodeId, SceneError> {
        if !self.is_alive(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        let child = self.allocate(Some(parent));
        if let Some(node) = self.node_mut(parent) {
            node.children.push(child);
        }
        self.mark_changed(parent);
        Ok(child)
    }

    fn allocate(&mut self, parent: Option<NodeId>) -> NodeId {
        // Reuse a free slot or grow
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(Node::new(parent));
            NodeId { index, generation: slot.generation }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot { generation: 0, node: Some(Node::new(parent)) });
            NodeId { index, generation: 0 }
        }
    }

    /// Destroy a node and, recursively, all its children.
    ///
    /// Handles to destroyed nodes stay defunct forever, even after the slot is
    /// reused.
    pub fn destroy(&mut self, id: NodeId) {
        let Some(node) = self.node(id) else { return };
        let children = node.children.clone();
        let parent = node.parent;

        for child in children {
            self.destroy(child);
        }

        if let Some(callbacks) = self.destroy_callbacks.remove(&id) {
            for callback in callbacks {
                callback();
            }
        }

        if let Some(parent) = parent {
            if let Some(parent_node) = self.node_mut(parent) {
                parent_node.children.retain(|c| *c != id);
            }
            self.mark_changed(parent);
        }

        self.tweens.retain(|t| t.node != id);
        self.dirty.retain(|d| *d != id);
        self.changed_parents.retain(|p| *p != id);

        let slot = &mut self.slots[id.index as usize];
        slot.node = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
    }

    /// Register a callback to run when `id` is destroyed.
    pub fn on_destroy(&mut self, id: NodeId, callback: impl FnOnce() + 'static) {
        self.destroy_callbacks.entry(id).or_default().push(Box::new(callback));
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.slots.iter().filter(|s| s.node.is_some()).count()
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Move `child` to the end of `parent`'s children.
    pub fn set_parent(&mut self, child: NodeId, parent: NodeId) -> Result<(), SceneError> {
        let len = self
            .node(parent)
            .map(|n| n.children.len())
            .ok_or(SceneError::UnknownNode(parent))?;
        self.insert_child(parent, len, child)
    }

    /// Insert `child` into `parent`'s children at `index` (clamped).
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), SceneError> {
        if !self.is_alive(parent) {
            return Err(SceneError::UnknownNode(parent));
        }
        if !self.is_alive(child) {
            return Err(SceneError::UnknownNode(child));
        }
        if parent == child {
            return Err(SceneError::SelfParent(child));
        }
        // Walk up from parent: finding child means a cycle
        let mut cursor = self.node(parent).and_then(|n| n.parent);
        while let Some(ancestor) = cursor {
            if ancestor == child {
                return Err(SceneError::Cycle { parent, child });
            }
            cursor = self.node(ancestor).and_then(|n| n.parent);
        }

        self.detach(child);

        if let Some(node) = self.node_mut(parent) {
            let index = index.min(node.children.len());
            node.children.insert(index, child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = Some(parent);
        }
        self.mark_changed(parent);
        Ok(())
    }

    /// Move `child` to `index` among its siblings.
    pub fn set_sibling_index(&mut self, child: NodeId, index: usize) -> Result<(), SceneError> {
        let parent = self
            .node(child)
            .ok_or(SceneError::UnknownNode(child))?
            .parent
            .ok_or(SceneError::UnknownNode(child))?;
        self.insert_child(parent, index, child)
    }

    /// Detach `child` from its parent, leaving it as a root.
    pub fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.node(child).and_then(|n| n.parent) else { return };
        if let Some(node) = self.node_mut(parent) {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.node_mut(child) {
            node.parent = None;
        }
        self.mark_changed(parent);
    }

    /// Activate or deactivate a node. Inactive children are skipped by
    /// [`LayoutHost::active_children`].
    pub fn set_active(&mut self, id: NodeId, active: bool) -> Result<(), SceneError> {
        let node = self.node_mut(id).ok_or(SceneError::UnknownNode(id))?;
        if node.active == active {
            return Ok(());
        }
        node.active = active;
        let parent = node.parent;
        if let Some(parent) = parent {
            self.mark_changed(parent);
        }
        Ok(())
    }

    /// All children of `id`, active or not.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id).map(|n| n.children.clone()).unwrap_or_default()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Parents whose child set changed since the last call, in first-change order.
    pub fn take_changed_parents(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.changed_parents)
    }

    fn mark_changed(&mut self, parent: NodeId) {
        if !self.changed_parents.contains(&parent) {
            self.changed_parents.push(parent);
        }
    }

    // -------------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------------

    pub fn set_min_size(&mut self, id: NodeId, size: Size<f32>) -> Result<(), SceneError> {
        self.node_mut(id).ok_or(SceneError::UnknownNode(id))?.min_size = size;
        Ok(())
    }

    pub fn set_preferred_size(&mut self, id: NodeId, size: Size<f32>) -> Result<(), SceneError> {
        self.node_mut(id).ok_or(SceneError::UnknownNode(id))?.preferred_size = size;
        Ok(())
    }

    pub fn set_layout_ignorer(
        &mut self,
        id: NodeId,
        ignorer: Option<Rc<dyn LayoutIgnorer>>,
    ) -> Result<(), SceneError> {
        self.node_mut(id).ok_or(SceneError::UnknownNode(id))?.ignorer = ignorer;
        Ok(())
    }

    pub fn set_animated_element(
        &mut self,
        id: NodeId,
        animator: Option<Rc<dyn AnimatedElement>>,
    ) -> Result<(), SceneError> {
        self.node_mut(id).ok_or(SceneError::UnknownNode(id))?.animator = animator;
        Ok(())
    }

    pub fn size(&self, id: NodeId) -> Option<Size<f32>> {
        self.node(id).map(|n| n.size)
    }

    pub fn pivot(&self, id: NodeId) -> Option<Point<f32>> {
        self.node(id).map(|n| n.pivot)
    }

    pub fn anchors(&self, id: NodeId) -> Option<(Point<f32>, Point<f32>)> {
        self.node(id).map(|n| (n.anchor_min, n.anchor_max))
    }

    /// Union of every claim held on `id`.
    pub fn driven(&self, id: NodeId) -> DrivenProperties {
        self.node(id)
            .map(|n| n.driven.values().fold(DrivenProperties::empty(), |acc, p| acc | *p))
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Layout Rebuild Queue
    // -------------------------------------------------------------------------

    /// Enter or leave the host's layout pass.
    pub fn set_rebuilding(&mut self, rebuilding: bool) {
        self.rebuilding = rebuilding;
    }

    /// Containers waiting for a layout pass. Drains the queue.
    pub fn take_dirty(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.dirty)
    }

    pub fn is_dirty(&self, id: NodeId) -> bool {
        self.dirty.contains(&id)
    }

    /// Total rebuild requests received, including deduplicated ones.
    pub fn rebuild_request_count(&self) -> usize {
        self.rebuild_requests
    }

    // -------------------------------------------------------------------------
    // Tweens
    // -------------------------------------------------------------------------

    /// Tweens requested and not yet finished or killed.
    pub fn tweens(&self) -> &[TweenRequest] {
        &self.tweens
    }

    /// Nodes whose tweens were killed, in call order.
    pub fn killed_tweens(&self) -> &[NodeId] {
        &self.killed
    }

    /// Nodes whose tweens were killed since the last call. Drains the log.
    pub fn take_killed_tweens(&mut self) -> Vec<NodeId> {
        std::mem::take(&mut self.killed)
    }

    /// Jump every running tween to its end.
    pub fn finish_tweens(&mut self) {
        for tween in std::mem::take(&mut self.tweens) {
            if let Some(node) = self.node_mut(tween.node) {
                node.position = tween.target;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Internal
    // -------------------------------------------------------------------------

    fn node(&self, id: NodeId) -> Option<&Node> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_ref()
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.node.as_mut()
    }
}

// =============================================================================
// Host Implementation
// =============================================================================

impl SizeSource for SceneGraph {
    fn is_alive(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    fn min_size(&self, node: NodeId, axis: Axis) -> Option<f32> {
        self.node(node).map(|n| axis.extent(n.min_size))
    }

    fn preferred_size(&self, node: NodeId, axis: Axis) -> Option<f32> {
        self.node(node).map(|n| axis.extent(n.preferred_size))
    }
}

impl LayoutHost for SceneGraph {
    fn active_children(&self, container: NodeId) -> Vec<NodeId> {
        let Some(node) = self.node(container) else { return Vec::new() };
        node.children
            .iter()
            .copied()
            .filter(|c| self.node(*c).is_some_and(|n| n.active))
            .collect()
    }

    fn rect_size(&self, node: NodeId) -> Option<Size<f32>> {
        self.size(node)
    }

    fn position(&self, node: NodeId) -> Option<Point<f32>> {
        self.node(node).map(|n| n.position)
    }

    fn set_position(&mut self, node: NodeId, position: Point<f32>) {
        if let Some(n) = self.node_mut(node) {
            n.position = position;
        }
    }

    fn set_size(&mut self, node: NodeId, size: Size<f32>) {
        if let Some(n) = self.node_mut(node) {
            n.size = size;
        }
    }

    fn set_pivot(&mut self, node: NodeId, pivot: Point<f32>) {
        if let Some(n) = self.node_mut(node) {
            n.pivot = pivot;
        }
    }

    fn set_anchors(&mut self, node: NodeId, min: Point<f32>, max: Point<f32>) {
        if let Some(n) = self.node_mut(node) {
            n.anchor_min = min;
            n.anchor_max = max;
        }
    }

    fn layout_ignorer(&self, node: NodeId) -> Option<Rc<dyn LayoutIgnorer>> {
        self.node(node).and_then(|n| n.ignorer.clone())
    }

    fn animated_element(&self, node: NodeId) -> Option<Rc<dyn AnimatedElement>> {
        self.node(node).and_then(|n| n.animator.clone())
    }

    fn request_layout_rebuild(&mut self, container: NodeId) {
        self.rebuild_requests += 1;
        if self.is_alive(container) && !self.dirty.contains(&container) {
            self.dirty.push(container);
        }
    }

    fn is_rebuilding_layout(&self) -> bool {
        self.rebuilding
    }

    fn claim_driven(&mut self, owner: NodeId, node: NodeId, properties: DrivenProperties) {
        if let Some(n) = self.node_mut(node) {
            *n.driven.entry(owner).or_default() |= properties;
        }
    }

    fn release_driven(&mut self, owner: NodeId, node: NodeId) {
        if let Some(n) = self.node_mut(node) {
            n.driven.remove(&owner);
        }
    }

    fn tween_position(&mut self, node: NodeId, target: Point<f32>, duration: f32, ease: Ease) {
        let Some(from) = self.position(node) else { return };
        self.tweens.push(TweenRequest { node, from, target, duration, ease });
    }

    fn kill_tweens(&mut self, node: NodeId) {
        self.tweens.retain(|t| t.node != node);
        self.killed.push(node);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_create_and_enumerate_children() {
        let mut scene = SceneGraph::new();
        let root = scene.create_node();
        let a = scene.create_child(root).unwrap();
        let b = scene.create_child(root).unwrap();

        assert_eq!(scene.children(root), vec![a, b]);
        assert_eq!(scene.active_children(root), vec![a, b]);
        assert_eq!(scene.parent(a), Some(root));
        assert_eq!(scene.take_changed_parents(), vec![root]);
        assert!(scene.take_changed_parents().is_empty());
    }

    #[test]
    fn test_inactive_children_are_filtered() {
        let mut scene = SceneGraph::new();
        let root = scene.create_node();
        let a = scene.create_child(root).unwrap();
        let b = scene.create_child(root).unwrap();

        scene.set_active(a, false).unwrap();
        assert_eq!(scene.active_children(root), vec![b]);
        assert_eq!(scene.children(root), vec![a, b]);
    }

    #[test]
    fn test_destroy_is_recursive_and_handles_stay_defunct() {
        let mut scene = SceneGraph::new();
        let root = scene.create_node();
        let a = scene.create_child(root).unwrap();
        let grandchild = scene.create_child(a).unwrap();

        scene.destroy(a);
        assert!(!scene.is_alive(a));
        assert!(!scene.is_alive(grandchild));
        assert!(scene.children(root).is_empty());

        // Slot reuse must not resurrect the old handle
        let reused = scene.create_node();
        assert!(reused.index() == a.index() || reused.index() == grandchild.index());
        assert_ne!(reused, a);
        assert_ne!(reused, grandchild);
        assert!(!scene.is_alive(a));
        assert_eq!(scene.min_size(a, Axis::Vertical), None);
    }

    #[test]
    fn test_destroy_callback() {
        let mut scene = SceneGraph::new();
        let node = scene.create_node();
        let called = Rc::new(Cell::new(false));
        let called_clone = called.clone();

        scene.on_destroy(node, move || called_clone.set(true));
        assert!(!called.get());
        scene.destroy(node);
        assert!(called.get());
    }

    #[test]
    fn test_reparent_rejects_cycles() {
        let mut scene = SceneGraph::new();
        let root = scene.create_node();
        let a = scene.create_child(root).unwrap();
        let b = scene.create_child(a).unwrap();

        assert_eq!(scene.set_parent(root, b), Err(SceneError::Cycle { parent: b, child: root }));
        assert_eq!(scene.set_parent(a, a), Err(SceneError::SelfParent(a)));
    }

    #[test]
    fn test_sibling_reorder() {
        let mut scene = SceneGraph::new();
        let root = scene.create_node();
        let a = scene.create_child(root).unwrap();
        let b = scene.create_child(root).unwrap();
        let c = scene.create_child(root).unwrap();

        scene.set_sibling_index(c, 0).unwrap();
        assert_eq!(scene.children(root), vec![c, a, b]);
    }

    #[test]
    fn test_rebuild_requests_are_deduplicated() {
        let mut scene = SceneGraph::new();
        let root = scene.create_node();

        scene.request_layout_rebuild(root);
        scene.request_layout_rebuild(root);
        assert_eq!(scene.rebuild_request_count(), 2);
        assert_eq!(scene.take_dirty(), vec![root]);
        assert!(scene.take_dirty().is_empty());
    }

    #[test]
    fn test_tweens_are_recorded_and_finished() {
        let mut scene = SceneGraph::new();
        let node = scene.create_node();
        let target = Point { x: 4.0, y: -8.0 };

        scene.tween_position(node, target, 0.25, Ease::OutQuad);
        assert_eq!(scene.tweens().len(), 1);
        assert_eq!(scene.position(node), Some(ZERO_POINT));

        scene.finish_tweens();
        assert_eq!(scene.position(node), Some(target));
        assert!(scene.tweens().is_empty());
    }

    #[test]
    fn test_killed_tween_log_is_drained() {
        let mut scene = SceneGraph::new();
        let a = scene.create_node();
        let b = scene.create_node();

        scene.kill_tweens(a);
        scene.kill_tweens(b);
        assert_eq!(scene.take_killed_tweens(), vec![a, b]);
        assert!(scene.killed_tweens().is_empty());
        assert!(scene.take_killed_tweens().is_empty());
    }
}
