//! Driven-property tracker.
//!
//! While a list positions a child it "drives" that child's anchors, pivot,
//! position and size; the host should not let anything else edit them. The
//! tracker remembers which claims were taken so they can all be released at
//! once (before the next solve, or when the list is disabled).

use super::{LayoutHost, NodeId};

bitflags::bitflags! {
    /// Transform properties a list takes control of.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DrivenProperties: u8 {
        const ANCHORS = 1 << 0;
        const PIVOT = 1 << 1;
        const POSITION = 1 << 2;
        const SIZE = 1 << 3;
    }
}

impl DrivenProperties {
    /// Everything a list sets on a placed child.
    pub const LAYOUT: DrivenProperties = DrivenProperties::ANCHORS
        .union(DrivenProperties::PIVOT)
        .union(DrivenProperties::POSITION)
        .union(DrivenProperties::SIZE);
}

/// Claims held by one owner.
#[derive(Debug, Default)]
pub struct DrivenTracker {
    claims: Vec<NodeId>,
}

impl DrivenTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `properties` of `node` on behalf of `owner`.
    pub fn add(
        &mut self,
        host: &mut dyn LayoutHost,
        owner: NodeId,
        node: NodeId,
        properties: DrivenProperties,
    ) {
        host.claim_driven(owner, node, properties);
        if !self.claims.contains(&node) {
            self.claims.push(node);
        }
    }

    /// Release every claim taken so far.
    pub fn clear(&mut self, host: &mut dyn LayoutHost, owner: NodeId) {
        for node in self.claims.drain(..) {
            host.release_driven(owner, node);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.claims.contains(&node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SceneGraph;

    #[test]
    fn test_layout_flags_cover_all_properties() {
        assert!(DrivenProperties::LAYOUT.contains(DrivenProperties::ANCHORS));
        assert!(DrivenProperties::LAYOUT.contains(DrivenProperties::PIVOT));
        assert!(DrivenProperties::LAYOUT.contains(DrivenProperties::POSITION));
        assert!(DrivenProperties::LAYOUT.contains(DrivenProperties::SIZE));
    }

    #[test]
    fn test_add_and_clear_claims() {
        let mut scene = SceneGraph::new();
        let owner = scene.create_node();
        let child = scene.create_node();
        let mut tracker = DrivenTracker::new();

        tracker.add(&mut scene, owner, child, DrivenProperties::LAYOUT);
        tracker.add(&mut scene, owner, child, DrivenProperties::SIZE);
        assert_eq!(tracker.len(), 1);
        assert_eq!(scene.driven(child), DrivenProperties::LAYOUT);

        tracker.clear(&mut scene, owner);
        assert!(tracker.is_empty());
        assert_eq!(scene.driven(child), DrivenProperties::empty());
    }
}
