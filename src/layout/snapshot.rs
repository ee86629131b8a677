//! Child snapshot builder.
//!
//! Rebuilds the ordered record list whenever the child set changes
//! membership (add, remove, reorder, activate, deactivate). Never runs on a
//! plain layout pass.
//!
//! # Identity
//!
//! `is_new` compares handles against the immediately preceding snapshot.
//! There is no persistent child ID: a child removed and re-added between two
//! rebuilds is indistinguishable from one that was never there.
//!
//! Flags not yet consumed by an apply carry over: a child that joined and was
//! reshuffled before any layout pass is still new, and a snapshot rebuilt
//! before the first apply after activation is still the first population.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::engine::{LayoutHost, NodeId};

use super::record::ChildRecord;

/// Ordered set of records captured at one point in time.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Vec<ChildRecord>,
    first_population: bool,
}

impl Snapshot {
    pub fn records(&self) -> &[ChildRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [ChildRecord] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, handle: NodeId) -> bool {
        self.records.iter().any(|r| r.handle == handle)
    }

    /// Record for `handle`, if captured.
    pub fn get(&self, handle: NodeId) -> Option<&ChildRecord> {
        self.records.iter().find(|r| r.handle == handle)
    }

    /// No apply has run since the list became active.
    pub fn is_first_population(&self) -> bool {
        self.first_population
    }

    /// Called after targets were applied to the host.
    pub fn mark_applied(&mut self) {
        self.first_population = false;
    }
}

/// Build a new snapshot from the live children.
///
/// `previous` is `None` for the first build since the list became active;
/// every record then gets `skip_animation` so the initial population snaps
/// into place. Capabilities are probed here; a missing one is the default
/// behavior, not an error.
pub fn rebuild(previous: Option<&Snapshot>, live: &[NodeId], host: &dyn LayoutHost) -> Snapshot {
    let known: HashMap<NodeId, bool> = previous
        .map(|p| p.records.iter().map(|r| (r.handle, r.is_new)).collect())
        .unwrap_or_default();
    let first_population = previous.is_none_or(|p| p.first_population);

    let mut seen = HashSet::with_capacity(live.len());
    let records: Vec<ChildRecord> = live
        .iter()
        .copied()
        // Handles are unique within one snapshot
        .filter(|handle| seen.insert(*handle))
        .map(|handle| {
            let mut record = ChildRecord::new(handle);
            record.ignorer = host.layout_ignorer(handle);
            record.animator = host.animated_element(handle);
            if let Some(position) = host.position(handle) {
                record.target_position = position;
            }
            if let Some(size) = host.rect_size(handle) {
                record.target_size = size;
            }
            record.is_new = known.get(&handle).copied().unwrap_or(true);
            record.skip_animation = first_population;
            record
        })
        .collect();

    debug!(
        children = records.len(),
        new = records.iter().filter(|r| r.is_new).count(),
        first_population,
        "rebuilt child snapshot"
    );

    Snapshot { records, first_population }
}

// =============================================================================
// Tests
// =============================================================================
