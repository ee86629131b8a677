//! AnimatedList - the list container component.
//!
//! Owns the child snapshot, answers the host's two-phase layout protocol and
//! applies solved targets through each child's transition strategy.
//!
//! # States
//!
//! ```text
//! Inactive ──on_enable──▶ Stable ──notification──▶ RebuildPending
//!    ▲                      ▲                             │
//!    └──────on_disable──────┴────────── tick ─────────────┘
//! ```
//!
//! Notifications never touch the host. They set a pending flag that is
//! drained once per tick by [`AnimatedList::tick`], outside the host's own
//! layout pass; any number of notifications within one tick collapse into a
//! single rebuild request. A tick that fires after the list was disabled
//! drops the pending work.

use tracing::{debug, trace, warn};

use crate::config::LayoutConfig;
use crate::error::ConfigError;
use crate::engine::{execution_mode, DrivenProperties, DrivenTracker, LayoutHost, NodeId};
use crate::layout::{accumulate, rebuild_snapshot, solve, ChildRecord, Snapshot};
use crate::transition::{TransitionOutcome, TransitionStrategy};
use crate::types::{Axis, SizeReport, TOP_LEFT, ZERO_SIZE};

use super::LayoutParticipant;

bitflags::bitflags! {
    /// Why a rebuild is pending.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PendingChange: u8 {
        /// Child set membership or order changed; the snapshot must be rebuilt.
        const STRUCTURE = 1 << 0;
        /// Something size-affecting changed; re-solve only.
        const SIZE = 1 << 1;
    }
}

/// Lifecycle state of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Inactive,
    Stable,
    RebuildPending,
}

/// A single-axis list that animates its children into place.
#[derive(Debug)]
pub struct AnimatedList {
    container: NodeId,
    config: LayoutConfig,
    active: bool,
    pending: PendingChange,
    /// `None` until the first build after activation.
    snapshot: Option<Snapshot>,
    reports: [SizeReport; 2],
    tracker: DrivenTracker,
    transitions: Vec<(NodeId, TransitionOutcome)>,
}

impl AnimatedList {
    /// Create an inactive list managing the children of `container`.
    pub fn new(container: NodeId, config: LayoutConfig) -> Self {
        Self {
            container,
            config,
            active: false,
            pending: PendingChange::empty(),
            snapshot: None,
            reports: [SizeReport::default(); 2],
            tracker: DrivenTracker::new(),
            transitions: Vec::new(),
        }
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn state(&self) -> ListState {
        if !self.active {
            ListState::Inactive
        } else if self.pending.is_empty() {
            ListState::Stable
        } else {
            ListState::RebuildPending
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Records of the current snapshot, in layout order.
    pub fn records(&self) -> &[ChildRecord] {
        self.snapshot.as_ref().map(|s| s.records()).unwrap_or(&[])
    }

    /// Outcome per child of the most recent apply.
    pub fn last_transitions(&self) -> &[(NodeId, TransitionOutcome)] {
        &self.transitions
    }

    /// Claims currently held on child transforms.
    pub fn driven_count(&self) -> usize {
        self.tracker.len()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Activate: capture the children and ask for a layout pass.
    pub fn on_enable(&mut self, host: &mut dyn LayoutHost) {
        if self.active {
            return;
        }
        self.active = true;
        debug!(container = %self.container, "list enabled");
        self.gather_children(host);
        if host.is_rebuilding_layout() {
            // Enabled from inside the host's layout pass; tick requests it
            self.set_dirty(PendingChange::SIZE);
        } else {
            host.request_layout_rebuild(self.container);
        }
    }

    /// Deactivate: settle running animations on their targets and release
    /// every driven-property claim.
    pub fn on_disable(&mut self, host: &mut dyn LayoutHost) {
        if !self.active {
            return;
        }
        self.active = false;
        debug!(container = %self.container, pending = ?self.pending, "list disabled");

        if let Some(snapshot) = self.snapshot.take() {
            for record in snapshot.records() {
                let Some(animator) = &record.animator else { continue };
                if record.placed && host.is_alive(record.handle) {
                    animator.cancel(record, host);
                }
            }
        }
        self.tracker.clear(host, self.container);
        self.transitions.clear();
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Children were added, removed, reordered, activated or deactivated.
    pub fn on_children_changed(&mut self) {
        self.set_dirty(PendingChange::STRUCTURE);
    }

    /// The container's rect changed size.
    pub fn on_dimensions_changed(&mut self) {
        self.set_dirty(PendingChange::SIZE);
    }

    /// An animation wrote to the container's properties.
    pub fn on_animation_properties_applied(&mut self) {
        self.set_dirty(PendingChange::SIZE);
    }

    /// Replace the layout parameters. An invalid config is rejected and the
    /// current one kept.
    pub fn set_config(&mut self, config: LayoutConfig) -> Result<(), ConfigError> {
        config
            .validate()
            .inspect_err(|err| warn!(container = %self.container, %err, "rejected layout config"))?;
        if self.config == config {
            return Ok(());
        }
        self.config = config;
        self.set_dirty(PendingChange::SIZE);
        Ok(())
    }

    fn set_dirty(&mut self, change: PendingChange) {
        if !self.active {
            return;
        }
        if !self.pending.is_empty() {
            trace!(container = %self.container, ?change, "coalesced rebuild request");
        }
        self.pending |= change;
    }

    // =========================================================================
    // Scheduling
    // =========================================================================

    /// Drain the pending rebuild. Call once per tick, outside the host's
    /// layout pass. Returns whether a layout pass was requested.
    pub fn tick(&mut self, host: &mut dyn LayoutHost) -> bool {
        if self.pending.is_empty() {
            return false;
        }
        if !self.active {
            debug!(container = %self.container, "skipped deferred rebuild on inactive list");
            self.pending = PendingChange::empty();
            return false;
        }
        if host.is_rebuilding_layout() {
            // Not a safe point yet; try again next tick
            return false;
        }

        let pending = std::mem::take(&mut self.pending);
        if pending.contains(PendingChange::STRUCTURE) {
            self.gather_children(host);
        }
        host.request_layout_rebuild(self.container);
        debug!(container = %self.container, ?pending, "requested layout rebuild");
        true
    }

    fn gather_children(&mut self, host: &dyn LayoutHost) {
        let live = host.active_children(self.container);
        self.snapshot = Some(rebuild_snapshot(self.snapshot.as_ref(), &live, host));
    }
}

// =============================================================================
// Layout Participant
// =============================================================================

impl LayoutParticipant for AnimatedList {
    fn calculate_layout_input(&mut self, axis: Axis, host: &dyn LayoutHost) {
        self.reports[axis.slot()] = accumulate(self.records(), host, &self.config, axis);
    }

    fn size_report(&self, axis: Axis) -> SizeReport {
        self.reports[axis.slot()]
    }

    fn set_layout(&mut self, axis: Axis, host: &mut dyn LayoutHost) {
        if axis != self.config.axis || !self.active {
            return;
        }
        let container = self.container;
        let Some(snapshot) = self.snapshot.as_mut() else { return };

        self.tracker.clear(host, container);
        let available = host.rect_size(container).unwrap_or(ZERO_SIZE);
        if solve(snapshot.records_mut(), &*host, &self.config, axis, available).is_none() {
            return;
        }

        let mode = execution_mode();
        self.transitions.clear();

        for record in snapshot.records_mut() {
            if !record.placed || !host.is_alive(record.handle) {
                continue;
            }
            let handle = record.handle;

            self.tracker.add(host, container, handle, DrivenProperties::LAYOUT);
            host.set_anchors(handle, TOP_LEFT, TOP_LEFT);
            host.set_pivot(handle, record.target_pivot);
            host.set_size(handle, record.target_size);

            let strategy = TransitionStrategy::select(record, mode);
            let outcome = strategy.apply(record, record.skip_animation, host);
            self.transitions.push((handle, outcome));

            record.is_new = false;
            record.skip_animation = false;
        }
        snapshot.mark_applied();

        trace!(
            container = %container,
            ?mode,
            applied = self.transitions.len(),
            "applied layout"
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
