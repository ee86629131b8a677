//! Transitions - getting a child from where it is to where it should be.
//!
//! Layout computes targets; a [`TransitionStrategy`] decides how a child's
//! position reaches its target:
//! - **Snap**: write the position immediately. Used when the child exposes no
//!   [`AnimatedElement`] or the list runs in [`ExecutionMode::Preview`].
//! - **Animated**: hand the move to the child's animator.
//!
//! Size, pivot and anchors are never animated; the orchestrator writes them
//! directly before the strategy runs.

mod tween;

pub use tween::*;

use std::fmt;
use std::rc::Rc;

use crate::engine::{ExecutionMode, LayoutHost};
use crate::layout::ChildRecord;

// =============================================================================
// Capability
// =============================================================================

/// Optional capability: a child that animates its own repositioning.
pub trait AnimatedElement {
    /// The child just joined the list.
    fn animate_new_element(&self, child: &ChildRecord, host: &mut dyn LayoutHost);

    /// The child's target moved away from its current position.
    fn animate_change_position(&self, child: &ChildRecord, host: &mut dyn LayoutHost);

    /// The list is going away; stop and settle on the target.
    fn cancel(&self, child: &ChildRecord, host: &mut dyn LayoutHost) {
        host.set_position(child.handle, child.target_position);
    }
}

// =============================================================================
// Strategy
// =============================================================================

/// What happened to one child during apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Snapped,
    AnimatedNew,
    AnimatedMove,
    /// Already at its target; no call was made.
    Unchanged,
}

/// How a child's position change is carried out.
#[derive(Clone)]
pub enum TransitionStrategy {
    Snap,
    Animated(Rc<dyn AnimatedElement>),
}

impl fmt::Debug for TransitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionStrategy::Snap => f.write_str("Snap"),
            TransitionStrategy::Animated(_) => f.write_str("Animated"),
        }
    }
}

impl TransitionStrategy {
    /// Pick the strategy for `record` in `mode`.
    pub fn select(record: &ChildRecord, mode: ExecutionMode) -> Self {
        match (&record.animator, mode) {
            (Some(animator), ExecutionMode::Live) => TransitionStrategy::Animated(animator.clone()),
            _ => TransitionStrategy::Snap,
        }
    }

    /// Move `record`'s child toward its target position.
    ///
    /// On first population every child snaps, animated or not. Otherwise a new
    /// child gets `animate_new_element`, a moved child gets
    /// `animate_change_position`, and a child already sitting exactly on its
    /// target is left alone so an in-flight animation isn't restarted.
    pub fn apply(
        &self,
        record: &ChildRecord,
        first_population: bool,
        host: &mut dyn LayoutHost,
    ) -> TransitionOutcome {
        let animator = match self {
            TransitionStrategy::Animated(animator) if !first_population => animator,
            _ => {
                host.set_position(record.handle, record.target_position);
                return TransitionOutcome::Snapped;
            }
        };

        if record.is_new {
            animator.animate_new_element(record, host);
            return TransitionOutcome::AnimatedNew;
        }

        if host.position(record.handle) != Some(record.target_position) {
            animator.animate_change_position(record, host);
            return TransitionOutcome::AnimatedMove;
        }

        TransitionOutcome::Unchanged
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use taffy::Point;
    use crate::engine::{NodeId, SceneGraph};

    #[derive(Default)]
    struct Recorder {
        calls: RefCell<Vec<(&'static str, NodeId)>>,
    }

    impl AnimatedElement for Recorder {
        fn animate_new_element(&self, child: &ChildRecord, _host: &mut dyn LayoutHost) {
            self.calls.borrow_mut().push(("new", child.handle));
        }

        fn animate_change_position(&self, child: &ChildRecord, _host: &mut dyn LayoutHost) {
            self.calls.borrow_mut().push(("move", child.handle));
        }
    }

    fn record_with(scene: &mut SceneGraph, animator: Option<Rc<Recorder>>) -> ChildRecord {
        let node = scene.create_node();
        let mut record = ChildRecord::new(node);
        record.animator = animator.map(|a| a as Rc<dyn AnimatedElement>);
        record.target_position = Point { x: 0.0, y: -30.0 };
        record
    }

    #[test]
    fn test_select_without_animator_is_snap() {
        let mut scene = SceneGraph::new();
        let record = record_with(&mut scene, None);
        let strategy = TransitionStrategy::select(&record, ExecutionMode::Live);
        assert!(matches!(strategy, TransitionStrategy::Snap));
    }

    #[test]
    fn test_select_in_preview_is_snap() {
        let mut scene = SceneGraph::new();
        let record = record_with(&mut scene, Some(Rc::new(Recorder::default())));
        let preview = TransitionStrategy::select(&record, ExecutionMode::Preview);
        assert!(matches!(preview, TransitionStrategy::Snap));
        let live = TransitionStrategy::select(&record, ExecutionMode::Live);
        assert!(matches!(live, TransitionStrategy::Animated(_)));
    }

    #[test]
    fn test_snap_writes_position() {
        let mut scene = SceneGraph::new();
        let record = record_with(&mut scene, None);

        let outcome = TransitionStrategy::Snap.apply(&record, false, &mut scene);

        assert_eq!(outcome, TransitionOutcome::Snapped);
        assert_eq!(scene.position(record.handle), Some(record.target_position));
    }

    #[test]
    fn test_animated_new_child() {
        let mut scene = SceneGraph::new();
        let recorder = Rc::new(Recorder::default());
        let mut record = record_with(&mut scene, Some(recorder.clone()));
        record.is_new = true;

        let strategy = TransitionStrategy::select(&record, ExecutionMode::Live);
        let outcome = strategy.apply(&record, false, &mut scene);

        assert_eq!(outcome, TransitionOutcome::AnimatedNew);
        assert_eq!(recorder.calls.borrow().as_slice(), &[("new", record.handle)]);
    }

    #[test]
    fn test_animated_first_population_snaps() {
        let mut scene = SceneGraph::new();
        let recorder = Rc::new(Recorder::default());
        let mut record = record_with(&mut scene, Some(recorder.clone()));
        record.is_new = true;
        record.skip_animation = true;

        let strategy = TransitionStrategy::select(&record, ExecutionMode::Live);
        let outcome = strategy.apply(&record, true, &mut scene);

        assert_eq!(outcome, TransitionOutcome::Snapped);
        assert!(recorder.calls.borrow().is_empty());
        assert_eq!(scene.position(record.handle), Some(record.target_position));
    }

    #[test]
    fn test_animated_move_only_when_position_differs() {
        let mut scene = SceneGraph::new();
        let recorder = Rc::new(Recorder::default());
        let record = record_with(&mut scene, Some(recorder.clone()));
        let strategy = TransitionStrategy::select(&record, ExecutionMode::Live);

        assert_eq!(strategy.apply(&record, false, &mut scene), TransitionOutcome::AnimatedMove);

        scene.set_position(record.handle, record.target_position);
        assert_eq!(strategy.apply(&record, false, &mut scene), TransitionOutcome::Unchanged);
        assert_eq!(recorder.calls.borrow().len(), 1);
    }

    #[test]
    fn test_default_cancel_settles_on_target() {
        let mut scene = SceneGraph::new();
        let recorder = Rc::new(Recorder::default());
        let record = record_with(&mut scene, Some(recorder));

        record.animator.as_ref().unwrap().cancel(&record, &mut scene);

        assert_eq!(scene.position(record.handle), Some(record.target_position));
    }
}
