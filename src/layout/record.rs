//! Per-child snapshot record.

use std::fmt;
use std::rc::Rc;

use taffy::{Point, Size};

use crate::engine::{LayoutIgnorer, NodeId, SizeSource};
use crate::transition::AnimatedElement;
use crate::types::{TOP_LEFT, ZERO_POINT, ZERO_SIZE};

/// One participating child, captured when the child set last changed.
///
/// Targets are rewritten by every solve; `is_new` and `skip_animation` are
/// consumed by the first apply after the snapshot was built.
#[derive(Clone)]
pub struct ChildRecord {
    /// The child's transform node. Not owned; may go defunct at any time.
    pub handle: NodeId,
    /// `IsLayoutIgnored` capability, if the child exposes one.
    pub ignorer: Option<Rc<dyn LayoutIgnorer>>,
    /// Animation capability, if the child exposes one.
    pub animator: Option<Rc<dyn AnimatedElement>>,
    pub target_position: Point<f32>,
    pub target_size: Size<f32>,
    pub target_pivot: Point<f32>,
    /// Not present in the previous snapshot.
    pub is_new: bool,
    /// Part of the first snapshot since activation; nothing to animate from.
    pub skip_animation: bool,
    /// Received targets in the latest solve.
    pub placed: bool,
}

impl ChildRecord {
    pub fn new(handle: NodeId) -> Self {
        Self {
            handle,
            ignorer: None,
            animator: None,
            target_position: ZERO_POINT,
            target_size: ZERO_SIZE,
            target_pivot: TOP_LEFT,
            is_new: false,
            skip_animation: false,
            placed: false,
        }
    }

    /// Whether the child asked to be left out of layout.
    pub fn is_ignored(&self) -> bool {
        self.ignorer.as_ref().is_some_and(|i| i.ignore_layout())
    }

    /// Whether the child takes part in this pass: alive and not ignored.
    pub fn participates<S: SizeSource + ?Sized>(&self, sizes: &S) -> bool {
        !self.is_ignored() && sizes.is_alive(self.handle)
    }
}

impl fmt::Debug for ChildRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildRecord")
            .field("handle", &self.handle)
            .field("ignored", &self.is_ignored())
            .field("animated", &self.animator.is_some())
            .field("target_position", &self.target_position)
            .field("target_size", &self.target_size)
            .field("is_new", &self.is_new)
            .field("skip_animation", &self.skip_animation)
            .field("placed", &self.placed)
            .finish()
    }
}
