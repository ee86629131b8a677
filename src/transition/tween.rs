//! Tween adapter - an [`AnimatedElement`] backed by the host's tween engine.
//!
//! Curve math belongs to the host. This adapter only decides what to ask for:
//! - Position change: kill running tweens, tween to the target.
//! - New element: kill running tweens, jump to `target + offset`, tween in.

use serde::{Deserialize, Serialize};
use taffy::Point;

use crate::config::TweenConfig;
use crate::engine::LayoutHost;
use crate::layout::ChildRecord;

use super::AnimatedElement;

/// Easing curve name passed through to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Ease {
    Linear,
    InQuad,
    #[default]
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    OutBack,
    OutElastic,
    OutBounce,
}

/// Child capability that animates moves through [`LayoutHost::tween_position`].
#[derive(Debug, Clone, Default)]
pub struct TweenAnimatedElement {
    config: TweenConfig,
}

impl TweenAnimatedElement {
    pub fn new(config: TweenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }
}

impl AnimatedElement for TweenAnimatedElement {
    fn animate_change_position(&self, child: &ChildRecord, host: &mut dyn LayoutHost) {
        host.kill_tweens(child.handle);
        host.tween_position(
            child.handle,
            child.target_position,
            self.config.duration,
            self.config.ease,
        );
    }

    fn animate_new_element(&self, child: &ChildRecord, host: &mut dyn LayoutHost) {
        host.kill_tweens(child.handle);
        let [dx, dy] = self.config.new_element_offset;
        let start = Point {
            x: child.target_position.x + dx,
            y: child.target_position.y + dy,
        };
        host.set_position(child.handle, start);
        host.tween_position(
            child.handle,
            child.target_position,
            self.config.new_element_duration,
            self.config.new_element_ease,
        );
    }

    fn cancel(&self, child: &ChildRecord, host: &mut dyn LayoutHost) {
        host.kill_tweens(child.handle);
        host.set_position(child.handle, child.target_position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SceneGraph;

    fn config() -> TweenConfig {
        TweenConfig {
            ease: Ease::InOutCubic,
            duration: 0.3,
            new_element_ease: Ease::OutBack,
            new_element_duration: 0.5,
            new_element_offset: [40.0, 0.0],
        }
    }

    #[test]
    fn test_change_position_tweens_to_target() {
        let mut scene = SceneGraph::new();
        let node = scene.create_node();
        let mut record = ChildRecord::new(node);
        record.target_position = Point { x: 0.0, y: -25.0 };

        TweenAnimatedElement::new(config()).animate_change_position(&record, &mut scene);

        assert_eq!(scene.killed_tweens(), &[node]);
        let tween = scene.tweens()[0];
        assert_eq!(tween.from, Point { x: 0.0, y: 0.0 });
        assert_eq!(tween.target, record.target_position);
        assert_eq!(tween.duration, 0.3);
        assert_eq!(tween.ease, Ease::InOutCubic);
    }

    #[test]
    fn test_new_element_starts_offset() {
        let mut scene = SceneGraph::new();
        let node = scene.create_node();
        let mut record = ChildRecord::new(node);
        record.target_position = Point { x: 0.0, y: -25.0 };

        TweenAnimatedElement::new(config()).animate_new_element(&record, &mut scene);

        let tween = scene.tweens()[0];
        assert_eq!(tween.from, Point { x: 40.0, y: -25.0 });
        assert_eq!(tween.target, record.target_position);
        assert_eq!(tween.ease, Ease::OutBack);
        assert_eq!(tween.duration, 0.5);
    }

    #[test]
    fn test_cancel_kills_and_settles() {
        let mut scene = SceneGraph::new();
        let node = scene.create_node();
        let mut record = ChildRecord::new(node);
        record.target_position = Point { x: 0.0, y: -25.0 };
        let element = TweenAnimatedElement::new(config());

        element.animate_change_position(&record, &mut scene);
        element.cancel(&record, &mut scene);

        assert!(scene.tweens().is_empty());
        assert_eq!(scene.position(node), Some(record.target_position));
    }
}
