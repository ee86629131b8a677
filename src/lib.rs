//! # spark-list
//!
//! Animated single-axis list layout for frame-based UI hosts.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for the
//! execution-mode signal and on taffy's geometry types.
//!
//! ## Architecture
//!
//! A list container stacks its active children along one axis with padding,
//! spacing and block alignment, and hands every position change to the
//! child's animator when it has one. The list never owns its children; it
//! talks to the host tree through [`engine::LayoutHost`].
//!
//! ```text
//! notification → pending flag → tick → host rebuild request
//!     → calculate_layout_input(H, V) → set_layout(H, V) → snap / animate
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Axis, padding, alignment, size reports
//! - [`config`] - Serializable layout and tween parameters
//! - [`engine`] - Host traits, node handles, reference scene graph, execution mode
//! - [`layout`] - Child snapshots, size accumulation, the solver
//! - [`transition`] - Snap vs animated strategies, tween animator
//! - [`pipeline`] - `AnimatedList` and the frame driver
//! - [`state`] - Scroll-to-target helpers
//!
//! ## Example
//!
//! ```ignore
//! use spark_list::{AnimatedList, LayoutConfig, SceneGraph, run_frame};
//!
//! let mut scene = SceneGraph::new();
//! let container = scene.create_node();
//! let mut lists = vec![AnimatedList::new(container, LayoutConfig::default())];
//! lists[0].on_enable(&mut scene);
//!
//! scene.create_child(container)?;
//! run_frame(&mut lists, &mut scene);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod layout;
pub mod pipeline;
pub mod state;
pub mod transition;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::{LayoutConfig, TweenConfig};
pub use error::{ConfigError, SceneError};

pub use engine::{
    execution_mode, execution_mode_signal, set_execution_mode, DrivenProperties, DrivenTracker,
    ExecutionMode, IgnoreLayout, LayoutHost, LayoutIgnorer, NodeId, SceneGraph, SizeSource,
    TweenRequest,
};

pub use layout::{accumulate, rebuild_snapshot, solve, ChildRecord, Snapshot, SolveOutcome};

pub use transition::{
    AnimatedElement, Ease, TransitionOutcome, TransitionStrategy, TweenAnimatedElement,
};

pub use pipeline::{
    rebuild_layout, run_frame, AnimatedList, FrameReport, LayoutParticipant, ListState,
    PendingChange,
};

pub use state::{scroll_value_for_target, AutoScrollToTarget, ScrollPin, ScrollView};
