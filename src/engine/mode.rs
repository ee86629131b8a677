//! Execution mode signal.
//!
//! Distinguishes a live, animatable run from a static preview (design-time
//! editing, snapshot rendering). Lists only hand position changes to
//! animators in [`ExecutionMode::Live`].

use spark_signals::signal;
use std::cell::RefCell;

// =============================================================================
// Execution Mode
// =============================================================================

/// Whether transitions may animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Running normally; animators are honored.
    #[default]
    Live,
    /// Static preview; every child snaps to its target.
    Preview,
}

impl ExecutionMode {
    pub fn is_live(self) -> bool {
        self == ExecutionMode::Live
    }
}

thread_local! {
    static EXECUTION_MODE: RefCell<spark_signals::Signal<ExecutionMode>> =
        RefCell::new(signal(ExecutionMode::Live));
}

/// Get the current execution mode.
pub fn execution_mode() -> ExecutionMode {
    EXECUTION_MODE.with(|m| m.borrow().get())
}

/// Set the execution mode.
pub fn set_execution_mode(mode: ExecutionMode) {
    EXECUTION_MODE.with(|m| m.borrow().set(mode));
}

/// Get the execution mode signal for reactive tracking.
pub fn execution_mode_signal() -> spark_signals::Signal<ExecutionMode> {
    EXECUTION_MODE.with(|m| m.borrow().clone())
}

// =============================================================================
// Tests
// =============================================================================
