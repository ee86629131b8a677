//! Layout - single-axis list computation.
//!
//! # Architecture
//!
//! ```text
//! child set change → snapshot::rebuild → accumulate (size report) → solve (targets)
//! ```
//!
//! 1. `snapshot` captures the ordered, active children and probes their
//!    optional capabilities. It runs only when membership changes.
//! 2. `accumulate` reports min/preferred size per axis to the parent layout.
//! 3. `solve` assigns each visible child its target position, size and pivot.
//!
//! Everything here is pure over its inputs; applying the targets to the host
//! (snap or animate) lives in `transition` and `pipeline`.

mod accumulate;
mod record;
mod snapshot;
mod solver;

pub use accumulate::{accumulate, accumulate_cross, accumulate_primary};
pub use record::ChildRecord;
pub use snapshot::{rebuild as rebuild_snapshot, Snapshot};
pub use solver::{solve, SolveOutcome};
