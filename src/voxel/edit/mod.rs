//! Voxel edit recording.
//!
//! Every change made through an [`EditSession`] is kept as a delta over the
//! underlying store, enabling undo and change budgeting.

pub mod delta;
pub mod session;

pub use delta::{EditDelta, EditOp};
pub use session::EditSession;
