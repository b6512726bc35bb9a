//! Identity and cancellation of scheduled work.
//!
//! - `TaskId`: the kind of work (a `TypeId`) plus a generation counter
//! - `TaskHandle`: a `TaskId` with the `CancellationToken` the work checks before it runs
//!
//! ```ignore
//! use storefront_states::{TaskHandle, TaskId};
//! use tokio_util::sync::CancellationToken;
//!
//! let handle = TaskHandle::new(TaskId::new(TypeId::of::<PageChange>(), 1), CancellationToken::new());
//! handle.cancel();
//! assert!(handle.is_cancelled());
//! ```

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a scheduled task.
///
/// Two tasks of the same kind share the `TypeId`; the generation tells which one
/// was scheduled last, so stale work can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    /// Higher generations were scheduled later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a scheduled task with cooperative cancellation.
///
/// Cancelling does not remove the task from its scheduler; the scheduler skips it
/// when it comes due. Clones share the same token.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
