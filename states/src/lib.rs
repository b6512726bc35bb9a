//! State plumbing shared by the storefront crates.
//!
//! - [`StateCtx`]: typed storage for the states a frame reads and mutates
//! - [`Time`]: the virtual clock every time-dependent computation reads
//! - [`TaskId`] / [`TaskHandle`]: identity and cooperative cancellation of scheduled work
//! - [`Scheduler`]: delayed tasks keyed on [`Time`], superseding older tasks of the same kind
//! - [`CommandQueue`]: commands enqueued by widgets and flushed at the end of a frame

mod basic_state;
mod ctx;
mod error;
mod queue;
mod schedule;
mod state;
mod task;

pub use basic_state::Time;
pub use ctx::StateCtx;
pub use error::Error;
pub use queue::CommandQueue;
pub use schedule::{DueTask, Scheduler};
pub use state::State;
pub use task::{TaskHandle, TaskId};
