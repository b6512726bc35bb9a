use std::any::TypeId;

use chrono::{DateTime, Duration, Utc};
use log::debug;
use tokio_util::sync::CancellationToken;

use crate::{TaskHandle, TaskId};

/// A task whose delay has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueTask<T> {
    pub id: TaskId,
    pub payload: T,
}

#[derive(Debug)]
struct Scheduled<T> {
    handle: TaskHandle,
    due_at: DateTime<Utc>,
    payload: T,
}

/// Delayed tasks of one kind, driven by [`crate::Time`].
///
/// Scheduling a task cancels every task still waiting, so at most one task is
/// live at a time. Nothing runs on its own: the owner calls [`Scheduler::poll`]
/// with the current time and applies what came due.
#[derive(Debug)]
pub struct Scheduler<T: 'static> {
    generation: u64,
    tasks: Vec<Scheduled<T>>,
}

impl<T: 'static> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            tasks: Vec::new(),
        }
    }

    /// Schedules `payload` to come due `delay` after `now`.
    pub fn schedule(&mut self, payload: T, now: DateTime<Utc>, delay: Duration) -> TaskHandle {
        self.cancel_all();

        self.generation += 1;
        let id = TaskId::new(TypeId::of::<T>(), self.generation);
        let handle = TaskHandle::new(id, CancellationToken::new());
        let due_at = now + delay;
        debug!("schedule task gen={} due at {due_at:?}", id.generation());

        self.tasks.push(Scheduled {
            handle: handle.clone(),
            due_at,
            payload,
        });
        handle
    }

    pub fn cancel_all(&mut self) {
        for task in &self.tasks {
            if !task.handle.is_cancelled() {
                debug!("cancel task gen={}", task.handle.id().generation());
                task.handle.cancel();
            }
        }
    }

    /// The live task, if any.
    pub fn pending(&self) -> Option<(&TaskHandle, &T)> {
        self.tasks
            .iter()
            .rev()
            .find(|task| !task.handle.is_cancelled())
            .map(|task| (&task.handle, &task.payload))
    }

    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.tasks
            .iter()
            .filter(|task| !task.handle.is_cancelled())
            .map(|task| task.due_at)
            .min()
    }

    /// Time left until the live task comes due, zero if it is already due.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.next_due()
            .map(|due_at| (due_at - now).max(Duration::zero()))
    }

    /// Removes due and cancelled tasks, returning the due ones in due order.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Vec<DueTask<T>> {
        let mut due = Vec::new();
        let mut waiting = Vec::with_capacity(self.tasks.len());

        for task in self.tasks.drain(..) {
            if task.handle.is_cancelled() {
                continue;
            }
            if task.due_at <= now {
                due.push(task);
            } else {
                waiting.push(task);
            }
        }
        self.tasks = waiting;

        due.sort_by_key(|task| task.due_at);
        due.into_iter()
            .map(|task| DueTask {
                id: task.handle.id(),
                payload: task.payload,
            })
            .collect()
    }
}
