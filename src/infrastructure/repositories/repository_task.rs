//! Cancellation handle for asynchronous fetches.
//!
//! A [`RepositoryTask`] runs a fetch future on the Tokio runtime and hands
//! its output to a completion closure. Delivery and cancellation race through
//! a single gate: whichever claims it first wins, so once [`Cancellable::cancel`]
//! returns the completion can no longer run.

use crate::domain::shared::cancellable::Cancellable;
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use tokio::task::AbortHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskState {
    Pending,
    Delivered,
    Cancelled,
}

pub struct RepositoryTask {
    state: Arc<Mutex<TaskState>>,
    abort: AbortHandle,
}

impl RepositoryTask {
    /// Spawn `future` and deliver its output to `completion` exactly once,
    /// unless cancelled first.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<F, C>(future: F, completion: C) -> Self
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
        C: FnOnce(F::Output) + Send + 'static,
    {
        let state = Arc::new(Mutex::new(TaskState::Pending));
        let gate = Arc::clone(&state);
        let handle = tokio::spawn(async move {
            let output = future.await;
            let claimed = {
                let mut state = gate.lock();
                if *state == TaskState::Pending {
                    *state = TaskState::Delivered;
                    true
                } else {
                    false
                }
            };
            if claimed {
                completion(output);
            }
        });
        Self {
            state,
            abort: handle.abort_handle(),
        }
    }

    /// Whether the completion has been claimed for delivery.
    pub fn is_finished(&self) -> bool {
        *self.state.lock() == TaskState::Delivered
    }
}

impl Cancellable for RepositoryTask {
    fn cancel(&self) {
        let mut state = self.state.lock();
        if *state != TaskState::Pending {
            return;
        }
        *state = TaskState::Cancelled;
        drop(state);
        self.abort.abort();
        debug!("repository task cancelled");
    }

    fn is_cancelled(&self) -> bool {
        *self.state.lock() == TaskState::Cancelled
    }
}
