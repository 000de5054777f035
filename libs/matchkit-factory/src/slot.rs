//! Once-only construction slot
//!
//! A slot moves Empty -> Constructing -> Ready exactly once. The first
//! task to observe Empty runs the construction body; every task arriving
//! during Constructing blocks on a notifier and then clones the one value
//! ever stored. A failed or cancelled construction resets the slot to
//! Empty and wakes the waiters so one of them can take over.

use std::future::Future;
use std::pin::pin;

use parking_lot::Mutex;
use tokio::sync::Notify;

enum SlotState<T> {
    Empty,
    Constructing,
    Ready(T),
}

pub(crate) struct OnceSlot<T> {
    state: Mutex<SlotState<T>>,
    ready: Notify,
}

impl<T: Clone> OnceSlot<T> {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(SlotState::Empty),
            ready: Notify::new(),
        }
    }

    /// Returns the cached value, or runs `init` if this caller wins the
    /// Empty slot. The lock is never held across an await; waiters park
    /// on the notifier with their wakeup armed before the lock drops.
    pub(crate) async fn get_or_try_init<F, Fut, E>(&self, init: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        loop {
            let mut waiter = pin!(self.ready.notified());
            {
                let mut state = self.state.lock();
                match &*state {
                    SlotState::Ready(value) => return Ok(value.clone()),
                    SlotState::Empty => {
                        *state = SlotState::Constructing;
                        break;
                    }
                    SlotState::Constructing => {
                        waiter.as_mut().enable();
                    }
                }
            }
            waiter.await;
        }

        // This task owns construction now. The guard rolls the slot back
        // if the body errors or the future is dropped mid-flight.
        let rollback = RollbackOnDrop { slot: self };
        let value = init().await?;
        *self.state.lock() = SlotState::Ready(value.clone());
        std::mem::forget(rollback);
        self.ready.notify_waiters();
        Ok(value)
    }
}

struct RollbackOnDrop<'a, T> {
    slot: &'a OnceSlot<T>,
}

impl<T> Drop for RollbackOnDrop<'_, T> {
    fn drop(&mut self) {
        *self.slot.state.lock() = SlotState::Empty;
        self.slot.ready.notify_waiters();
    }
}
