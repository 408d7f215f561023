//! Debounce
//!
//! Collapses a burst of calls into the last one, fired after a quiet period.
//! Scheduling is behind [`Scheduler`] so the browser timer can be swapped for
//! a virtual clock in tests.

use std::cell::RefCell;
use std::time::Duration;

use gloo_timers::callback::Timeout;

/// Runs a task after a delay. Dropping the returned handle cancels the task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task)
    }
}

pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay: Duration,
    pending: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay: Duration) -> Self {
        Self {
            scheduler,
            delay,
            pending: RefCell::new(None),
        }
    }

    /// Replace any pending task with `task`, due one full delay from now
    pub fn call(&self, task: impl FnOnce() + 'static) {
        self.cancel();
        let handle = self.scheduler.schedule(self.delay, Box::new(task));
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        drop(previous);
    }
}
