//! Cancellable delayed tasks.
//!
//! Every timer in the app goes through [`Scheduler`] so pending work can be
//! cancelled instead of firing against state that has moved on. A
//! [`TaskHandle`] cancels its task when dropped; call [`TaskHandle::forget`]
//! to let the task run unattended.

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

pub trait Scheduler: Clone + 'static {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle;
}

/// Backend side of a [`TaskHandle`].
pub trait PendingTask {
    fn cancel(self: Box<Self>);
    fn detach(self: Box<Self>);
}

#[must_use = "dropping a TaskHandle cancels the task"]
pub struct TaskHandle(Option<Box<dyn PendingTask>>);

impl TaskHandle {
    pub fn new(pending: impl PendingTask + 'static) -> Self {
        Self(Some(Box::new(pending)))
    }

    pub fn cancel(mut self) {
        if let Some(pending) = self.0.take() {
            pending.cancel();
        }
    }

    pub fn forget(mut self) {
        if let Some(pending) = self.0.take() {
            pending.detach();
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if let Some(pending) = self.0.take() {
            pending.cancel();
        }
    }
}

impl PendingTask for Timeout {
    fn cancel(self: Box<Self>) {
        // Returns the JS closure; dropping it releases it.
        let _ = (*self).cancel();
    }

    fn detach(self: Box<Self>) {
        let _ = (*self).forget();
    }
}

/// `setTimeout` through gloo.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
        TaskHandle::new(Timeout::new(delay_ms, task))
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use super::{PendingTask, Scheduler, Task, TaskHandle};

    struct Pending {
        id: u64,
        due: u64,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_id: u64,
        pending: Vec<Pending>,
    }

    /// Virtual clock: tasks only run inside [`ManualScheduler::advance`].
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    struct ManualTask {
        id: u64,
        clock: Weak<RefCell<Clock>>,
    }

    impl PendingTask for ManualTask {
        fn cancel(self: Box<Self>) {
            if let Some(clock) = self.clock.upgrade() {
                clock.borrow_mut().pending.retain(|p| p.id != self.id);
            }
        }

        fn detach(self: Box<Self>) {}
    }

    impl ManualScheduler {
        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        pub fn pending(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        /// Runs every task due within `ms`, earliest first, including tasks
        /// scheduled by tasks that run along the way.
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let earliest = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.id))
                        .map(|(i, _)| i);
                    earliest.map(|i| {
                        let pending = clock.pending.remove(i);
                        clock.now = pending.due;
                        pending.task
                    })
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        fn schedule(&self, delay_ms: u32, task: Task) -> TaskHandle {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + u64::from(delay_ms);
            clock.pending.push(Pending { id, due, task });
            TaskHandle::new(ManualTask {
                id,
                clock: Rc::downgrade(&self.clock),
            })
        }
    }
}
