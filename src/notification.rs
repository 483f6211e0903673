//! Toast notifications: at most one panel on screen at a time.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use log::debug;

use crate::scheduler::{Scheduler, TaskHandle};

/// Delay before the panel slides in, so the off-screen position renders first.
pub const ENTER_DELAY_MS: u32 = 10;
pub const AUTO_DISMISS_MS: u32 = 5000;
/// Length of the slide-out before the panel is removed.
pub const EXIT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    Warning,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationRequest {
    pub message: String,
    pub kind: NotificationKind,
}

impl NotificationRequest {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub phase: Phase,
}

impl Notification {
    pub fn on_screen(&self) -> bool {
        self.phase == Phase::Visible
    }
}

/// The single notification slot. Operations addressed to a stale id do nothing.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationCenter {
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn show(&mut self, request: NotificationRequest) -> u64 {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            message: request.message,
            kind: request.kind,
            phase: Phase::Entering,
        });
        self.next_id
    }

    fn current_mut(&mut self, id: u64) -> Option<&mut Notification> {
        self.current.as_mut().filter(|n| n.id == id)
    }

    pub fn settle(&mut self, id: u64) -> bool {
        match self.current_mut(id) {
            Some(n) if n.phase == Phase::Entering => {
                n.phase = Phase::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn begin_dismiss(&mut self, id: u64) -> bool {
        match self.current_mut(id) {
            Some(n) if n.phase != Phase::Leaving => {
                n.phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        if self.current_mut(id).is_some() {
            self.current = None;
            true
        } else {
            false
        }
    }
}

struct NotifierInner<S: Scheduler> {
    center: RefCell<NotificationCenter>,
    scheduler: S,
    /// Timers driving the current panel; replaced wholesale on every change.
    timers: RefCell<Vec<TaskHandle>>,
    deferred: RefCell<HashMap<u64, TaskHandle>>,
    next_deferred: RefCell<u64>,
    on_change: Box<dyn Fn()>,
}

/// Drives the [`NotificationCenter`] through its timed phases.
pub struct Notifier<S: Scheduler> {
    inner: Rc<NotifierInner<S>>,
}

impl<S: Scheduler> Clone for Notifier<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S: Scheduler> PartialEq for Notifier<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: Scheduler> Notifier<S> {
    /// `on_change` runs after every visible change, to trigger a re-render.
    pub fn new(scheduler: S, on_change: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(NotifierInner {
                center: RefCell::new(NotificationCenter::default()),
                scheduler,
                timers: RefCell::new(Vec::new()),
                deferred: RefCell::new(HashMap::new()),
                next_deferred: RefCell::new(0),
                on_change: Box::new(on_change),
            }),
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.inner.center.borrow().current().cloned()
    }

    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        self.show(NotificationRequest::new(message, kind))
    }

    /// Replaces whatever is on screen; the old panel's timers are cancelled.
    pub fn show(&self, request: NotificationRequest) -> u64 {
        debug!("Notification ({}): {}", request.kind.as_str(), request.message);
        let id = self.inner.center.borrow_mut().show(request);
        let enter = self.after(ENTER_DELAY_MS, move |notifier| {
            if notifier.inner.center.borrow_mut().settle(id) {
                notifier.changed();
            }
        });
        let dismiss = self.after(AUTO_DISMISS_MS, move |notifier| notifier.dismiss(id));
        self.replace_timers(vec![enter, dismiss]);
        self.changed();
        id
    }

    /// Slides the panel out and removes it after [`EXIT_MS`].
    pub fn dismiss(&self, id: u64) {
        if !self.inner.center.borrow_mut().begin_dismiss(id) {
            return;
        }
        let remove = self.after(EXIT_MS, move |notifier| {
            if notifier.inner.center.borrow_mut().remove(id) {
                notifier.changed();
            }
        });
        self.replace_timers(vec![remove]);
        self.changed();
    }

    /// Shows `request` after `delay_ms`, independent of notifications shown meanwhile.
    pub fn show_later(&self, delay_ms: u32, request: NotificationRequest) {
        let key = {
            let mut next = self.inner.next_deferred.borrow_mut();
            *next += 1;
            *next
        };
        let handle = self.after(delay_ms, move |notifier| {
            let fired = notifier.inner.deferred.borrow_mut().remove(&key);
            notifier.show(request);
            drop(fired);
        });
        self.inner.deferred.borrow_mut().insert(key, handle);
    }

    fn after(&self, delay_ms: u32, task: impl FnOnce(&Notifier<S>) + 'static) -> TaskHandle {
        let weak: Weak<NotifierInner<S>> = Rc::downgrade(&self.inner);
        self.inner.scheduler.schedule(
            delay_ms,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    task(&Notifier { inner });
                }
            }),
        )
    }

    fn replace_timers(&self, timers: Vec<TaskHandle>) {
        let old = std::mem::replace(&mut *self.inner.timers.borrow_mut(), timers);
        for timer in old {
            timer.cancel();
        }
    }

    fn changed(&self) {
        (self.inner.on_change)();
    }
}
