use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, error, warn};

use crate::constants::{NOTIFICATION_DISPLAY_MS, NOTIFICATION_EXIT_MS};
use crate::error::RenderError;
use crate::notification::{Notification, NotificationId, Severity, KEYFRAMES_CSS};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Handle to a deferred task. Dropping it must not cancel the task.
pub trait TaskHandle {
    fn cancel(self);
}

pub trait Scheduler {
    type Handle: TaskHandle + 'static;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Where notifications are drawn.
pub trait Renderer {
    type Node: 'static;

    fn install_styles(&self, css: &str) -> Result<(), RenderError>;
    fn mount(&self, notification: &Notification) -> Result<Self::Node, RenderError>;
    fn begin_exit(&self, node: &Self::Node);
    fn unmount(&self, node: &Self::Node);
}

impl<S: Scheduler> Scheduler for Rc<S> {
    type Handle = S::Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle {
        (**self).schedule(delay_ms, task)
    }
}

impl<R: Renderer> Renderer for Rc<R> {
    type Node = R::Node;

    fn install_styles(&self, css: &str) -> Result<(), RenderError> {
        (**self).install_styles(css)
    }

    fn mount(&self, notification: &Notification) -> Result<Self::Node, RenderError> {
        (**self).mount(notification)
    }

    fn begin_exit(&self, node: &Self::Node) {
        (**self).begin_exit(node)
    }

    fn unmount(&self, node: &Self::Node) {
        (**self).unmount(node)
    }
}

type Pending<H> = Rc<RefCell<HashMap<NotificationId, H>>>;

/// Shows transient notifications: mounted at once, sent into the exit
/// animation after `NOTIFICATION_DISPLAY_MS`, removed `NOTIFICATION_EXIT_MS`
/// later. Each call runs its own independent lifecycle.
pub struct Presenter<R, S: Scheduler, C = SystemClock> {
    renderer: Rc<R>,
    scheduler: Rc<S>,
    clock: C,
    next_id: Cell<u64>,
    pending: Pending<S::Handle>,
}

impl<R, S> Presenter<R, S>
where
    R: Renderer + 'static,
    S: Scheduler + 'static,
{
    pub fn new(renderer: R, scheduler: S) -> Self {
        Self::with_clock(renderer, scheduler, SystemClock)
    }
}

impl<R, S, C> Presenter<R, S, C>
where
    R: Renderer + 'static,
    S: Scheduler + 'static,
    C: Clock,
{
    pub fn with_clock(renderer: R, scheduler: S, clock: C) -> Self {
        if let Err(err) = renderer.install_styles(KEYFRAMES_CSS) {
            warn!("Notification animations unavailable: {err}");
        }
        Self {
            renderer: Rc::new(renderer),
            scheduler: Rc::new(scheduler),
            clock,
            next_id: Cell::new(0),
            pending: Rc::new(RefCell::new(HashMap::new())),
        }
    }

    /// Number of notifications still waiting on a lifecycle step.
    pub fn in_flight(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn notify(&self, message: &str, severity: Severity) {
        let id = NotificationId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let notification = Notification {
            id,
            message: message.to_string(),
            severity,
            created_at: self.clock.now(),
        };

        let node = match self.renderer.mount(&notification) {
            Ok(node) => node,
            Err(err) => {
                error!("Failed to show notification: {err}");
                return;
            }
        };
        debug!("Notification {id} shown ({severity})");

        let renderer = Rc::clone(&self.renderer);
        let scheduler = Rc::clone(&self.scheduler);
        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.schedule(
            NOTIFICATION_DISPLAY_MS,
            Box::new(move || {
                renderer.begin_exit(&node);
                let removal = {
                    let pending = Rc::clone(&pending);
                    scheduler.schedule(
                        NOTIFICATION_EXIT_MS,
                        Box::new(move || {
                            renderer.unmount(&node);
                            pending.borrow_mut().remove(&id);
                            debug!("Notification {id} removed");
                        }),
                    )
                };
                pending.borrow_mut().insert(id, removal);
            }),
        );
        self.pending.borrow_mut().insert(id, handle);
    }
}
