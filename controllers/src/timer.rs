//! Timer seam used by the rotation controller.
//!
//! Handles returned by a [`TimerService`] cancel their timer when dropped, the
//! same contract `gloo_timers::callback::{Interval, Timeout}` follow in the
//! browser. [`VirtualTimers`] is a manual clock with that contract; time only
//! moves when [`VirtualTimers::advance`] is called.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

pub trait TimerService {
    /// Dropping the handle cancels the timer.
    type Handle: 'static;

    fn every(&self, period: Duration, callback: Box<dyn FnMut()>) -> Self::Handle;

    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

enum Callback {
    Repeating {
        period: Duration,
        run: Box<dyn FnMut()>,
    },
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    id: u64,
    due: Duration,
    callback: Callback,
}

#[derive(Default)]
struct Schedule {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry>,
    // id of the callback currently running, and whether its handle was dropped meanwhile
    firing: Option<(u64, bool)>,
}

impl Schedule {
    fn insert(&mut self, due: Duration, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry { id, due, callback });
        id
    }

    fn take_due(&mut self, until: Duration) -> Option<Entry> {
        let position = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.id))
            .map(|(position, _)| position)?;
        let entry = self.entries.remove(position);
        self.now = entry.due;
        self.firing = Some((entry.id, false));
        Some(entry)
    }

    fn cancel(&mut self, id: u64) -> Vec<Entry> {
        if let Some((firing, cancelled)) = self.firing.as_mut() {
            if *firing == id {
                *cancelled = true;
            }
        }
        let (removed, kept): (Vec<Entry>, Vec<Entry>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.id == id);
        self.entries = kept;
        removed
    }
}

/// Deterministic single-threaded clock.
///
/// Timers due at the same instant fire in the order they were registered.
#[derive(Clone, Default)]
pub struct VirtualTimers {
    schedule: Rc<RefCell<Schedule>>,
}

pub struct VirtualHandle {
    id: u64,
    schedule: Weak<RefCell<Schedule>>,
}

impl Drop for VirtualHandle {
    fn drop(&mut self) {
        if let Some(schedule) = self.schedule.upgrade() {
            // removed callbacks are dropped after the borrow ends
            let removed = schedule.borrow_mut().cancel(self.id);
            drop(removed);
        }
    }
}

impl VirtualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.schedule.borrow().now
    }

    /// Number of timers that are still scheduled to fire.
    pub fn pending(&self) -> usize {
        self.schedule.borrow().entries.len()
    }

    /// Moves the clock forward by `by`, running every callback that falls due
    /// on the way, in expiry order.
    pub fn advance(&self, by: Duration) {
        let until = self.now() + by;
        loop {
            let next = self.schedule.borrow_mut().take_due(until);
            let Some(Entry { id, due, callback }) = next else {
                break;
            };
            match callback {
                Callback::Once(run) => {
                    run();
                    self.schedule.borrow_mut().firing = None;
                }
                Callback::Repeating { period, mut run } => {
                    run();
                    let mut schedule = self.schedule.borrow_mut();
                    let cancelled = matches!(schedule.firing.take(), Some((_, true)));
                    if !cancelled {
                        schedule.entries.push(Entry {
                            id,
                            due: due + period,
                            callback: Callback::Repeating { period, run },
                        });
                    }
                }
            }
        }
        self.schedule.borrow_mut().now = until;
    }

    fn handle(&self, id: u64) -> VirtualHandle {
        VirtualHandle {
            id,
            schedule: Rc::downgrade(&self.schedule),
        }
    }
}

impl TimerService for VirtualTimers {
    type Handle = VirtualHandle;

    fn every(&self, period: Duration, callback: Box<dyn FnMut()>) -> VirtualHandle {
        let period = period.max(Duration::from_millis(1));
        let id = {
            let mut schedule = self.schedule.borrow_mut();
            let due = schedule.now + period;
            schedule.insert(
                due,
                Callback::Repeating {
                    period,
                    run: callback,
                },
            )
        };
        self.handle(id)
    }

    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> VirtualHandle {
        let id = {
            let mut schedule = self.schedule.borrow_mut();
            let due = schedule.now + delay;
            schedule.insert(due, Callback::Once(callback))
        };
        self.handle(id)
    }
}
