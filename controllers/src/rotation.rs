//! Timed rotation through a fixed number of items.
//!
//! A repeating timer advances the active item while auto-advance is on.
//! Manual navigation pauses auto-advance and arms a single resume timer;
//! navigating again replaces that timer so only the latest call counts.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::error::{check_index, ControllerError};
use crate::timer::TimerService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationState {
    pub active_index: usize,
    pub auto_advance: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPhase {
    Auto,
    Paused,
    Stopped,
}

type Listener = Rc<dyn Fn(RotationState)>;

struct Inner<H> {
    len: usize,
    state: RotationState,
    stopped: bool,
    ticker: Option<H>,
    resume: Option<H>,
    listener: Option<Listener>,
}

impl<H> Inner<H> {
    fn snapshot(&self) -> Option<(Listener, RotationState)> {
        self.listener.clone().map(|listener| (listener, self.state))
    }
}

// Listener runs after the borrow is released so it may read the controller.
fn notify(snapshot: Option<(Listener, RotationState)>) {
    if let Some((listener, state)) = snapshot {
        listener(state);
    }
}

pub struct RotationController<T: TimerService + 'static> {
    inner: Rc<RefCell<Inner<T::Handle>>>,
    timers: T,
    resume_delay: Duration,
}

impl<T: TimerService + 'static> RotationController<T> {
    /// Creates a controller over `len` items, starting at index 0 with
    /// auto-advance on. `resume_delay` is how long manual navigation keeps
    /// auto-advance suspended.
    pub fn new(len: usize, resume_delay: Duration, timers: T) -> Result<Self, ControllerError> {
        if len == 0 {
            return Err(ControllerError::EmptyItems);
        }
        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                len,
                state: RotationState {
                    active_index: 0,
                    auto_advance: true,
                },
                stopped: false,
                ticker: None,
                resume: None,
                listener: None,
            })),
            timers,
            resume_delay,
        })
    }

    /// Registers a callback that receives the state after every change.
    pub fn with_listener(self, listener: impl Fn(RotationState) + 'static) -> Self {
        self.inner.borrow_mut().listener = Some(Rc::new(listener));
        self
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len
    }

    pub fn state(&self) -> RotationState {
        self.inner.borrow().state
    }

    pub fn active_index(&self) -> usize {
        self.state().active_index
    }

    pub fn auto_advance(&self) -> bool {
        self.state().auto_advance
    }

    pub fn phase(&self) -> RotationPhase {
        let inner = self.inner.borrow();
        if inner.stopped {
            RotationPhase::Stopped
        } else if inner.state.auto_advance {
            RotationPhase::Auto
        } else {
            RotationPhase::Paused
        }
    }

    /// Starts the repeating advance timer. Does nothing if a timer is
    /// already running or the controller was stopped.
    pub fn start(&self, period: Duration) {
        {
            let inner = self.inner.borrow();
            if inner.stopped || inner.ticker.is_some() {
                return;
            }
        }
        let weak = Rc::downgrade(&self.inner);
        let handle = self.timers.every(
            period,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    advance(&inner);
                }
            }),
        );
        self.inner.borrow_mut().ticker = Some(handle);
        let period_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX);
        tracing::debug!(period_ms, "rotation started");
    }

    /// Advances to the next item when auto-advance is on.
    pub fn tick(&self) {
        advance(&self.inner);
    }

    pub fn go_to(&self, index: usize) -> Result<(), ControllerError> {
        let len = self.len();
        let index = check_index(index, len).map_err(|err| {
            tracing::warn!(%err, "rejected rotation index");
            err
        })?;
        self.navigate(index);
        Ok(())
    }

    pub fn next(&self) {
        let RotationState { active_index, .. } = self.state();
        self.navigate((active_index + 1) % self.len());
    }

    pub fn previous(&self) {
        let RotationState { active_index, .. } = self.state();
        let len = self.len();
        self.navigate((active_index + len - 1) % len);
    }

    /// Flips auto-advance. A pending resume is dropped so a pause chosen here
    /// stays until toggled again.
    pub fn toggle_auto_advance(&self) {
        let (cancelled, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            inner.state.auto_advance = !inner.state.auto_advance;
            (inner.resume.take(), inner.snapshot())
        };
        drop(cancelled);
        notify(snapshot);
    }

    /// Cancels both timers. Safe to call repeatedly; the controller does not
    /// schedule anything afterwards.
    pub fn stop(&self) {
        let (ticker, resume) = {
            let mut inner = self.inner.borrow_mut();
            if inner.stopped {
                return;
            }
            inner.stopped = true;
            (inner.ticker.take(), inner.resume.take())
        };
        drop(ticker);
        drop(resume);
        tracing::debug!("rotation stopped");
    }

    fn navigate(&self, index: usize) {
        let (stopped, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            inner.state.active_index = index;
            inner.state.auto_advance = false;
            (inner.stopped, inner.snapshot())
        };
        if !stopped {
            let weak = Rc::downgrade(&self.inner);
            let handle = self.timers.after(
                self.resume_delay,
                Box::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        resume(&inner);
                    }
                }),
            );
            let replaced = self.inner.borrow_mut().resume.replace(handle);
            drop(replaced);
        }
        notify(snapshot);
    }
}

fn advance<H>(inner: &RefCell<Inner<H>>) {
    let snapshot = {
        let mut inner = inner.borrow_mut();
        if inner.stopped || !inner.state.auto_advance {
            return;
        }
        inner.state.active_index = (inner.state.active_index + 1) % inner.len;
        inner.snapshot()
    };
    notify(snapshot);
}

// The fired handle stays in `resume` until replaced or stopped; a timer must
// not be dropped from inside its own callback.
fn resume<H>(inner: &RefCell<Inner<H>>) {
    let snapshot = {
        let mut inner = inner.borrow_mut();
        if inner.stopped {
            return;
        }
        inner.state.auto_advance = true;
        inner.snapshot()
    };
    tracing::debug!("auto-advance resumed");
    notify(snapshot);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::VirtualTimers;

    const RESUME: Duration = Duration::from_millis(10_000);

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn controller(len: usize) -> (RotationController<VirtualTimers>, VirtualTimers) {
        let timers = VirtualTimers::new();
        let rotation = RotationController::new(len, RESUME, timers.clone()).expect("non-empty");
        (rotation, timers)
    }

    #[test]
    fn rejects_empty_item_list() {
        let result = RotationController::new(0, RESUME, VirtualTimers::new());
        assert!(matches!(result, Err(ControllerError::EmptyItems)));
    }

    #[test]
    fn periods_beyond_u64_millis_still_start() {
        let (rotation, timers) = controller(3);
        rotation.start(Duration::from_secs(u64::MAX / 2));
        assert_eq!(timers.pending(), 1);

        timers.advance(ms(60_000));
        assert_eq!(rotation.active_index(), 0);
    }

    #[test]
    fn starts_on_first_item_with_auto_advance() {
        let (rotation, _timers) = controller(3);
        assert_eq!(
            rotation.state(),
            RotationState {
                active_index: 0,
                auto_advance: true
            }
        );
        assert_eq!(rotation.phase(), RotationPhase::Auto);
    }

    #[test]
    fn ticks_cycle_in_order_and_wrap() {
        for len in 1..=6 {
            let (rotation, _timers) = controller(len);
            for step in 1..=len * 2 {
                rotation.tick();
                assert_eq!(rotation.active_index(), step % len, "len {len} step {step}");
            }
        }
    }

    #[test]
    fn timer_drives_the_rotation() {
        let (rotation, timers) = controller(3);
        rotation.start(ms(2000));

        let mut seen = Vec::new();
        for _ in 0..4 {
            timers.advance(ms(2000));
            seen.push(rotation.active_index());
        }
        assert_eq!(seen, vec![1, 2, 0, 1]);
    }

    #[test]
    fn starting_twice_keeps_a_single_timer() {
        let (rotation, timers) = controller(5);
        rotation.start(ms(5000));
        rotation.start(ms(5000));
        assert_eq!(timers.pending(), 1);

        timers.advance(ms(5000));
        assert_eq!(rotation.active_index(), 1);
    }

    #[test]
    fn tick_is_ignored_while_paused() {
        let (rotation, _timers) = controller(4);
        rotation.toggle_auto_advance();
        assert_eq!(rotation.phase(), RotationPhase::Paused);

        rotation.tick();
        rotation.tick();
        assert_eq!(rotation.active_index(), 0);
    }

    #[test]
    fn go_to_selects_and_pauses() {
        let (rotation, _timers) = controller(4);
        rotation.go_to(2).expect("in range");
        assert_eq!(
            rotation.state(),
            RotationState {
                active_index: 2,
                auto_advance: false
            }
        );
        assert_eq!(rotation.phase(), RotationPhase::Paused);
    }

    #[test]
    fn go_to_out_of_range_leaves_state_alone() {
        let (rotation, timers) = controller(4);
        rotation.tick();

        assert_eq!(
            rotation.go_to(4),
            Err(ControllerError::InvalidIndex { index: 4, len: 4 })
        );
        assert_eq!(
            rotation.state(),
            RotationState {
                active_index: 1,
                auto_advance: true
            }
        );
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn auto_advance_resumes_after_exactly_the_delay() {
        let (rotation, timers) = controller(4);
        rotation.go_to(1).expect("in range");

        timers.advance(ms(9_999));
        assert!(!rotation.auto_advance());
        timers.advance(ms(1));
        assert!(rotation.auto_advance());
        assert_eq!(rotation.active_index(), 1);
    }

    #[test]
    fn repeated_navigation_debounces_the_resume() {
        let (rotation, timers) = controller(4);
        let resumes = Rc::new(RefCell::new(0));
        let counter = resumes.clone();
        let rotation = rotation.with_listener(move |state| {
            if state.auto_advance {
                *counter.borrow_mut() += 1;
            }
        });

        rotation.go_to(1).expect("in range");
        timers.advance(ms(4_000));
        rotation.go_to(2).expect("in range");
        assert_eq!(timers.pending(), 1);

        // first call's deadline passes without effect
        timers.advance(ms(6_000));
        assert!(!rotation.auto_advance());

        timers.advance(ms(3_999));
        assert!(!rotation.auto_advance());
        timers.advance(ms(1));
        assert!(rotation.auto_advance());

        timers.advance(ms(60_000));
        assert_eq!(*resumes.borrow(), 1);
    }

    #[test]
    fn next_and_previous_wrap_and_pause() {
        let (rotation, _timers) = controller(3);
        rotation.previous();
        assert_eq!(rotation.active_index(), 2);
        assert!(!rotation.auto_advance());

        rotation.next();
        assert_eq!(rotation.active_index(), 0);
        rotation.next();
        assert_eq!(rotation.active_index(), 1);
    }

    #[test]
    fn navigation_holds_at_most_one_resume_timer() {
        let (rotation, timers) = controller(4);
        rotation.start(ms(5000));
        for _ in 0..10 {
            rotation.next();
            timers.advance(ms(500));
        }
        assert_eq!(timers.pending(), 2);
    }

    #[test]
    fn testimonial_scenario() {
        let (rotation, timers) = controller(4);
        rotation.start(ms(5000));
        assert_eq!(rotation.active_index(), 0);

        timers.advance(ms(5000));
        assert_eq!(rotation.active_index(), 1);

        timers.advance(ms(1000));
        rotation.go_to(3).expect("in range");
        assert_eq!(rotation.active_index(), 3);
        assert!(!rotation.auto_advance());

        timers.advance(ms(9_999));
        assert!(!rotation.auto_advance());
        assert_eq!(rotation.active_index(), 3);
        timers.advance(ms(1));
        assert_eq!(timers.now(), ms(16_000));
        assert!(rotation.auto_advance());

        timers.advance(ms(5000));
        assert_eq!(timers.now(), ms(21_000));
        assert_eq!(rotation.active_index(), 0);
    }

    #[test]
    fn explicit_pause_survives_a_pending_resume() {
        let (rotation, timers) = controller(4);
        rotation.start(ms(5000));
        rotation.go_to(1).expect("in range");

        rotation.toggle_auto_advance();
        assert!(rotation.auto_advance());
        rotation.toggle_auto_advance();
        assert!(!rotation.auto_advance());

        timers.advance(ms(30_000));
        assert!(!rotation.auto_advance());
        assert_eq!(rotation.active_index(), 1);
    }

    #[test]
    fn toggle_does_not_schedule_a_resume() {
        let (rotation, timers) = controller(4);
        rotation.toggle_auto_advance();
        assert_eq!(timers.pending(), 0);
        timers.advance(ms(60_000));
        assert!(!rotation.auto_advance());
    }

    #[test]
    fn stop_cancels_everything_and_is_idempotent() {
        let (rotation, timers) = controller(4);
        rotation.start(ms(5000));
        rotation.go_to(2).expect("in range");
        assert_eq!(timers.pending(), 2);

        rotation.stop();
        rotation.stop();
        assert_eq!(timers.pending(), 0);
        assert_eq!(rotation.phase(), RotationPhase::Stopped);

        timers.advance(ms(60_000));
        assert_eq!(
            rotation.state(),
            RotationState {
                active_index: 2,
                auto_advance: false
            }
        );
    }

    #[test]
    fn stopped_controller_schedules_nothing() {
        let (rotation, timers) = controller(4);
        rotation.stop();
        rotation.start(ms(5000));
        rotation.go_to(1).expect("in range");
        rotation.tick();

        assert_eq!(timers.pending(), 0);
        assert_eq!(rotation.active_index(), 1);
    }

    #[test]
    fn dropping_the_controller_cancels_its_timers() {
        let (rotation, timers) = controller(4);
        rotation.start(ms(5000));
        rotation.go_to(1).expect("in range");
        drop(rotation);

        assert_eq!(timers.pending(), 0);
        timers.advance(ms(60_000));
    }

    #[test]
    fn listener_sees_every_change() {
        let (rotation, timers) = controller(3);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let rotation = rotation.with_listener(move |state| sink.borrow_mut().push(state));

        rotation.start(ms(1000));
        timers.advance(ms(1000));
        rotation.go_to(0).expect("in range");
        timers.advance(ms(10_000));

        let seen = seen.borrow();
        let indices: Vec<_> = seen.iter().map(|s| (s.active_index, s.auto_advance)).collect();
        assert_eq!(indices[..3], [(1, true), (0, false), (0, true)]);
    }
}
