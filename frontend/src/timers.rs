use std::time::Duration;

use gloo_timers::callback::{Interval, Timeout};
use noteflow_controllers::TimerService;

/// Browser timers. The gloo handles clear their timer when dropped.
#[derive(Clone, Copy, Default)]
pub struct GlooTimers;

// Only held so their Drop runs.
#[allow(dead_code)]
pub enum GlooHandle {
    Interval(Interval),
    Timeout(Timeout),
}

fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl TimerService for GlooTimers {
    type Handle = GlooHandle;

    fn every(&self, period: Duration, callback: Box<dyn FnMut()>) -> GlooHandle {
        GlooHandle::Interval(Interval::new(millis(period), callback))
    }

    fn after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> GlooHandle {
        GlooHandle::Timeout(Timeout::new(millis(delay), callback))
    }
}
