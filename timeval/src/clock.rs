use core::cell::Cell;

use crate::Time;

/// A source of wall-clock readings.
///
/// [`Time::refresh_from`] reads through this trait, which lets tests and
/// simulations supply their own notion of "now".
pub trait ClockSource {
    /// Return the current reading of this clock.
    fn now(&self) -> Time;
}

impl<C: ClockSource + ?Sized> ClockSource for &C {
    fn now(&self) -> Time {
        (**self).now()
    }
}

/// The host realtime clock, read with microsecond resolution.
///
/// Like `std::time::SystemTime`, readings are not guaranteed to be steady.
/// The clock is subject to phase and frequency adjustments and may jump
/// forward or backward.
#[derive(Copy, Clone, Default, Debug)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> Time {
        let now = crate::sys::realtime::micros();
        log::trace!("read realtime clock: {now}");
        now
    }
}

/// A clock which only moves when told to.
#[derive(Default, Debug)]
pub struct FixedClock {
    now: Cell<Time>,
}

impl FixedClock {
    pub fn new(now: Time) -> Self {
        Self {
            now: Cell::new(now),
        }
    }

    /// Replace the current reading.
    pub fn set(&self, now: Time) {
        self.now.set(now);
    }

    /// Move the current reading forward by `delta`.
    pub fn advance(&self, delta: Time) {
        self.now.set(self.now.get() + delta);
    }
}

impl ClockSource for FixedClock {
    fn now(&self) -> Time {
        self.now.get()
    }
}
