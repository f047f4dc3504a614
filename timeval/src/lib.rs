//! This crate provides `Time`, a wall-clock reading held as a whole number of
//! seconds and a whole number of microseconds since the UNIX epoch.
//!
//! The value is a plain pair of integers. It can be compared, accumulated with
//! `+=`, and rendered in a fixed-width `SSSSSSSSSSSS.UUUUUU` layout. The only
//! operation which touches the host is reading the clock, and that read goes
//! through a [`ClockSource`] so it can be replaced in tests.
//!
//! ```
//! use timeval::Time;
//!
//! let mut elapsed = Time::new(0, 999_999);
//! elapsed += Time::new(0, 2);
//!
//! assert_eq!(elapsed, Time::new(1, 1));
//! assert_eq!(elapsed.to_string(), "000000000001.000001");
//! ```

mod clock;
mod error;
mod sys;
mod time;

pub use clock::{ClockSource, FixedClock, SystemClock};
pub use error::{Error, ParseError};
pub use time::Time;

const MICROS_PER_SEC: u64 = 1_000_000;
const NANOS_PER_MICRO: u64 = 1_000;
