use core::cmp::Ordering;
use core::fmt::{Display, Write};
use core::ops::{Add, AddAssign};
use core::str::FromStr;

use crate::clock::{ClockSource, SystemClock};
use crate::{Error, ParseError, MICROS_PER_SEC, NANOS_PER_MICRO};

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A wall-clock reading in whole seconds and microseconds since the UNIX
/// epoch.
///
/// `usecs` is expected to be in the range `0..=999_999`. Every operation on
/// this type which changes the value keeps it there by carrying excess
/// microseconds into `secs`. The exception is [`Time::new`], which stores what
/// it is given. Comparing or rendering such a value works on the literal
/// integers.
///
/// Seconds are held in a `u64`, which is enough for several hundred billion
/// years. Accumulating past that wraps around silently.
///
/// Unlike `std::time::SystemTime` the internal representation has a fixed
/// layout and is cheap to copy, compare, and add.
#[derive(Copy, Clone, Default, Debug, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Time {
    secs: u64,
    usecs: u32,
}

impl Time {
    /// `1970-01-01T00:00:00.000000Z`, which is also the default value.
    pub const EPOCH: Time = Time { secs: 0, usecs: 0 };

    /// Number of bytes needed by [`Time::format_into`] to hold the complete
    /// rendering of a value whose seconds fit in twelve digits.
    pub const FORMATTED_LEN: usize = 19;

    /// Create a `Time` from its parts. The parts are stored as given; passing
    /// `usecs` above `999_999` produces a value that is not normalized.
    pub const fn new(secs: u64, usecs: u32) -> Self {
        Self { secs, usecs }
    }

    /// Return a `Time` holding the current reading of the system clock.
    pub fn now() -> Self {
        SystemClock.now()
    }

    pub const fn secs(&self) -> u64 {
        self.secs
    }

    pub const fn usecs(&self) -> u32 {
        self.usecs
    }

    /// Overwrite this value with the current reading of the system clock and
    /// return it for chaining.
    pub fn refresh(&mut self) -> &mut Self {
        self.refresh_from(&SystemClock)
    }

    /// Overwrite this value with the current reading of `clock` and return it
    /// for chaining.
    pub fn refresh_from<C: ClockSource + ?Sized>(&mut self, clock: &C) -> &mut Self {
        *self = clock.now();
        self
    }

    /// True when both fields are identical.
    pub const fn equals(&self, other: &Self) -> bool {
        self.secs == other.secs && self.usecs == other.usecs
    }

    /// Compares seconds first and falls back to microseconds when the seconds
    /// are equal.
    pub const fn less_than(&self, other: &Self) -> bool {
        if self.secs != other.secs {
            self.secs < other.secs
        } else {
            self.usecs < other.usecs
        }
    }

    /// Add `other` into this value, carry microseconds into seconds, and
    /// return this value for chaining.
    pub fn accumulate(&mut self, other: Time) -> &mut Self {
        self.secs = self.secs.wrapping_add(other.secs);

        // summing in 64 bits keeps two out-of-range inputs from overflowing
        let usecs = self.usecs as u64 + other.usecs as u64;
        self.secs = self.secs.wrapping_add(usecs / MICROS_PER_SEC);
        self.usecs = (usecs % MICROS_PER_SEC) as u32;

        self
    }

    /// Render into `buf` as `SSSSSSSSSSSS.UUUUUU` and return the rendered text.
    ///
    /// At most `buf.len()` bytes are written. When `buf` is too small the
    /// rendering is truncated, so callers should provide at least
    /// [`Time::FORMATTED_LEN`] bytes.
    pub fn format_into<'a>(&self, buf: &'a mut [u8]) -> &'a str {
        let mut writer = SliceWriter { buf, len: 0 };

        // the writer never fails, it drops whatever does not fit
        let _ = write!(writer, "{self}");

        let len = writer.len;
        let buf: &'a [u8] = writer.buf;

        // the rendering is ascii, so any prefix is valid utf8
        core::str::from_utf8(&buf[..len]).unwrap_or_default()
    }
}

struct SliceWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl Write for SliceWriter<'_> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        let available = self.buf.len() - self.len;
        let n = core::cmp::min(available, s.len());
        self.buf[self.len..self.len + n].copy_from_slice(&s.as_bytes()[..n]);
        self.len += n;
        Ok(())
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:012}.{:06}", self.secs, self.usecs)
    }
}

impl PartialEq for Time {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        !self.equals(other)
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }

    fn lt(&self, other: &Self) -> bool {
        self.less_than(other)
    }

    fn gt(&self, other: &Self) -> bool {
        other.less_than(self)
    }

    fn le(&self, other: &Self) -> bool {
        !self.gt(other)
    }

    fn ge(&self, other: &Self) -> bool {
        !self.lt(other)
    }
}

impl Ord for Time {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if self.equals(other) {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }
}

impl AddAssign<Time> for Time {
    fn add_assign(&mut self, rhs: Time) {
        self.accumulate(rhs);
    }
}

impl Add<Time> for Time {
    type Output = Time;

    fn add(mut self, rhs: Time) -> Self::Output {
        self.accumulate(rhs);
        self
    }
}

impl From<core::time::Duration> for Time {
    fn from(other: core::time::Duration) -> Self {
        Self {
            secs: other.as_secs(),
            usecs: other.subsec_micros(),
        }
    }
}

impl From<Time> for core::time::Duration {
    fn from(other: Time) -> Self {
        core::time::Duration::from_secs(other.secs)
            + core::time::Duration::from_nanos(other.usecs as u64 * NANOS_PER_MICRO)
    }
}

impl TryFrom<std::time::SystemTime> for Time {
    type Error = Error;

    fn try_from(other: std::time::SystemTime) -> Result<Self, Self::Error> {
        other
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map(Time::from)
            .map_err(|_| Error::BeforeEpoch)
    }
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (secs, usecs) = s.split_once('.').ok_or(ParseError::MissingSeparator)?;

        if secs.is_empty() || !secs.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidSeconds);
        }
        let secs = secs.parse().map_err(|_| ParseError::InvalidSeconds)?;

        if usecs.len() != 6 || !usecs.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidMicros);
        }
        let usecs = usecs.parse().map_err(|_| ParseError::InvalidMicros)?;

        Ok(Self { secs, usecs })
    }
}
