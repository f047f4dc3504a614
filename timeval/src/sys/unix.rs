use crate::{Time, NANOS_PER_MICRO};

pub fn read_clock(clock: libc::clockid_t) -> libc::timespec {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    unsafe {
        libc::clock_gettime(clock, &mut ts);
    }

    ts
}

pub mod realtime {
    use super::*;

    pub fn micros() -> Time {
        let ts = read_clock(libc::CLOCK_REALTIME);

        Time::new(
            ts.tv_sec as u64,
            (ts.tv_nsec as u64 / NANOS_PER_MICRO) as u32,
        )
    }
}
