use crate::{Time, MICROS_PER_SEC};

pub mod realtime {
    use super::*;

    use winapi::shared::minwindef::FILETIME;

    // 100ns intervals between 1601-01-01 and 1970-01-01
    const UNIX_EPOCH_INTERVALS: u64 = 116_444_736_000_000_000;
    const INTERVALS_PER_MICRO: u64 = 10;

    fn unix_intervals() -> u64 {
        let ft = unsafe {
            let mut ft: FILETIME = core::mem::zeroed();
            winapi::um::sysinfoapi::GetSystemTimePreciseAsFileTime(&mut ft);
            ft
        };

        let filetime = ((ft.dwHighDateTime as u64) << 32) | ft.dwLowDateTime as u64;

        filetime.saturating_sub(UNIX_EPOCH_INTERVALS)
    }

    pub fn micros() -> Time {
        let micros = unix_intervals() / INTERVALS_PER_MICRO;

        Time::new(micros / MICROS_PER_SEC, (micros % MICROS_PER_SEC) as u32)
    }
}
