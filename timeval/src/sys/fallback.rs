pub mod realtime {
    use crate::Time;

    pub fn micros() -> Time {
        Time::try_from(std::time::SystemTime::now()).unwrap_or_default()
    }
}
