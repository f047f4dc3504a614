use thiserror::Error;

/// Errors returned when converting into a `Time`.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("can not convert to Time: value is before unix epoch")]
    BeforeEpoch,
}

/// Errors returned when parsing a `Time` from its rendered form.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing '.' between seconds and microseconds")]
    MissingSeparator,
    #[error("seconds must be one or more decimal digits that fit in 64 bits")]
    InvalidSeconds,
    #[error("microseconds must be exactly six decimal digits")]
    InvalidMicros,
}
