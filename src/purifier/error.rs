use crate::miot::MiotClientError;
use serde_json::Value;
use thiserror::Error;

pub const FAVORITE_RPM_MIN: i64 = 300;
pub const FAVORITE_RPM_MAX: i64 = 2300;
pub const FAVORITE_RPM_STEP: i64 = 10;
pub const FAVORITE_LEVEL_MIN: i64 = 0;
pub const FAVORITE_LEVEL_MAX: i64 = 14;

#[derive(Error, Debug)]
pub enum AirPurifierError {
    #[error(
        "invalid favorite motor speed: {rpm}. Must be between {min} and {max} and divisible by {step}",
        min = FAVORITE_RPM_MIN,
        max = FAVORITE_RPM_MAX,
        step = FAVORITE_RPM_STEP
    )]
    InvalidFavoriteRpm { rpm: i64 },
    #[error(
        "invalid favorite level: {level}. Must be between {min} and {max}",
        min = FAVORITE_LEVEL_MIN,
        max = FAVORITE_LEVEL_MAX
    )]
    InvalidFavoriteLevel { level: i64 },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Client(#[from] MiotClientError),
}

/// A reported value that does not decode into its closed enumeration.
#[derive(Error, Debug, PartialEq)]
pub enum DecodeError {
    #[error("unknown {property} code {code}")]
    UnknownCode { property: &'static str, code: i64 },
    #[error("unexpected {property} value {value}, expected an integer")]
    UnexpectedType { property: &'static str, value: Value },
}

#[derive(Error, Debug, PartialEq)]
#[error("invalid {kind} '{value}', expected one of: {expected}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}
