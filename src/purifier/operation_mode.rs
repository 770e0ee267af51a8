use crate::purifier::error::{DecodeError, ParseEnumError};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OperationMode {
    Auto = 0,
    Silent = 1,
    Favorite = 2,
    Fan = 3,
}

impl OperationMode {
    pub const ALL: [OperationMode; 4] = [
        OperationMode::Auto,
        OperationMode::Silent,
        OperationMode::Favorite,
        OperationMode::Fan,
    ];

    /// The raw value the device uses for this mode.
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            OperationMode::Auto => "Auto",
            OperationMode::Silent => "Silent",
            OperationMode::Favorite => "Favorite",
            OperationMode::Fan => "Fan",
        }
    }
}

impl TryFrom<i64> for OperationMode {
    type Error = DecodeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        OperationMode::ALL
            .into_iter()
            .find(|mode| mode.code() == code)
            .ok_or(DecodeError::UnknownCode { property: "mode", code })
    }
}

impl FromStr for OperationMode {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OperationMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError {
                kind: "mode",
                value: s.to_string(),
                expected: "auto, silent, favorite, fan",
            })
    }
}

impl Display for OperationMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
