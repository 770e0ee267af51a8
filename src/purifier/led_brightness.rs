use crate::purifier::error::{DecodeError, ParseEnumError};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LedBrightness {
    Bright = 0,
    Dim = 1,
    Off = 2,
}

impl LedBrightness {
    pub const ALL: [LedBrightness; 3] = [LedBrightness::Bright, LedBrightness::Dim, LedBrightness::Off];

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn name(self) -> &'static str {
        match self {
            LedBrightness::Bright => "Bright",
            LedBrightness::Dim => "Dim",
            LedBrightness::Off => "Off",
        }
    }
}

impl TryFrom<i64> for LedBrightness {
    type Error = DecodeError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        LedBrightness::ALL
            .into_iter()
            .find(|brightness| brightness.code() == code)
            .ok_or(DecodeError::UnknownCode {
                property: "led_brightness",
                code,
            })
    }
}

impl FromStr for LedBrightness {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LedBrightness::ALL
            .into_iter()
            .find(|brightness| brightness.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseEnumError {
                kind: "LED brightness",
                value: s.to_string(),
                expected: "bright, dim, off",
            })
    }
}

impl Display for LedBrightness {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, LedBrightness::Bright)]
    #[case(1, LedBrightness::Dim)]
    #[case(2, LedBrightness::Off)]
    fn decodes_known_codes(#[case] code: i64, #[case] expected: LedBrightness) {
        assert_eq!(LedBrightness::try_from(code), Ok(expected));
        assert_eq!(expected.code(), code);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(LedBrightness::try_from(5).is_err());
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("dim".parse::<LedBrightness>(), Ok(LedBrightness::Dim));
        assert_eq!("OFF".parse::<LedBrightness>(), Ok(LedBrightness::Off));
        assert!("medium".parse::<LedBrightness>().is_err());
    }
}
