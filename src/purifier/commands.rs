use crate::purifier::{LedBrightness, OperationMode};
use std::fmt::{Display, Formatter};

/// A write operation on an air purifier. `Display` renders the confirmation line shown before it is sent.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PurifierCommand {
    On,
    Off,
    SetMode(OperationMode),
    SetFavoriteRpm(i64),
    SetFavoriteLevel(i64),
    SetLedBrightness(LedBrightness),
    SetBuzzer(bool),
    SetChildLock(bool),
    SetGesture(bool),
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

impl Display for PurifierCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PurifierCommand::On => write!(f, "Powering on"),
            PurifierCommand::Off => write!(f, "Powering off"),
            PurifierCommand::SetMode(mode) => write!(f, "Setting mode to '{}'", mode),
            PurifierCommand::SetFavoriteRpm(rpm) => write!(f, "Setting favorite motor speed '{}' rpm", rpm),
            PurifierCommand::SetFavoriteLevel(level) => write!(f, "Setting favorite level to {}", level),
            PurifierCommand::SetLedBrightness(brightness) => write!(f, "Setting LED brightness to {}", brightness),
            PurifierCommand::SetBuzzer(buzzer) => write!(f, "Turning {} buzzer", on_off(*buzzer)),
            PurifierCommand::SetChildLock(lock) => write!(f, "Turning {} child lock", on_off(*lock)),
            PurifierCommand::SetGesture(gesture) => write!(f, "Turning {} gesture control", on_off(*gesture)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(PurifierCommand::On, "Powering on")]
    #[case(PurifierCommand::Off, "Powering off")]
    #[case(PurifierCommand::SetMode(OperationMode::Favorite), "Setting mode to 'Favorite'")]
    #[case(PurifierCommand::SetFavoriteRpm(1000), "Setting favorite motor speed '1000' rpm")]
    #[case(PurifierCommand::SetFavoriteLevel(7), "Setting favorite level to 7")]
    #[case(PurifierCommand::SetLedBrightness(LedBrightness::Dim), "Setting LED brightness to Dim")]
    #[case(PurifierCommand::SetBuzzer(true), "Turning on buzzer")]
    #[case(PurifierCommand::SetChildLock(false), "Turning off child lock")]
    #[case(PurifierCommand::SetGesture(true), "Turning on gesture control")]
    fn renders_the_confirmation_line(#[case] command: PurifierCommand, #[case] expected: &str) {
        assert_eq!(command.to_string(), expected);
    }
}
