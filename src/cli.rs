use crate::miot::MiotClient;
use crate::purifier::{AirPurifier, AirPurifierError, LedBrightness, OperationMode, PurifierCommand};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "airpurifier-miot", version, about = "Control a MIoT air purifier (zhimi.airpurifier.za1)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum CliCommand {
    /// Retrieve properties.
    Status {
        /// Print the raw property values as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Power on.
    On,
    /// Power off.
    Off,
    /// Set mode (auto, silent, favorite, fan).
    SetMode { mode: OperationMode },
    /// Set favorite motor speed.
    SetFavoriteRpm {
        #[arg(allow_negative_numbers = true)]
        rpm: i64,
    },
    /// Set the favorite level used when the mode is `favorite`, between 0 and 14.
    SetFavoriteLevel {
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    /// Set LED brightness (bright, dim, off).
    SetLedBrightness { brightness: LedBrightness },
    /// Set buzzer on/off.
    SetBuzzer {
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        buzzer: bool,
    },
    /// Set child lock on/off.
    SetChildLock {
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        lock: bool,
    },
    /// Set gesture control on/off.
    SetGesture {
        #[arg(action = ArgAction::Set, value_parser = BoolishValueParser::new())]
        gesture: bool,
    },
}

impl CliCommand {
    fn purifier_command(&self) -> Option<PurifierCommand> {
        match *self {
            CliCommand::Status { .. } => None,
            CliCommand::On => Some(PurifierCommand::On),
            CliCommand::Off => Some(PurifierCommand::Off),
            CliCommand::SetMode { mode } => Some(PurifierCommand::SetMode(mode)),
            CliCommand::SetFavoriteRpm { rpm } => Some(PurifierCommand::SetFavoriteRpm(rpm)),
            CliCommand::SetFavoriteLevel { level } => Some(PurifierCommand::SetFavoriteLevel(level)),
            CliCommand::SetLedBrightness { brightness } => Some(PurifierCommand::SetLedBrightness(brightness)),
            CliCommand::SetBuzzer { buzzer } => Some(PurifierCommand::SetBuzzer(buzzer)),
            CliCommand::SetChildLock { lock } => Some(PurifierCommand::SetChildLock(lock)),
            CliCommand::SetGesture { gesture } => Some(PurifierCommand::SetGesture(gesture)),
        }
    }
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Purifier(#[from] AirPurifierError),
    #[error("could not write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not serialize the status: {0}")]
    Json(#[from] serde_json::Error),
}

/// Runs one command against the purifier and writes its output template to `out`.
pub async fn run<C: MiotClient, W: Write>(
    purifier: &AirPurifier<C>,
    command: &CliCommand,
    out: &mut W,
) -> Result<(), CliError> {
    if let CliCommand::Status { json } = command {
        let status = purifier.status().await?;
        if *json {
            writeln!(out, "{}", serde_json::to_string_pretty(status.data())?)?;
        } else {
            status.mode().map_err(AirPurifierError::from)?;
            writeln!(out, "{}", status)?;
        }
        return Ok(());
    }

    if let Some(purifier_command) = command.purifier_command() {
        writeln!(out, "{}", purifier_command)?;
        purifier.execute(purifier_command).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::miot::{MiotClientError, PropertyMapping, PropertyResult};
    use crate::purifier::Model;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct FakeClient {
        writes: Mutex<Vec<(String, Value)>>,
        results: Vec<PropertyResult>,
    }

    #[async_trait]
    impl MiotClient for FakeClient {
        fn mapping(&self) -> &'static PropertyMapping {
            Model::Za1.mapping()
        }

        async fn set_property(&self, name: &str, value: Value) -> Result<(), MiotClientError> {
            self.writes.lock().unwrap().push((name.to_string(), value));
            Ok(())
        }

        async fn get_properties_for_mapping(&self) -> Result<Vec<PropertyResult>, MiotClientError> {
            Ok(self.results.clone())
        }
    }

    fn property(did: &str, value: Value) -> PropertyResult {
        PropertyResult {
            did: did.to_string(),
            siid: 0,
            piid: 0,
            code: 0,
            value,
        }
    }

    #[rstest]
    #[case(&["status"], CliCommand::Status { json: false })]
    #[case(&["status", "--json"], CliCommand::Status { json: true })]
    #[case(&["on"], CliCommand::On)]
    #[case(&["set-mode", "favorite"], CliCommand::SetMode { mode: OperationMode::Favorite })]
    #[case(&["set-favorite-rpm", "1200"], CliCommand::SetFavoriteRpm { rpm: 1200 })]
    #[case(&["set-favorite-level", "-1"], CliCommand::SetFavoriteLevel { level: -1 })]
    #[case(&["set-led-brightness", "dim"], CliCommand::SetLedBrightness { brightness: LedBrightness::Dim })]
    #[case(&["set-buzzer", "false"], CliCommand::SetBuzzer { buzzer: false })]
    #[case(&["set-child-lock", "on"], CliCommand::SetChildLock { lock: true })]
    #[case(&["set-gesture", "yes"], CliCommand::SetGesture { gesture: true })]
    fn parses_subcommands(#[case] args: &[&str], #[case] expected: CliCommand) {
        let cli = Cli::try_parse_from(std::iter::once("airpurifier-miot").chain(args.iter().copied())).unwrap();

        assert_eq!(cli.command, expected);
    }

    #[rstest]
    #[case(&["set-mode", "turbo"])]
    #[case(&["set-favorite-rpm", "fast"])]
    #[case(&["set-buzzer", "maybe"])]
    fn rejects_invalid_arguments(#[case] args: &[&str]) {
        let result = Cli::try_parse_from(std::iter::once("airpurifier-miot").chain(args.iter().copied()));

        assert!(result.is_err());
    }

    #[test_log::test(tokio::test)]
    async fn run_prints_the_confirmation_and_writes() -> Result<(), CliError> {
        let purifier = AirPurifier::new(FakeClient::default());
        let mut out = Vec::new();

        run(&purifier, &CliCommand::SetFavoriteRpm { rpm: 1000 }, &mut out).await?;

        assert_eq!(String::from_utf8_lossy(&out), "Setting favorite motor speed '1000' rpm\n");

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn run_fails_on_invalid_input() {
        let purifier = AirPurifier::new(FakeClient::default());
        let mut out = Vec::new();

        let result = run(&purifier, &CliCommand::SetFavoriteLevel { level: 15 }, &mut out).await;

        assert!(matches!(result, Err(CliError::Purifier(AirPurifierError::InvalidFavoriteLevel { level: 15 }))));
    }

    #[test_log::test(tokio::test)]
    async fn run_prints_the_status_template() -> Result<(), CliError> {
        let purifier = AirPurifier::new(FakeClient {
            results: vec![property("power", json!(true)), property("mode", json!(0))],
            ..Default::default()
        });
        let mut out = Vec::new();

        run(&purifier, &CliCommand::Status { json: false }, &mut out).await?;

        let output = String::from_utf8_lossy(&out);
        assert!(output.starts_with("Power: on\nMode: Auto\n"));

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn run_prints_the_status_as_json() -> Result<(), CliError> {
        let purifier = AirPurifier::new(FakeClient {
            results: vec![property("power", json!(false))],
            ..Default::default()
        });
        let mut out = Vec::new();

        run(&purifier, &CliCommand::Status { json: true }, &mut out).await?;

        let output: Value = serde_json::from_slice(&out)?;
        assert_eq!(output, json!({"power": false}));

        Ok(())
    }

    #[test_log::test(tokio::test)]
    async fn run_fails_on_an_unknown_mode() {
        let purifier = AirPurifier::new(FakeClient {
            results: vec![property("mode", json!(9))],
            ..Default::default()
        });
        let mut out = Vec::new();

        let result = run(&purifier, &CliCommand::Status { json: false }, &mut out).await;

        assert!(matches!(result, Err(CliError::Purifier(AirPurifierError::Decode(_)))));
        assert!(out.is_empty());
    }
}
