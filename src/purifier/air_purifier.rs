use crate::miot::MiotClient;
use crate::purifier::commands::PurifierCommand;
use crate::purifier::error::*;
use crate::purifier::properties::*;
use crate::purifier::{AirPurifierStatus, LedBrightness, OperationMode};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// An air purifier speaking MIoT.
///
/// Every command validates its input first and then performs exactly one property write through the client. Nothing
/// is read back after a write and failures are never retried.
#[derive(Debug)]
pub struct AirPurifier<C: MiotClient> {
    client: C,
}

impl<C: MiotClient> AirPurifier<C> {
    pub fn new(client: C) -> Self {
        AirPurifier { client }
    }

    #[cfg(test)]
    pub fn client(&self) -> &C {
        &self.client
    }

    #[instrument(skip(self), fields(model = self.client.mapping().model()))]
    pub async fn status(&self) -> Result<AirPurifierStatus, AirPurifierError> {
        let mapping = self.client.mapping();
        let results = self.client.get_properties_for_mapping().await?;

        let data: BTreeMap<String, Value> = results
            .into_iter()
            .filter_map(|result| {
                if mapping.resolve(&result.did).is_err() {
                    warn!("⚠️ Ignoring result for unmapped property '{}'", result.did);
                    return None;
                }

                if result.is_success() {
                    Some((result.did, result.value))
                } else {
                    debug!(code = result.code, "🟡 Device reported an error for property '{}'", result.did);
                    Some((result.did, Value::Null))
                }
            })
            .collect();

        debug!("Decoded status with {} properties", data.len());
        Ok(AirPurifierStatus::new(data))
    }

    pub async fn execute(&self, command: PurifierCommand) -> Result<(), AirPurifierError> {
        match command {
            PurifierCommand::On => self.on().await,
            PurifierCommand::Off => self.off().await,
            PurifierCommand::SetMode(mode) => self.set_mode(mode).await,
            PurifierCommand::SetFavoriteRpm(rpm) => self.set_favorite_rpm(rpm).await,
            PurifierCommand::SetFavoriteLevel(level) => self.set_favorite_level(level).await,
            PurifierCommand::SetLedBrightness(brightness) => self.set_led_brightness(brightness).await,
            PurifierCommand::SetBuzzer(buzzer) => self.set_buzzer(buzzer).await,
            PurifierCommand::SetChildLock(lock) => self.set_child_lock(lock).await,
            PurifierCommand::SetGesture(gesture) => self.set_gesture(gesture).await,
        }
    }

    pub async fn on(&self) -> Result<(), AirPurifierError> {
        self.set_property(POWER, json!(true)).await
    }

    pub async fn off(&self) -> Result<(), AirPurifierError> {
        self.set_property(POWER, json!(false)).await
    }

    pub async fn set_mode(&self, mode: OperationMode) -> Result<(), AirPurifierError> {
        self.set_property(MODE, json!(mode.code())).await
    }

    /// The device documents up to 2300 rpm but may reject values above 2200.
    pub async fn set_favorite_rpm(&self, rpm: i64) -> Result<(), AirPurifierError> {
        if !(FAVORITE_RPM_MIN..=FAVORITE_RPM_MAX).contains(&rpm) || rpm % FAVORITE_RPM_STEP != 0 {
            return Err(AirPurifierError::InvalidFavoriteRpm { rpm });
        }

        self.set_property(FAVORITE_RPM, json!(rpm)).await
    }

    /// Sets the level used when the mode is [`OperationMode::Favorite`].
    pub async fn set_favorite_level(&self, level: i64) -> Result<(), AirPurifierError> {
        if !(FAVORITE_LEVEL_MIN..=FAVORITE_LEVEL_MAX).contains(&level) {
            return Err(AirPurifierError::InvalidFavoriteLevel { level });
        }

        self.set_property(FAVORITE_LEVEL, json!(level)).await
    }

    pub async fn set_led_brightness(&self, brightness: LedBrightness) -> Result<(), AirPurifierError> {
        self.set_property(LED_BRIGHTNESS, json!(brightness.code())).await
    }

    pub async fn set_buzzer(&self, buzzer: bool) -> Result<(), AirPurifierError> {
        self.set_property(BUZZER, json!(buzzer)).await
    }

    pub async fn set_child_lock(&self, lock: bool) -> Result<(), AirPurifierError> {
        self.set_property(CHILD_LOCK, json!(lock)).await
    }

    // Writes "gesture", which the ZA1 table does not map (it only has "gesture_status").
    pub async fn set_gesture(&self, gesture: bool) -> Result<(), AirPurifierError> {
        self.set_property(GESTURE, json!(gesture)).await
    }

    async fn set_property(&self, name: &str, value: Value) -> Result<(), AirPurifierError> {
        info!("🟢 Setting '{}' to {}", name, value);
        self.client.set_property(name, value).await?;
        Ok(())
    }
}
