use crate::extensions::RoundToDecimals;
use crate::purifier::error::DecodeError;
use crate::purifier::properties::*;
use crate::purifier::{LedBrightness, OperationMode};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Status report of an air purifier: the raw property values of one bulk read, decoded on every access.
///
/// A property the device reported an error for is stored as `null`. Accessors return `None` for missing, `null`
/// and mistyped values; integer accessors also drop non-integer numbers. Only [`mode`](Self::mode) fails, when
/// the device reports a code outside the known modes.
#[derive(Clone, Debug, PartialEq)]
pub struct AirPurifierStatus {
    data: BTreeMap<String, Value>,
}

impl AirPurifierStatus {
    pub fn new(data: BTreeMap<String, Value>) -> Self {
        AirPurifierStatus { data }
    }

    pub fn data(&self) -> &BTreeMap<String, Value> {
        &self.data
    }

    pub fn is_on(&self) -> Option<bool> {
        self.bool(POWER)
    }

    pub fn power(&self) -> Option<&'static str> {
        self.is_on().map(|on| if on { "on" } else { "off" })
    }

    pub fn mode(&self) -> Result<Option<OperationMode>, DecodeError> {
        match self.data.get(MODE) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => {
                let code = integral(value).ok_or_else(|| DecodeError::UnexpectedType {
                    property: MODE,
                    value: value.clone(),
                })?;
                OperationMode::try_from(code).map(Some)
            }
        }
    }

    /// Undocumented brightness levels decode to `None`.
    pub fn led_brightness(&self) -> Option<LedBrightness> {
        self.int(LED_BRIGHTNESS).and_then(|code| LedBrightness::try_from(code).ok())
    }

    pub fn buzzer(&self) -> Option<bool> {
        self.bool(BUZZER)
    }

    pub fn child_lock(&self) -> Option<bool> {
        self.bool(CHILD_LOCK)
    }

    pub fn gesture_status(&self) -> Option<bool> {
        self.bool(GESTURE_STATUS)
    }

    /// Temperature in °C, rounded to one decimal.
    pub fn temperature(&self) -> Option<f64> {
        self.data.get(TEMPERATURE).and_then(Value::as_f64).map(|temperature| temperature.round_to_decimals(1))
    }

    /// Remaining filter life in %.
    pub fn filter_life_remaining(&self) -> Option<i64> {
        self.int(FILTER_LIFE_REMAINING)
    }

    pub fn filter_hours_used(&self) -> Option<i64> {
        self.int(FILTER_HOURS_USED)
    }

    /// Motor speed in rpm.
    pub fn motor_speed(&self) -> Option<i64> {
        self.int(MOTOR_SPEED)
    }

    /// How long the device has been active, in seconds.
    pub fn use_time(&self) -> Option<i64> {
        self.int(USE_TIME)
    }

    /// Volume of purified air in m³.
    pub fn purify_volume(&self) -> Option<i64> {
        self.int(PURIFY_VOLUME)
    }

    pub fn average_aqi(&self) -> Option<i64> {
        self.int(AVERAGE_AQI)
    }

    /// Relative humidity in %.
    pub fn humidity(&self) -> Option<i64> {
        self.int(HUMIDITY)
    }

    /// PM2.5 density in μg/m³.
    pub fn pm25(&self) -> Option<i64> {
        self.int(PM25)
    }

    pub fn tvoc(&self) -> Option<i64> {
        self.int(TVOC)
    }

    /// Favorite level, used when the mode is [`OperationMode::Favorite`].
    pub fn favorite_level(&self) -> Option<i64> {
        self.int(FAVORITE_LEVEL)
    }

    pub fn favorite_rpm(&self) -> Option<i64> {
        self.int(FAVORITE_RPM)
    }

    pub fn filter_rfid_tag(&self) -> Option<&str> {
        self.string(FILTER_RFID_TAG)
    }

    pub fn filter_rfid_product_id(&self) -> Option<&str> {
        self.string(FILTER_RFID_PRODUCT_ID)
    }

    fn bool(&self, name: &str) -> Option<bool> {
        self.data.get(name).and_then(Value::as_bool)
    }

    // Non-integer numbers are dropped.
    fn int(&self, name: &str) -> Option<i64> {
        self.data.get(name).and_then(Value::as_i64)
    }

    fn string(&self, name: &str) -> Option<&str> {
        self.data.get(name).and_then(Value::as_str)
    }
}

// Accepts integral floats such as `2.0`.
fn integral(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| value.as_f64().filter(|number| number.fract() == 0.0).map(|number| number as i64))
}

fn or_none<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |value| value.to_string())
}

impl Display for AirPurifierStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mode = match self.mode() {
            Ok(mode) => or_none(mode),
            Err(_) => "Unknown".to_string(),
        };

        writeln!(f, "Power: {}", or_none(self.power()))?;
        writeln!(f, "Mode: {}", mode)?;
        writeln!(f, "TVOC: {} μg/m³", or_none(self.tvoc()))?;
        writeln!(f, "PM2.5: {} μg/m³", or_none(self.pm25()))?;
        writeln!(f, "Average AQI: {}", or_none(self.average_aqi()))?;
        writeln!(f, "Humidity: {} %", or_none(self.humidity()))?;
        writeln!(f, "Temperature: {} °C", or_none(self.temperature()))?;
        writeln!(f, "LED brightness: {}", or_none(self.led_brightness()))?;
        writeln!(f, "Buzzer: {}", or_none(self.buzzer()))?;
        writeln!(f, "Child lock: {}", or_none(self.child_lock()))?;
        writeln!(f, "Gesture control: {}", or_none(self.gesture_status()))?;
        writeln!(f, "Filter life remaining: {} %", or_none(self.filter_life_remaining()))?;
        writeln!(f, "Filter hours used: {}", or_none(self.filter_hours_used()))?;
        writeln!(f, "Filter RFID tag: {}", or_none(self.filter_rfid_tag()))?;
        writeln!(f, "Filter RFID product id: {}", or_none(self.filter_rfid_product_id()))?;
        writeln!(f, "Motor speed: {} rpm", or_none(self.motor_speed()))?;
        writeln!(f, "Favorite level: {}", or_none(self.favorite_level()))?;
        writeln!(f, "Favorite RPM: {} rpm", or_none(self.favorite_rpm()))?;
        writeln!(f, "Use time: {} s", or_none(self.use_time()))?;
        write!(f, "Purify volume: {} m³", or_none(self.purify_volume()))
    }
}
