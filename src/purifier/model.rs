use crate::miot::{PropertyAddress, PropertyMapping};
use crate::purifier::properties::*;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
pub enum Model {
    #[serde(rename = "zhimi.airpurifier.za1")]
    Za1,
}

impl Model {
    pub fn id(&self) -> &'static str {
        match self {
            Model::Za1 => "zhimi.airpurifier.za1",
        }
    }

    pub fn mapping(&self) -> &'static PropertyMapping {
        match self {
            Model::Za1 => &ZA1_MAPPING,
        }
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

// https://miot-spec.org/miot-spec-v2/instance?type=urn:miot-spec-v2:device:air-purifier:0000A007:zhimi-za1:1
pub static ZA1_MAPPING: PropertyMapping = PropertyMapping::new(
    "zhimi.airpurifier.za1",
    &[
        // Air purifier
        (POWER, PropertyAddress::new(2, 1)),
        (MODE, PropertyAddress::new(2, 5)),
        // Environment
        (TVOC, PropertyAddress::new(3, 1)),
        (PM25, PropertyAddress::new(3, 6)),
        (HUMIDITY, PropertyAddress::new(3, 7)),
        (TEMPERATURE, PropertyAddress::new(3, 8)),
        // Filter
        (FILTER_LIFE_REMAINING, PropertyAddress::new(4, 3)),
        (FILTER_HOURS_USED, PropertyAddress::new(4, 5)),
        // Alarm
        (BUZZER, PropertyAddress::new(5, 1)),
        // Screen
        (LED_BRIGHTNESS, PropertyAddress::new(6, 1)),
        // Physical control locked
        (CHILD_LOCK, PropertyAddress::new(7, 1)),
        // Motor
        (FAVORITE_LEVEL, PropertyAddress::new(10, 10)),
        (MOTOR_SPEED, PropertyAddress::new(10, 11)),
        (USE_TIME, PropertyAddress::new(12, 1)),
        // AQI
        (PURIFY_VOLUME, PropertyAddress::new(13, 1)),
        (AVERAGE_AQI, PropertyAddress::new(13, 2)),
        // RFID
        (FILTER_RFID_TAG, PropertyAddress::new(14, 1)),
        (FILTER_RFID_PRODUCT_ID, PropertyAddress::new(14, 3)),
        // Custom service
        (GESTURE_STATUS, PropertyAddress::new(15, 13)),
    ],
);
