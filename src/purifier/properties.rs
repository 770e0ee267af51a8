// Logical property names shared by the mapping tables, the status view and the commands.
pub const POWER: &str = "power";
pub const MODE: &str = "mode";
pub const TVOC: &str = "tvoc";
pub const PM25: &str = "pm25";
pub const HUMIDITY: &str = "humidity";
pub const TEMPERATURE: &str = "temperature";
pub const FILTER_LIFE_REMAINING: &str = "filter_life_remaining";
pub const FILTER_HOURS_USED: &str = "filter_hours_used";
pub const BUZZER: &str = "buzzer";
pub const LED_BRIGHTNESS: &str = "led_brightness";
pub const CHILD_LOCK: &str = "child_lock";
pub const FAVORITE_LEVEL: &str = "favorite_level";
pub const FAVORITE_RPM: &str = "favorite_rpm";
pub const MOTOR_SPEED: &str = "motor_speed";
pub const USE_TIME: &str = "use_time";
pub const PURIFY_VOLUME: &str = "purify_volume";
pub const AVERAGE_AQI: &str = "average_aqi";
pub const FILTER_RFID_TAG: &str = "filter_rfid_tag";
pub const FILTER_RFID_PRODUCT_ID: &str = "filter_rfid_product_id";
pub const GESTURE_STATUS: &str = "gesture_status";
// Written by set_gesture. Not part of any mapping table, see DESIGN.md.
pub const GESTURE: &str = "gesture";
