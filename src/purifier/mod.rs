mod air_purifier;
mod commands;
mod error;
mod led_brightness;
mod model;
mod operation_mode;
mod properties;
mod status;

pub use air_purifier::AirPurifier;
pub use commands::PurifierCommand;
pub use error::AirPurifierError;
pub use led_brightness::LedBrightness;
pub use model::Model;
pub use operation_mode::OperationMode;
pub use status::AirPurifierStatus;
