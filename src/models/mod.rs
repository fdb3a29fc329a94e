mod advisory;
mod farm_profile;
mod weather;

pub use advisory::{IrrigationAdvice, IrrigationStatus};
pub use farm_profile::{CropType, FarmProfile, IrrigationMethod, SoilType};
pub use weather::{ForecastDay, WeatherSnapshot};
