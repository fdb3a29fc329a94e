//! Static agronomic reference tables. Each table is a total function
//! over its enumeration; adding a crop, soil, or method forces an
//! update here via the exhaustive match.

use crate::models::{CropType, IrrigationMethod, SoilType};

/// Crop coefficient (Kc), simplified seasonal averages.
pub fn crop_kc(crop: CropType) -> f64 {
    match crop {
        CropType::Wheat => 1.15,
        CropType::Rice => 1.20,
        CropType::Tomato => 1.05,
        CropType::Potato => 1.15,
        CropType::Cotton => 1.20,
        CropType::Sugarcane => 1.25,
        CropType::Maize => 1.20,
    }
}

/// Fraction of applied water that reaches the crop.
pub fn application_efficiency(method: IrrigationMethod) -> f64 {
    match method {
        IrrigationMethod::Drip => 0.90,
        IrrigationMethod::Sprinkler => 0.75,
        IrrigationMethod::Flood => 0.60,
    }
}

/// Water-retention guidance per soil type. Advisory metadata only;
/// soil does not enter the water-need arithmetic.
pub fn soil_guidance(soil: SoilType) -> &'static str {
    match soil {
        SoilType::Sandy => "Low water retention. Irrigate frequently with less water.",
        SoilType::Loamy => "Good water retention. Standard irrigation.",
        SoilType::Clay => "High water retention. Avoid waterlogging.",
        SoilType::Black => "Very high retention. Watch for cracking when dry.",
    }
}
