use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CropType {
    Wheat,
    Rice,
    Tomato,
    Potato,
    Cotton,
    Sugarcane,
    Maize,
}

impl CropType {
    pub const ALL: [CropType; 7] = [
        CropType::Wheat,
        CropType::Rice,
        CropType::Tomato,
        CropType::Potato,
        CropType::Cotton,
        CropType::Sugarcane,
        CropType::Maize,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CropType::Wheat => "Wheat",
            CropType::Rice => "Rice",
            CropType::Tomato => "Tomato",
            CropType::Potato => "Potato",
            CropType::Cotton => "Cotton",
            CropType::Sugarcane => "Sugarcane",
            CropType::Maize => "Maize",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "wheat" => Some(CropType::Wheat),
            "rice" | "paddy" => Some(CropType::Rice),
            "tomato" => Some(CropType::Tomato),
            "potato" => Some(CropType::Potato),
            "cotton" => Some(CropType::Cotton),
            "sugarcane" | "sugar cane" => Some(CropType::Sugarcane),
            "maize" | "corn" => Some(CropType::Maize),
            _ => None,
        }
    }
}

impl std::fmt::Display for CropType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoilType {
    Sandy,
    Loamy,
    Clay,
    Black,
}

impl SoilType {
    pub const ALL: [SoilType; 4] = [
        SoilType::Sandy,
        SoilType::Loamy,
        SoilType::Clay,
        SoilType::Black,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Sandy => "Sandy",
            SoilType::Loamy => "Loamy",
            SoilType::Clay => "Clay",
            SoilType::Black => "Black",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sandy" | "sand" => Some(SoilType::Sandy),
            "loamy" | "loam" => Some(SoilType::Loamy),
            "clay" => Some(SoilType::Clay),
            "black" | "black cotton" => Some(SoilType::Black),
            _ => None,
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    Flood,
}

impl IrrigationMethod {
    pub const ALL: [IrrigationMethod; 3] = [
        IrrigationMethod::Drip,
        IrrigationMethod::Sprinkler,
        IrrigationMethod::Flood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationMethod::Drip => "Drip",
            IrrigationMethod::Sprinkler => "Sprinkler",
            IrrigationMethod::Flood => "Flood",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "drip" => Some(IrrigationMethod::Drip),
            "sprinkler" => Some(IrrigationMethod::Sprinkler),
            "flood" | "furrow" => Some(IrrigationMethod::Flood),
            _ => None,
        }
    }
}

impl std::fmt::Display for IrrigationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmProfile {
    pub name: String,
    pub crop: CropType,
    pub soil: SoilType,
    pub field_size_acres: f64,
    pub irrigation_method: IrrigationMethod,
}

impl FarmProfile {
    pub fn new(
        name: String,
        crop: CropType,
        soil: SoilType,
        field_size_acres: f64,
        irrigation_method: IrrigationMethod,
    ) -> Self {
        Self {
            name,
            crop,
            soil,
            field_size_acres,
            irrigation_method,
        }
    }
}

impl Default for FarmProfile {
    fn default() -> Self {
        Self::new(
            "Main Field".to_string(),
            CropType::Wheat,
            SoilType::Loamy,
            1.0,
            IrrigationMethod::Flood,
        )
    }
}
