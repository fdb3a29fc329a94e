use serde::{Deserialize, Serialize};

/// Outcome classification for a single irrigation decision.
/// Exactly one status is produced per engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationStatus {
    Irrigate,
    Skip,
    Delay,
}

impl IrrigationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IrrigationStatus::Irrigate => "Irrigate",
            IrrigationStatus::Skip => "Skip",
            IrrigationStatus::Delay => "Delay",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            IrrigationStatus::Irrigate => "💧",
            IrrigationStatus::Skip => "✓",
            IrrigationStatus::Delay => "⏳",
        }
    }
}

impl std::fmt::Display for IrrigationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one irrigation calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationAdvice {
    /// Gross irrigation depth to apply, mm, rounded to one decimal.
    pub water_need_mm: f64,
    /// Depth converted to volume over the field area, whole liters.
    pub total_water_liters: i64,
    pub advice: String,
    pub status: IrrigationStatus,
}
