use crate::error::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current conditions plus a short daily forecast, as supplied by the
/// caller (typically a JSON file exported from a weather service).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    pub temperature_c: f64,
    #[serde(default)]
    pub humidity_percent: f64,
    #[serde(default)]
    pub wind_speed_kmh: f64,
    /// Precipitation currently falling or recorded today (mm).
    #[serde(default)]
    pub precip_mm: f64,
    #[serde(default)]
    pub forecast: Vec<ForecastDay>,
}

/// One day of forecast data. The first entry covers the decision horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub rain_mm: f64,
    /// Probability of rain, percent 0-100.
    #[serde(default)]
    pub chance_of_rain: f64,
}

impl WeatherSnapshot {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let snapshot: WeatherSnapshot = serde_json::from_str(&data)?;
        Ok(snapshot)
    }

    /// Forecast rain depth for today. A missing or zero forecast entry
    /// falls back to the currently recorded precipitation.
    pub fn rain_forecast_mm(&self) -> f64 {
        match self.forecast.first() {
            Some(day) if day.rain_mm > 0.0 => day.rain_mm,
            _ => self.precip_mm,
        }
    }

    /// Chance of rain for today, percent. Zero when no forecast is present.
    pub fn chance_of_rain(&self) -> f64 {
        self.forecast.first().map(|d| d.chance_of_rain).unwrap_or(0.0)
    }
}
