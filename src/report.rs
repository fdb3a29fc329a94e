use crate::error::Result;
use crate::logic::tables::soil_guidance;
use crate::models::{FarmProfile, IrrigationAdvice, WeatherSnapshot};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write;

/// A rendered advisory: the engine's result plus the context it was
/// computed from, for terminal or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    pub generated_at: DateTime<Utc>,
    pub farm: FarmSummary,
    pub weather: WeatherSummary,
    pub soil_guidance: &'static str,
    #[serde(flatten)]
    pub advice: IrrigationAdvice,
}

#[derive(Debug, Clone, Serialize)]
pub struct FarmSummary {
    pub name: String,
    pub crop: String,
    pub soil: String,
    pub field_size_acres: f64,
    pub irrigation_method: String,
    pub critical_stage: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherSummary {
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
    pub rain_forecast_mm: f64,
    pub chance_of_rain: f64,
}

impl AdvisoryReport {
    pub fn new(
        profile: &FarmProfile,
        weather: &WeatherSnapshot,
        critical_stage: bool,
        advice: IrrigationAdvice,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            farm: FarmSummary {
                name: profile.name.clone(),
                crop: profile.crop.to_string(),
                soil: profile.soil.to_string(),
                field_size_acres: profile.field_size_acres,
                irrigation_method: profile.irrigation_method.to_string(),
                critical_stage,
            },
            weather: WeatherSummary {
                temperature_c: weather.temperature_c,
                humidity_percent: weather.humidity_percent,
                wind_speed_kmh: weather.wind_speed_kmh,
                rain_forecast_mm: weather.rain_forecast_mm(),
                chance_of_rain: weather.chance_of_rain(),
            },
            soil_guidance: soil_guidance(profile.soil),
            advice,
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Irrigation Advisory: {}", self.farm.name);
        let _ = writeln!(
            out,
            "Generated {}",
            self.generated_at.format("%Y-%m-%d %H:%M UTC")
        );
        let _ = writeln!(out);
        let crop_line = if self.farm.critical_stage {
            format!("{} (critical growth stage)", self.farm.crop)
        } else {
            self.farm.crop.clone()
        };
        let _ = writeln!(out, "  Crop:       {}", crop_line);
        let _ = writeln!(out, "  Soil:       {}", self.farm.soil);
        let _ = writeln!(
            out,
            "  Field:      {} acres, {} irrigation",
            self.farm.field_size_acres, self.farm.irrigation_method
        );
        let _ = writeln!(
            out,
            "  Weather:    {:.1} C, humidity {:.0}%, wind {:.0} km/h",
            self.weather.temperature_c, self.weather.humidity_percent, self.weather.wind_speed_kmh
        );
        let _ = writeln!(
            out,
            "  Forecast:   {} mm rain, {:.0}% chance",
            self.weather.rain_forecast_mm, self.weather.chance_of_rain
        );
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  Status:     {} {}",
            self.advice.status.symbol(),
            self.advice.status
        );
        let _ = writeln!(
            out,
            "  Water need: {:.1} mm ({} liters)",
            self.advice.water_need_mm, self.advice.total_water_liters
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", self.advice.advice);
        let _ = writeln!(out, "  Soil note: {}", self.soil_guidance);
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{calculate_irrigation, IrrigationInput};
    use crate::models::FarmProfile;

    fn sample_report() -> AdvisoryReport {
        let profile = FarmProfile::default();
        let weather: WeatherSnapshot = serde_json::from_str(
            r#"{ "temperature_c": 32.0, "humidity_percent": 55.0, "wind_speed_kmh": 10.0 }"#,
        )
        .unwrap();
        let input = IrrigationInput::from_conditions(&profile, &weather, false);
        let advice = calculate_irrigation(&input);
        AdvisoryReport::new(&profile, &weather, false, advice)
    }

    #[test]
    fn text_report_carries_decision_and_context() {
        let text = sample_report().to_text();
        assert!(text.contains("Main Field"));
        assert!(text.contains("Wheat"));
        assert!(text.contains("Irrigate"));
        assert!(text.contains("11.5 mm"));
        assert!(text.contains("Good water retention"));
    }

    #[test]
    fn json_report_uses_lowercase_status() {
        let json = sample_report().to_json().unwrap();
        assert!(json.contains("\"status\": \"irrigate\""));
        assert!(json.contains("\"water_need_mm\": 11.5"));
        assert!(json.contains("\"total_water_liters\": 46539"));
    }

    #[test]
    fn critical_stage_marked_in_text() {
        let profile = FarmProfile::default();
        let weather: WeatherSnapshot =
            serde_json::from_str(r#"{ "temperature_c": 32.0 }"#).unwrap();
        let input = IrrigationInput::from_conditions(&profile, &weather, true);
        let advice = calculate_irrigation(&input);
        let report = AdvisoryReport::new(&profile, &weather, true, advice);
        assert!(report.to_text().contains("critical growth stage"));
    }
}
