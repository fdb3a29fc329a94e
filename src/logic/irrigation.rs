//! Irrigation water-need calculator.
//!
//! A pure, single-pass computation: weather and field inputs in, an
//! irrigation depth, volume, and a status out. The ET0 breakpoints,
//! the 80% effective-rainfall factor, and the 15% critical-stage
//! uplift are contract values and must not be retuned casually.

use super::tables::{application_efficiency, crop_kc};
use crate::models::{
    CropType, FarmProfile, IrrigationAdvice, IrrigationMethod, IrrigationStatus, SoilType,
    WeatherSnapshot,
};

/// Square meters per acre.
const SQ_M_PER_ACRE: f64 = 4046.86;

/// Fraction of forecast rainfall assumed usable by the crop.
const EFFECTIVE_RAIN_FACTOR: f64 = 0.8;

/// Kc multiplier during flowering/fruit-set.
const CRITICAL_STAGE_UPLIFT: f64 = 1.15;

/// Temperature bands for the reference-evapotranspiration estimate,
/// evaluated top-down. Coarse by design; the breakpoints are part of
/// the calculator's contract.
const ET0_BANDS: [(f64, f64); 3] = [(35.0, 7.5), (30.0, 6.0), (25.0, 5.0)];
const ET0_COLD: f64 = 3.0;
const ET0_BASE: f64 = 4.5;

/// Everything the calculator needs for one decision. Humidity and wind
/// speed are carried for future refinement but do not currently enter
/// the arithmetic.
#[derive(Debug, Clone)]
pub struct IrrigationInput {
    pub crop: CropType,
    pub soil: SoilType,
    pub field_size_acres: f64,
    pub irrigation_method: IrrigationMethod,
    pub is_critical_stage: bool,
    pub temperature_c: f64,
    pub humidity_percent: f64,
    pub wind_speed_kmh: f64,
    pub rain_forecast_mm: f64,
    pub chance_of_rain: f64,
}

impl IrrigationInput {
    /// Assemble an input record from a validated farm profile and a
    /// weather snapshot. The caller decides the critical-stage flag.
    pub fn from_conditions(
        profile: &FarmProfile,
        weather: &WeatherSnapshot,
        is_critical_stage: bool,
    ) -> Self {
        Self {
            crop: profile.crop,
            soil: profile.soil,
            field_size_acres: profile.field_size_acres,
            irrigation_method: profile.irrigation_method,
            is_critical_stage,
            temperature_c: weather.temperature_c,
            humidity_percent: weather.humidity_percent,
            wind_speed_kmh: weather.wind_speed_kmh,
            rain_forecast_mm: weather.rain_forecast_mm(),
            chance_of_rain: weather.chance_of_rain(),
        }
    }
}

/// Reference evapotranspiration (mm/day) as a step function of
/// temperature (°C).
pub fn reference_et0(temperature_c: f64) -> f64 {
    for (threshold, et0) in ET0_BANDS {
        if temperature_c > threshold {
            return et0;
        }
    }
    if temperature_c < 15.0 {
        ET0_COLD
    } else {
        ET0_BASE
    }
}

/// Compute the irrigation recommendation for one decision horizon.
///
/// Total over the documented input domain: no error paths, no side
/// effects, no state between calls. Callers validate field size and
/// probability ranges before invoking.
pub fn calculate_irrigation(input: &IrrigationInput) -> IrrigationAdvice {
    let et0 = reference_et0(input.temperature_c);

    let mut kc = crop_kc(input.crop);
    if input.is_critical_stage {
        kc *= CRITICAL_STAGE_UPLIFT;
    }

    // Crop water need (ETc), before any rainfall credit.
    let etc = et0 * kc;

    let effective_rain = input.rain_forecast_mm * EFFECTIVE_RAIN_FACTOR;

    // Rainfall cannot drive the requirement negative.
    let net_water_need = (etc - effective_rain).max(0.0);

    // Lower delivery efficiency inflates the volume that must be applied.
    let gross_water_need = net_water_need / application_efficiency(input.irrigation_method);

    // 1 mm over 1 m² is 1 liter. Rounding happens once, here.
    let field_area_sq_m = input.field_size_acres * SQ_M_PER_ACRE;
    let total_water_liters = (gross_water_need * field_area_sq_m).round() as i64;

    let (status, advice) = if input.rain_forecast_mm > etc {
        (
            IrrigationStatus::Skip,
            format!(
                "Expected rain ({}mm) is sufficient. Skip irrigation.",
                input.rain_forecast_mm
            ),
        )
    } else if input.chance_of_rain > 70.0 && input.rain_forecast_mm > 2.0 {
        (
            IrrigationStatus::Delay,
            format!(
                "High chance of rain ({}%). Delay irrigation and check later.",
                input.chance_of_rain
            ),
        )
    } else {
        let mut advice = format!("Water needed today: {:.1} mm.", gross_water_need);
        if input.is_critical_stage {
            advice.push_str(" Critical stage detected: Irrigation increased by 15%.");
        }
        (IrrigationStatus::Irrigate, advice)
    };

    IrrigationAdvice {
        water_need_mm: (gross_water_need * 10.0).round() / 10.0,
        total_water_liters,
        advice,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_input() -> IrrigationInput {
        IrrigationInput {
            crop: CropType::Wheat,
            soil: SoilType::Loamy,
            field_size_acres: 1.0,
            irrigation_method: IrrigationMethod::Flood,
            is_critical_stage: false,
            temperature_c: 32.0,
            humidity_percent: 50.0,
            wind_speed_kmh: 8.0,
            rain_forecast_mm: 0.0,
            chance_of_rain: 0.0,
        }
    }

    #[test]
    fn et0_step_function_breakpoints() {
        assert_eq!(reference_et0(36.0), 7.5);
        assert_eq!(reference_et0(35.0), 6.0); // tie resolves to the next band
        assert_eq!(reference_et0(31.0), 6.0);
        assert_eq!(reference_et0(30.0), 5.0);
        assert_eq!(reference_et0(26.0), 5.0);
        assert_eq!(reference_et0(25.0), 4.5);
        assert_eq!(reference_et0(15.0), 4.5);
        assert_eq!(reference_et0(14.9), 3.0);
        assert_eq!(reference_et0(-2.0), 3.0);
    }

    #[test]
    fn wheat_flood_dry_day() {
        // ET0 6.0 x Kc 1.15 = 6.9 mm; / 0.60 flood efficiency = 11.5 mm.
        let advice = calculate_irrigation(&base_input());
        assert_eq!(advice.status, IrrigationStatus::Irrigate);
        assert_eq!(advice.water_need_mm, 11.5);
        assert_eq!(advice.total_water_liters, 46539);
        assert!(advice.advice.contains("11.5 mm"));
    }

    #[test]
    fn heavy_rain_forecast_skips() {
        let mut input = base_input();
        input.rain_forecast_mm = 10.0; // > ETc 6.9
        input.chance_of_rain = 95.0;
        let advice = calculate_irrigation(&input);
        assert_eq!(advice.status, IrrigationStatus::Skip);
        assert!(advice.advice.contains("10mm"));
    }

    #[test]
    fn likely_light_rain_delays() {
        let mut input = base_input();
        input.temperature_c = 27.0; // ET0 5.0, ETc 5.75 for wheat
        input.rain_forecast_mm = 3.0; // below ETc, so no skip
        input.chance_of_rain = 80.0;
        let advice = calculate_irrigation(&input);
        assert_eq!(advice.status, IrrigationStatus::Delay);
        assert!(advice.advice.contains("80%"));
    }

    #[test]
    fn drizzle_chance_without_volume_still_irrigates() {
        let mut input = base_input();
        input.chance_of_rain = 85.0;
        input.rain_forecast_mm = 1.0; // fails the > 2mm volume test
        let advice = calculate_irrigation(&input);
        assert_eq!(advice.status, IrrigationStatus::Irrigate);
    }

    #[test]
    fn critical_stage_uplifts_by_15_percent() {
        let mut input = base_input();
        input.temperature_c = 20.0;
        let normal = calculate_irrigation(&input);
        input.is_critical_stage = true;
        let critical = calculate_irrigation(&input);
        assert!(critical.water_need_mm >= normal.water_need_mm);
        // Equal up to the single 1-decimal rounding applied at output.
        assert!((critical.water_need_mm - normal.water_need_mm * 1.15).abs() < 0.1);
        assert!(critical.advice.contains("Critical stage"));
        assert!(!normal.advice.contains("Critical stage"));
    }

    #[test]
    fn rainfall_never_goes_negative() {
        let mut input = base_input();
        input.rain_forecast_mm = 500.0;
        let advice = calculate_irrigation(&input);
        assert_eq!(advice.water_need_mm, 0.0);
        assert_eq!(advice.total_water_liters, 0);
        assert_eq!(advice.status, IrrigationStatus::Skip);
    }

    #[test]
    fn more_rain_never_increases_need() {
        let mut input = base_input();
        input.rain_forecast_mm = 2.0;
        let some_rain = calculate_irrigation(&input);
        input.rain_forecast_mm = 4.0;
        let more_rain = calculate_irrigation(&input);
        assert!(more_rain.water_need_mm <= some_rain.water_need_mm);
    }

    #[test]
    fn warmer_band_never_decreases_need() {
        let mut input = base_input();
        input.temperature_c = 30.0;
        let cooler = calculate_irrigation(&input);
        input.temperature_c = 31.0;
        let warmer = calculate_irrigation(&input);
        assert!(warmer.water_need_mm >= cooler.water_need_mm);
    }

    #[test]
    fn efficiency_ordering_flood_needs_most() {
        let mut input = base_input();
        input.irrigation_method = IrrigationMethod::Drip;
        let drip = calculate_irrigation(&input);
        input.irrigation_method = IrrigationMethod::Sprinkler;
        let sprinkler = calculate_irrigation(&input);
        input.irrigation_method = IrrigationMethod::Flood;
        let flood = calculate_irrigation(&input);
        assert!(flood.total_water_liters >= sprinkler.total_water_liters);
        assert!(sprinkler.total_water_liters >= drip.total_water_liters);
    }

    #[test]
    fn skip_takes_priority_over_delay() {
        let mut input = base_input();
        input.rain_forecast_mm = 20.0;
        input.chance_of_rain = 100.0; // delay conditions also hold
        let advice = calculate_irrigation(&input);
        assert_eq!(advice.status, IrrigationStatus::Skip);
    }

    #[test]
    fn outputs_are_non_negative_across_crops_and_methods() {
        for crop in CropType::ALL {
            for method in IrrigationMethod::ALL {
                for temp in [-5.0, 10.0, 20.0, 28.0, 33.0, 40.0] {
                    let mut input = base_input();
                    input.crop = crop;
                    input.irrigation_method = method;
                    input.temperature_c = temp;
                    let advice = calculate_irrigation(&input);
                    assert!(advice.water_need_mm >= 0.0);
                    assert!(advice.total_water_liters >= 0);
                }
            }
        }
    }

    #[test]
    fn liters_match_depth_times_area() {
        let mut input = base_input();
        input.field_size_acres = 2.5;
        let advice = calculate_irrigation(&input);
        let expected = advice.water_need_mm * 2.5 * 4046.86;
        // Depth is rounded to 1 decimal, so allow the induced slack.
        assert!((advice.total_water_liters as f64 - expected).abs() < 0.05 * 2.5 * 4046.86 + 1.0);
    }

    #[test]
    fn humidity_and_wind_do_not_change_output() {
        let dry = calculate_irrigation(&base_input());
        let mut input = base_input();
        input.humidity_percent = 95.0;
        input.wind_speed_kmh = 40.0;
        let humid = calculate_irrigation(&input);
        assert_eq!(dry.water_need_mm, humid.water_need_mm);
        assert_eq!(dry.total_water_liters, humid.total_water_liters);
    }
}
