use log::debug;

use crate::models::{
    input::{CalculationInput, CropType, IrrigationMethod},
    output::{AdjustmentFactors, CalculationResult, Recommendation},
};

use super::{
    constants::HIGH_FOOTPRINT_RATIO,
    models::{ClimateFactorTable, CropCoefficients, RainfallBand, TemperatureBand},
};

// Rainfall band and its multiplier
pub fn rainfall_factor(
    rainfall: f64, // seasonal rainfall [mm]
    climate: &ClimateFactorTable,
) -> (RainfallBand, f64) {
    let band = climate.rainfall.band(rainfall);
    (band, climate.rainfall.factor(band))
}

// Temperature band and its multiplier
pub fn temperature_factor(
    temperature: f64, // mean temperature [°C]
    climate: &ClimateFactorTable,
) -> (TemperatureBand, f64) {
    let band = climate.temperature.band(temperature);
    (band, climate.temperature.factor(band))
}

// Water needed per kg of yield once all factors are applied [l/kg]
pub fn adjusted_water_per_kg(
    base: f64,              // [l/kg]
    irrigation_factor: f64, // [-]
    rainfall_factor: f64,   // [-]
    temperature_factor: f64, // [-]
) -> f64 {
    base * irrigation_factor * rainfall_factor * temperature_factor
}

// Water used by the whole harvest [l]
pub fn total_water(
    water_per_kg: f64, // [l/kg]
    yield_kg: f64,     // [kg]
) -> f64 {
    water_per_kg * yield_kg
}

pub fn is_high_footprint(footprint: f64, coeffs: &CropCoefficients) -> bool {
    footprint > coeffs.base * HIGH_FOOTPRINT_RATIO
}

/// Rules are independent and appended in a fixed order.
/// The efficient-practices message is only given when no other rule fires.
pub fn recommendations(
    crop: CropType,
    method: IrrigationMethod,
    footprint: f64,
    coeffs: &CropCoefficients,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if method != IrrigationMethod::Drip {
        recommendations.push(Recommendation::SwitchToDrip);
    }

    if is_high_footprint(footprint, coeffs) {
        recommendations.push(Recommendation::CheckForLeaks);
    }

    // crop specific
    if crop == CropType::Rice && method == IrrigationMethod::Flood {
        recommendations.push(Recommendation::AlternateWettingDrying);
    }

    if crop == CropType::Cotton {
        recommendations.push(Recommendation::SoilMoistureMonitoring);
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation::EfficientPractices);
    }
    recommendations
}

pub fn get_output_fn(
    input: &CalculationInput,
    coeffs: &CropCoefficients,
    climate: &ClimateFactorTable,
) -> CalculationResult {
    let (rainfall_band, rain_f) = rainfall_factor(input.rainfall_mm, climate);
    let (temperature_band, temp_f) = temperature_factor(input.temperature_c, climate);
    let irrigation_f = coeffs.irrigation_factor(input.irrigation_method);

    let water_per_kg = adjusted_water_per_kg(coeffs.base, irrigation_f, rain_f, temp_f);
    let total = total_water(water_per_kg, input.yield_kg);
    // the footprint is the adjusted requirement itself
    let footprint = water_per_kg;

    debug!(
        "{} {}: irrigation {}, rainfall {} ({}), temperature {} ({}) -> {} l/kg",
        input.crop_type,
        input.irrigation_method,
        irrigation_f,
        rain_f,
        rainfall_band,
        temp_f,
        temperature_band,
        footprint
    );

    CalculationResult {
        total_water_liters: total,
        water_footprint_liters_per_kg: footprint,
        recommendations: recommendations(
            input.crop_type,
            input.irrigation_method,
            footprint,
            coeffs,
        ),
        factors: AdjustmentFactors {
            irrigation: irrigation_f,
            rainfall: rain_f,
            temperature: temp_f,
            rainfall_band,
            temperature_band,
        },
    }
}
