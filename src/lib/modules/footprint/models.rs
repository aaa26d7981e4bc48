use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::error::{FootprintError, Result};
use crate::models::input::{CropType, IrrigationMethod};

use super::constants::*;

// Water footprint model
// per-crop base requirement scaled by irrigation efficiency and two climate bands

// CROP PROPERTIES
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CropCoefficients {
    /// base water requirement [l/kg]
    #[serde(alias = "base_liters_per_kg")]
    pub base: f64,
    /// drip irrigation factor [-]
    pub drip: f64,
    /// sprinkler irrigation factor [-]
    pub sprinkler: f64,
    /// flood irrigation factor [-]
    pub flood: f64,
}

impl CropCoefficients {
    pub const fn new(base: f64, drip: f64, sprinkler: f64, flood: f64) -> Self {
        Self {
            base,
            drip,
            sprinkler,
            flood,
        }
    }

    pub fn irrigation_factor(&self, method: IrrigationMethod) -> f64 {
        match method {
            IrrigationMethod::Drip => self.drip,
            IrrigationMethod::Sprinkler => self.sprinkler,
            IrrigationMethod::Flood => self.flood,
        }
    }

    fn check(&self, crop: CropType) -> Result<()> {
        let values = [
            ("base", self.base),
            ("drip", self.drip),
            ("sprinkler", self.sprinkler),
            ("flood", self.flood),
        ];
        for (name, value) in values {
            if !value.is_finite() || value <= 0.0 {
                return Err(FootprintError::Config(format!(
                    "{name} coefficient for {crop} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CropTable {
    crops: HashMap<CropType, CropCoefficients>,
}

impl CropTable {
    pub fn new(crops: HashMap<CropType, CropCoefficients>) -> Self {
        Self { crops }
    }

    pub fn get(&self, crop: CropType) -> Result<&CropCoefficients> {
        self.crops.get(&crop).ok_or(FootprintError::MissingCrop(crop))
    }

    /// Replace the coefficients of the crops defined in `other`
    pub fn merge(&mut self, other: &CropTable) {
        for (crop, coeffs) in other.crops.iter() {
            self.crops.insert(*crop, *coeffs);
        }
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    /// Entries in declaration order of `CropType`
    pub fn iter(&self) -> impl Iterator<Item = (CropType, &CropCoefficients)> {
        CropType::iter().filter_map(|crop| self.crops.get(&crop).map(|c| (crop, c)))
    }

    /// Every crop must be present with positive coefficients
    pub fn validate(&self) -> Result<()> {
        for crop in CropType::iter() {
            self.get(crop)?.check(crop)?;
        }
        Ok(())
    }
}

impl Default for CropTable {
    fn default() -> Self {
        let crops = HashMap::from([
            (
                CropType::Wheat,
                CropCoefficients::new(WHEAT_BASE, WHEAT_DRIP, WHEAT_SPRINKLER, WHEAT_FLOOD),
            ),
            (
                CropType::Rice,
                CropCoefficients::new(RICE_BASE, RICE_DRIP, RICE_SPRINKLER, RICE_FLOOD),
            ),
            (
                CropType::Corn,
                CropCoefficients::new(CORN_BASE, CORN_DRIP, CORN_SPRINKLER, CORN_FLOOD),
            ),
            (
                CropType::Cotton,
                CropCoefficients::new(COTTON_BASE, COTTON_DRIP, COTTON_SPRINKLER, COTTON_FLOOD),
            ),
            (
                CropType::Sugarcane,
                CropCoefficients::new(
                    SUGARCANE_BASE,
                    SUGARCANE_DRIP,
                    SUGARCANE_SPRINKLER,
                    SUGARCANE_FLOOD,
                ),
            ),
        ]);
        Self { crops }
    }
}

// CLIMATE BANDS
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, EnumIter, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RainfallBand {
    Low,
    Medium,
    High,
}

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, EnumIter, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TemperatureBand {
    Cool,
    Moderate,
    Hot,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RainfallFactors {
    /// below this rainfall the season is dry [mm]
    pub low_threshold: f64,
    /// above this rainfall the season is wet [mm]
    pub high_threshold: f64,
    pub low: f64,
    pub medium: f64,
    pub high: f64,
}

impl Default for RainfallFactors {
    fn default() -> Self {
        Self {
            low_threshold: RAINFALL_LOW_TH,
            high_threshold: RAINFALL_HIGH_TH,
            low: RAINFALL_LOW,
            medium: RAINFALL_MEDIUM,
            high: RAINFALL_HIGH,
        }
    }
}

impl RainfallFactors {
    pub fn band(&self, rainfall: f64) -> RainfallBand {
        if rainfall < self.low_threshold {
            RainfallBand::Low
        } else if rainfall > self.high_threshold {
            RainfallBand::High
        } else {
            RainfallBand::Medium
        }
    }

    pub fn factor(&self, band: RainfallBand) -> f64 {
        match band {
            RainfallBand::Low => self.low,
            RainfallBand::Medium => self.medium,
            RainfallBand::High => self.high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemperatureFactors {
    /// below this temperature the climate is cool [°C]
    pub cool_threshold: f64,
    /// above this temperature the climate is hot [°C]
    pub hot_threshold: f64,
    pub cool: f64,
    pub moderate: f64,
    pub hot: f64,
}

impl Default for TemperatureFactors {
    fn default() -> Self {
        Self {
            cool_threshold: TEMPERATURE_COOL_TH,
            hot_threshold: TEMPERATURE_HOT_TH,
            cool: TEMPERATURE_COOL,
            moderate: TEMPERATURE_MODERATE,
            hot: TEMPERATURE_HOT,
        }
    }
}

impl TemperatureFactors {
    pub fn band(&self, temperature: f64) -> TemperatureBand {
        if temperature < self.cool_threshold {
            TemperatureBand::Cool
        } else if temperature > self.hot_threshold {
            TemperatureBand::Hot
        } else {
            TemperatureBand::Moderate
        }
    }

    pub fn factor(&self, band: TemperatureBand) -> f64 {
        match band {
            TemperatureBand::Cool => self.cool,
            TemperatureBand::Moderate => self.moderate,
            TemperatureBand::Hot => self.hot,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClimateFactorTable {
    pub rainfall: RainfallFactors,
    pub temperature: TemperatureFactors,
}

fn check_band(name: &str, lower: f64, upper: f64, factors: [f64; 3]) -> Result<()> {
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(FootprintError::Config(format!(
            "{name} thresholds must be finite and ordered, got {lower} and {upper}"
        )));
    }
    if factors.iter().any(|f| !f.is_finite() || *f <= 0.0) {
        return Err(FootprintError::Config(format!(
            "{name} factors must be positive numbers, got {factors:?}"
        )));
    }
    Ok(())
}

impl ClimateFactorTable {
    pub fn validate(&self) -> Result<()> {
        let r = &self.rainfall;
        check_band(
            "rainfall",
            r.low_threshold,
            r.high_threshold,
            [r.low, r.medium, r.high],
        )?;
        let t = &self.temperature;
        check_band(
            "temperature",
            t.cool_threshold,
            t.hot_threshold,
            [t.cool, t.moderate, t.hot],
        )
    }
}
