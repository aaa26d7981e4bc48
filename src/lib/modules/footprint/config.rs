use lazy_static::lazy_static;

use crate::error::Result;
use crate::models::input::CropType;

use super::models::{ClimateFactorTable, CropCoefficients, CropTable};

lazy_static! {
    static ref DEFAULT_CONFIG: FootprintModelConfig = FootprintModelConfig {
        crops: CropTable::default(),
        climate: ClimateFactorTable::default(),
    };
}

/// configuration structure for the model
/// holds the lookup tables, checked once at construction
#[derive(Debug, Clone, PartialEq)]
pub struct FootprintModelConfig {
    crops: CropTable,
    climate: ClimateFactorTable,
}

impl FootprintModelConfig {
    pub fn new(crops: CropTable, climate: ClimateFactorTable) -> Result<Self> {
        crops.validate()?;
        climate.validate()?;
        Ok(FootprintModelConfig { crops, climate })
    }

    /// The built-in tables
    pub fn standard() -> &'static FootprintModelConfig {
        &DEFAULT_CONFIG
    }

    pub fn crops(&self) -> &CropTable {
        &self.crops
    }

    pub fn climate(&self) -> &ClimateFactorTable {
        &self.climate
    }

    pub fn coefficients(&self, crop: CropType) -> Result<&CropCoefficients> {
        self.crops.get(crop)
    }
}

impl Default for FootprintModelConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}
