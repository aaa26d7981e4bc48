use std::fs::File;
use std::io::Read;

use footprint::modules::footprint::{
    config::FootprintModelConfig,
    models::{ClimateFactorTable, CropTable},
};
use log::{info, warn};
use serde_derive::{Deserialize, Serialize};

use crate::common::helpers::FootprintCliError;

/// Overrides for the built-in tables, as read from the YAML configuration file.
/// Crops listed under `crops` replace the built-in entry for that crop only;
/// a `climate` section replaces single thresholds or factors.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigBuilder {
    #[serde(default)]
    pub crops: Option<CropTable>,
    #[serde(default)]
    pub climate: Option<ClimateFactorTable>,
}

impl ConfigBuilder {
    pub fn from_file(config_file: &str) -> Result<Self, FootprintCliError> {
        let mut file = File::open(config_file)
            .map_err(|error| format!("error opening config file {config_file}: {error}"))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|error| format!("error reading config file {config_file}: {error}"))?;

        let builder = Self::from_yaml(&contents)?;
        info!("Loaded configuration from {}", config_file);
        Ok(builder)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, FootprintCliError> {
        let builder: ConfigBuilder = serde_yaml::from_str(contents)
            .map_err(|error| format!("error parsing config file: {error}"))?;
        Ok(builder)
    }

    pub fn is_empty(&self) -> bool {
        self.crops.as_ref().map_or(true, |c| c.is_empty()) && self.climate.is_none()
    }

    pub fn build(&self) -> Result<FootprintModelConfig, FootprintCliError> {
        if self.is_empty() {
            warn!("Configuration does not override any table, using the built-in ones");
        }

        let mut crops = FootprintModelConfig::standard().crops().clone();
        if let Some(overrides) = &self.crops {
            info!("Overriding coefficients for {} crops", overrides.len());
            crops.merge(overrides);
        }
        let climate = self.climate.unwrap_or_default();

        FootprintModelConfig::new(crops, climate)
            .map_err(|error| format!("error building configuration: {error}").into())
    }
}
