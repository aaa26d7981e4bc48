use ndarray::Array1;
use rayon::prelude::*;
use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumProperty, EnumString};

use crate::modules::footprint::models::{RainfallBand, TemperatureBand};

/// Advice attached to a result, rendered as its full sentence
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, EnumIter, Display)]
pub enum Recommendation {
    #[strum(to_string = "Consider switching to drip irrigation to reduce water usage by 15-25%")]
    SwitchToDrip,
    #[strum(
        to_string = "Your water footprint is higher than average for this crop. Check for leaks or inefficient water distribution."
    )]
    CheckForLeaks,
    #[strum(
        to_string = "For rice, consider alternate wetting and drying (AWD) technique to reduce water use while maintaining yield"
    )]
    AlternateWettingDrying,
    #[strum(
        to_string = "Cotton is a water-intensive crop. Consider implementing soil moisture monitoring for optimal irrigation scheduling"
    )]
    SoilMoistureMonitoring,
    #[strum(
        to_string = "Your current practices are efficient. Monitor soil moisture for further optimization opportunities"
    )]
    EfficientPractices,
}

impl serde::Serialize for Recommendation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Multipliers applied on top of the crop base requirement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AdjustmentFactors {
    pub irrigation: f64,
    pub rainfall: f64,
    pub temperature: f64,
    pub rainfall_band: RainfallBand,
    pub temperature_band: TemperatureBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    /// water used by the whole harvest [l]
    pub total_water_liters: f64,
    /// water used per kg of yield [l/kg]
    pub water_footprint_liters_per_kg: f64,
    /// never empty
    pub recommendations: Vec<Recommendation>,
    pub factors: AdjustmentFactors,
}

impl CalculationResult {
    pub fn get(&self, variable: &OutputVariableName) -> f64 {
        use OutputVariableName::*;
        match variable {
            totalWater => self.total_water_liters,
            waterFootprint => self.water_footprint_liters_per_kg,
            irrigationFactor => self.factors.irrigation,
            rainfallFactor => self.factors.rainfall,
            temperatureFactor => self.factors.temperature,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.recommendations.iter().map(|r| r.to_string()).collect()
    }
}

#[allow(non_camel_case_types)]
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Copy,
    Clone,
    EnumString,
    EnumIter,
    EnumProperty,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum OutputVariableName {
    /// Total water used by the harvest
    #[strum(props(long_name = "Total Water Usage", units = "l"))]
    totalWater,
    /// Water used per kg of yield
    #[strum(props(long_name = "Water Footprint", units = "l/kg"))]
    waterFootprint,

    /// Irrigation method factor
    #[strum(props(long_name = "Irrigation Factor", units = "-"))]
    irrigationFactor,
    /// Rainfall band factor
    #[strum(props(long_name = "Rainfall Factor", units = "-"))]
    rainfallFactor,
    /// Temperature band factor
    #[strum(props(long_name = "Temperature Factor", units = "-"))]
    temperatureFactor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BatchSummary {
    pub count: usize,
    pub total_water_liters: f64,
    /// None for an empty batch
    pub mean_water_footprint_liters_per_kg: Option<f64>,
}

/// Results of a set of independent submissions, in submission order
pub struct BatchOutput {
    pub data: Array1<CalculationResult>,
}

impl BatchOutput {
    pub fn new(data: Array1<CalculationResult>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get_array(&self, func: fn(&CalculationResult) -> f64) -> Array1<f64> {
        let vec = self.data.par_iter().map(func).collect::<Vec<_>>();
        Array1::from_vec(vec)
    }

    pub fn get(&self, variable: &OutputVariableName) -> Array1<f64> {
        use OutputVariableName::*;
        match variable {
            totalWater => self.get_array(|o| o.total_water_liters),
            waterFootprint => self.get_array(|o| o.water_footprint_liters_per_kg),
            irrigationFactor => self.get_array(|o| o.factors.irrigation),
            rainfallFactor => self.get_array(|o| o.factors.rainfall),
            temperatureFactor => self.get_array(|o| o.factors.temperature),
        }
    }

    pub fn summary(&self) -> BatchSummary {
        let total = self.get(&OutputVariableName::totalWater);
        let footprint = self.get(&OutputVariableName::waterFootprint);
        BatchSummary {
            count: self.len(),
            total_water_liters: total.sum(),
            mean_water_footprint_liters_per_kg: footprint.mean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumProperty, IntoEnumIterator};

    fn result(total: f64, footprint: f64) -> CalculationResult {
        CalculationResult {
            total_water_liters: total,
            water_footprint_liters_per_kg: footprint,
            recommendations: vec![Recommendation::EfficientPractices],
            factors: AdjustmentFactors {
                irrigation: 0.85,
                rainfall: 1.0,
                temperature: 1.0,
                rainfall_band: RainfallBand::Medium,
                temperature_band: TemperatureBand::Moderate,
            },
        }
    }

    #[test]
    fn every_variable_has_name_and_units() {
        for variable in OutputVariableName::iter() {
            assert!(variable.get_str("long_name").is_some(), "{variable}");
            assert!(variable.get_str("units").is_some(), "{variable}");
        }
    }

    #[test]
    fn variable_names_parse_case_insensitive() {
        assert_eq!(
            "TOTALWATER".parse::<OutputVariableName>(),
            Ok(OutputVariableName::totalWater)
        );
    }

    #[test]
    fn recommendation_serializes_as_text() {
        let json = serde_json::to_string(&Recommendation::SwitchToDrip).expect("should serialize");
        assert_eq!(
            json,
            "\"Consider switching to drip irrigation to reduce water usage by 15-25%\""
        );
    }

    #[test]
    fn batch_columns_and_summary() {
        let output = BatchOutput::new(Array1::from_vec(vec![
            result(1000.0, 10.0),
            result(3000.0, 30.0),
        ]));
        assert_eq!(
            output.get(&OutputVariableName::totalWater).to_vec(),
            vec![1000.0, 3000.0]
        );
        let summary = output.summary();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_water_liters, 4000.0);
        assert_eq!(summary.mean_water_footprint_liters_per_kg, Some(20.0));
    }

    #[test]
    fn empty_batch_has_no_mean() {
        let output = BatchOutput::new(Array1::from_vec(vec![]));
        let summary = output.summary();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_water_liters, 0.0);
        assert_eq!(summary.mean_water_footprint_liters_per_kg, None);
    }
}
