use std::io::Write;

use footprint::models::{
    input::{CalculationInput, CropType},
    output::{BatchOutput, BatchSummary, CalculationResult},
};
use footprint::modules::footprint::{config::FootprintModelConfig, models::CropCoefficients};
use serde_derive::Serialize;

use crate::common::helpers::FootprintCliError;

use super::prelude::ReportSink;

pub struct JsonWriter;

#[derive(Debug, Serialize)]
struct Report<'a> {
    input: &'a CalculationInput,
    #[serde(flatten)]
    result: &'a CalculationResult,
}

#[derive(Debug, Serialize)]
struct BatchReport<'a> {
    results: Vec<Report<'a>>,
    summary: BatchSummary,
}

#[derive(Debug, Serialize)]
struct CropRow<'a> {
    crop: CropType,
    #[serde(flatten)]
    coefficients: &'a CropCoefficients,
}

fn write_json<T: serde::Serialize>(out: &mut dyn Write, value: &T) -> Result<(), FootprintCliError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

impl ReportSink for JsonWriter {
    fn write_result(
        &self,
        out: &mut dyn Write,
        input: &CalculationInput,
        result: &CalculationResult,
    ) -> Result<(), FootprintCliError> {
        write_json(out, &Report { input, result })
    }

    fn write_batch(
        &self,
        out: &mut dyn Write,
        inputs: &[CalculationInput],
        output: &BatchOutput,
    ) -> Result<(), FootprintCliError> {
        let results = inputs
            .iter()
            .zip(output.data.iter())
            .map(|(input, result)| Report { input, result })
            .collect();
        let report = BatchReport {
            results,
            summary: output.summary(),
        };
        write_json(out, &report)
    }

    fn write_crops(
        &self,
        out: &mut dyn Write,
        config: &FootprintModelConfig,
    ) -> Result<(), FootprintCliError> {
        let rows: Vec<CropRow> = config
            .crops()
            .iter()
            .map(|(crop, coefficients)| CropRow { crop, coefficients })
            .collect();
        write_json(out, &rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint::models::input::IrrigationMethod;
    use footprint::modules::footprint::calculator::FootprintCalculator;
    use serde_json::Value;

    #[test]
    fn result_json_has_text_recommendations() {
        let input = CalculationInput::new(
            CropType::Cotton,
            1.0,
            1000.0,
            IrrigationMethod::Flood,
            200.0,
            35.0,
        )
        .expect("valid input");
        let result = FootprintCalculator::default()
            .calculate(&input)
            .expect("should compute");

        let mut buffer: Vec<u8> = Vec::new();
        JsonWriter
            .write_result(&mut buffer, &input, &result)
            .expect("should write");
        let value: Value = serde_json::from_slice(&buffer).expect("valid json");

        assert_eq!(value["input"]["crop_type"], "cotton");
        let footprint = value["water_footprint_liters_per_kg"]
            .as_f64()
            .expect("number");
        assert!((footprint - 12_144.0).abs() < 1e-6);
        assert_eq!(value["factors"]["rainfall_band"], "low");
        let recommendations = value["recommendations"].as_array().expect("array");
        assert_eq!(recommendations.len(), 3);
        assert_eq!(
            recommendations[2],
            "Cotton is a water-intensive crop. Consider implementing soil moisture monitoring for optimal irrigation scheduling"
        );
    }

    #[test]
    fn batch_json_pairs_inputs_with_results() {
        let inputs = vec![
            CalculationInput::new(CropType::Wheat, 1.0, 1000.0, IrrigationMethod::Drip, 500.0, 25.0)
                .expect("valid input"),
            CalculationInput::new(CropType::Rice, 1.0, 1000.0, IrrigationMethod::Flood, 500.0, 25.0)
                .expect("valid input"),
        ];
        let output = FootprintCalculator::default()
            .calculate_batch(&inputs)
            .expect("should compute");

        let mut buffer: Vec<u8> = Vec::new();
        JsonWriter
            .write_batch(&mut buffer, &inputs, &output)
            .expect("should write");
        let value: Value = serde_json::from_slice(&buffer).expect("valid json");

        let results = value["results"].as_array().expect("array");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0]["input"]["crop_type"], "wheat");
        assert_eq!(results[1]["input"]["irrigation_method"], "flood");
        assert_eq!(value["summary"]["count"], 2);
        let total = value["summary"]["total_water_liters"]
            .as_f64()
            .expect("number");
        assert!((total - (1_105_000.0 + 3_250_000.0)).abs() < 1e-3);
    }

    #[test]
    fn crops_json_lists_every_crop_in_order() {
        let mut buffer: Vec<u8> = Vec::new();
        JsonWriter
            .write_crops(&mut buffer, FootprintModelConfig::standard())
            .expect("should write");
        let value: Value = serde_json::from_slice(&buffer).expect("valid json");
        let rows = value.as_array().expect("array");
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0]["crop"], "wheat");
        assert_eq!(rows[0]["base"], 1300.0);
        assert_eq!(rows[4]["crop"], "sugarcane");
    }
}
