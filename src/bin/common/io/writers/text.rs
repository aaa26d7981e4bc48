use std::io::Write;

use footprint::models::{
    input::CalculationInput,
    output::{BatchOutput, CalculationResult, OutputVariableName},
};
use footprint::modules::footprint::config::FootprintModelConfig;
use strum::EnumProperty;

use crate::common::helpers::{format_number, FootprintCliError};

use super::prelude::ReportSink;

pub struct TextWriter;

fn label(variable: OutputVariableName) -> (&'static str, &'static str) {
    (
        variable.get_str("long_name").unwrap_or_default(),
        variable.get_str("units").unwrap_or_default(),
    )
}

fn format_variable(result: &CalculationResult, variable: OutputVariableName) -> String {
    let (long_name, units) = label(variable);
    format!("{long_name}: {} {units}", format_number(result.get(&variable)))
}

/// Same content as the results panel: the submission, both totals and the advice list
pub fn write_report(
    out: &mut dyn Write,
    input: &CalculationInput,
    result: &CalculationResult,
) -> std::io::Result<()> {
    let factors = &result.factors;

    writeln!(out, "Crop:        {}", input.crop_type)?;
    writeln!(
        out,
        "Irrigation:  {} (x{})",
        input.irrigation_method,
        format_number(factors.irrigation)
    )?;
    writeln!(out, "Area:        {} ha", format_number(input.area_hectares))?;
    writeln!(out, "Yield:       {} kg", format_number(input.yield_kg))?;
    writeln!(
        out,
        "Rainfall:    {} mm ({}, x{})",
        format_number(input.rainfall_mm),
        factors.rainfall_band,
        format_number(factors.rainfall)
    )?;
    writeln!(
        out,
        "Temperature: {} °C ({}, x{})",
        format_number(input.temperature_c),
        factors.temperature_band,
        format_number(factors.temperature)
    )?;
    writeln!(out)?;
    writeln!(out, "{}", format_variable(result, OutputVariableName::totalWater))?;
    writeln!(out, "{}", format_variable(result, OutputVariableName::waterFootprint))?;
    writeln!(out)?;
    writeln!(out, "Recommendations:")?;
    for recommendation in &result.recommendations {
        writeln!(out, "  - {recommendation}")?;
    }
    Ok(())
}

impl ReportSink for TextWriter {
    fn write_result(
        &self,
        out: &mut dyn Write,
        input: &CalculationInput,
        result: &CalculationResult,
    ) -> Result<(), FootprintCliError> {
        write_report(out, input, result)?;
        Ok(())
    }

    fn write_batch(
        &self,
        out: &mut dyn Write,
        inputs: &[CalculationInput],
        output: &BatchOutput,
    ) -> Result<(), FootprintCliError> {
        for (idx, (input, result)) in inputs.iter().zip(output.data.iter()).enumerate() {
            writeln!(out, "== Submission {}", idx + 1)?;
            write_report(out, input, result)?;
            writeln!(out)?;
        }

        let summary = output.summary();
        writeln!(out, "== Summary")?;
        writeln!(out, "Submissions: {}", summary.count)?;
        writeln!(
            out,
            "Total Water Usage: {} l",
            format_number(summary.total_water_liters)
        )?;
        if let Some(mean) = summary.mean_water_footprint_liters_per_kg {
            writeln!(out, "Mean Water Footprint: {} l/kg", format_number(mean))?;
        }
        Ok(())
    }

    fn write_crops(
        &self,
        out: &mut dyn Write,
        config: &FootprintModelConfig,
    ) -> Result<(), FootprintCliError> {
        writeln!(
            out,
            "{:<10} {:>12} {:>6} {:>10} {:>6}",
            "crop", "base [l/kg]", "drip", "sprinkler", "flood"
        )?;
        for (crop, coeffs) in config.crops().iter() {
            writeln!(
                out,
                "{:<10} {:>12} {:>6} {:>10} {:>6}",
                crop.to_string(),
                format_number(coeffs.base),
                format_number(coeffs.drip),
                format_number(coeffs.sprinkler),
                format_number(coeffs.flood)
            )?;
        }

        let climate = config.climate();
        writeln!(out)?;
        writeln!(
            out,
            "rainfall [mm]:    < {} low x{}, > {} high x{}, otherwise x{}",
            format_number(climate.rainfall.low_threshold),
            format_number(climate.rainfall.low),
            format_number(climate.rainfall.high_threshold),
            format_number(climate.rainfall.high),
            format_number(climate.rainfall.medium)
        )?;
        writeln!(
            out,
            "temperature [°C]: < {} cool x{}, > {} hot x{}, otherwise x{}",
            format_number(climate.temperature.cool_threshold),
            format_number(climate.temperature.cool),
            format_number(climate.temperature.hot_threshold),
            format_number(climate.temperature.hot),
            format_number(climate.temperature.moderate)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint::models::input::{CropType, IrrigationMethod};
    use footprint::modules::footprint::calculator::FootprintCalculator;

    #[test]
    fn report_shows_grouped_totals_and_advice() {
        let input = CalculationInput::new(
            CropType::Wheat,
            2.0,
            1000.0,
            IrrigationMethod::Drip,
            500.0,
            25.0,
        )
        .expect("valid input");
        let result = FootprintCalculator::default()
            .calculate(&input)
            .expect("should compute");

        let mut buffer: Vec<u8> = Vec::new();
        write_report(&mut buffer, &input, &result).expect("should write");
        let report = String::from_utf8(buffer).expect("utf8");
        assert!(report.contains("Total Water Usage: 1,105,000 l"));
        assert!(report.contains("Water Footprint: 1,105 l/kg"));
        assert!(report.contains("Rainfall:    500 mm (medium, x1)"));
        assert!(report.contains("  - Your current practices are efficient."));
    }

    #[test]
    fn batch_has_numbered_sections_and_summary() {
        let inputs = vec![
            CalculationInput::new(CropType::Wheat, 1.0, 1000.0, IrrigationMethod::Drip, 500.0, 25.0)
                .expect("valid input"),
            CalculationInput::new(CropType::Cotton, 1.0, 1000.0, IrrigationMethod::Flood, 200.0, 35.0)
                .expect("valid input"),
        ];
        let output = FootprintCalculator::default()
            .calculate_batch(&inputs)
            .expect("should compute");

        let mut buffer: Vec<u8> = Vec::new();
        TextWriter
            .write_batch(&mut buffer, &inputs, &output)
            .expect("should write");
        let text = String::from_utf8(buffer).expect("utf8");

        assert!(text.contains("== Submission 1\nCrop:        wheat"));
        assert!(text.contains("== Submission 2\nCrop:        cotton"));
        let summary = text.split("== Summary\n").nth(1).expect("summary block");
        assert_eq!(
            summary,
            "Submissions: 2\nTotal Water Usage: 13,249,000 l\nMean Water Footprint: 6,624.5 l/kg\n"
        );
    }

    #[test]
    fn empty_batch_has_no_mean() {
        let output = FootprintCalculator::default()
            .calculate_batch(&[])
            .expect("should compute");
        let mut buffer: Vec<u8> = Vec::new();
        TextWriter
            .write_batch(&mut buffer, &[], &output)
            .expect("should write");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text, "== Summary\nSubmissions: 0\nTotal Water Usage: 0 l\n");
    }

    #[test]
    fn crops_table_lists_every_crop() {
        let mut buffer: Vec<u8> = Vec::new();
        TextWriter
            .write_crops(&mut buffer, FootprintModelConfig::standard())
            .expect("should write");
        let text = String::from_utf8(buffer).expect("utf8");
        for crop in ["wheat", "rice", "corn", "cotton", "sugarcane"] {
            assert!(text.contains(crop), "{crop} missing");
        }
        assert!(text.contains("8,000"));
    }
}
