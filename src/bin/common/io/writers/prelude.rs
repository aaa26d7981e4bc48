use std::io::Write;

use footprint::models::{
    input::CalculationInput,
    output::{BatchOutput, CalculationResult},
};
use footprint::modules::footprint::config::FootprintModelConfig;

use crate::common::helpers::FootprintCliError;

/// Trait implemented by the report renderers (plain text, JSON).
pub trait ReportSink {
    fn write_result(
        &self,
        out: &mut dyn Write,
        input: &CalculationInput,
        result: &CalculationResult,
    ) -> Result<(), FootprintCliError>;

    fn write_batch(
        &self,
        out: &mut dyn Write,
        inputs: &[CalculationInput],
        output: &BatchOutput,
    ) -> Result<(), FootprintCliError>;

    fn write_crops(
        &self,
        out: &mut dyn Write,
        config: &FootprintModelConfig,
    ) -> Result<(), FootprintCliError>;
}
