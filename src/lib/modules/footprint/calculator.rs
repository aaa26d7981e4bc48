use log::info;
use ndarray::Array1;
use rayon::prelude::*;

use crate::error::{FootprintError, Result};
use crate::models::{
    input::CalculationInput,
    output::{BatchOutput, CalculationResult},
};

use super::{config::FootprintModelConfig, functions::get_output_fn};

/// Estimates water use of a harvest from the injected coefficient tables.
/// Every call is independent; the calculator holds no state besides its config.
#[derive(Debug, Clone, Default)]
pub struct FootprintCalculator {
    config: FootprintModelConfig,
}

impl FootprintCalculator {
    pub fn new(config: FootprintModelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FootprintModelConfig {
        &self.config
    }

    pub fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult> {
        input.validate()?;
        let coeffs = self.config.coefficients(input.crop_type)?;
        Ok(get_output_fn(input, coeffs, self.config.climate()))
    }

    /// Every submission is checked before any is computed, so an invalid one
    /// fails the whole batch with its index
    pub fn calculate_batch(&self, inputs: &[CalculationInput]) -> Result<BatchOutput> {
        for (index, input) in inputs.iter().enumerate() {
            input
                .validate()
                .and_then(|_| self.config.coefficients(input.crop_type).map(|_| ()))
                .map_err(|err| FootprintError::Submission {
                    index,
                    source: Box::new(err),
                })?;
        }
        info!("Computing {} submissions", inputs.len());

        let data = inputs
            .par_iter()
            .map(|input| self.calculate(input))
            .collect::<Result<Vec<_>>>()?;
        Ok(BatchOutput::new(Array1::from_vec(data)))
    }
}
