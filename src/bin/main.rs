mod common;
use std::env::{set_var, var};
use std::error::Error;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};

use common::config::builder::ConfigBuilder;
use common::io::readers::submissions::read_submissions;
use common::io::writers::{get_sink, OutputFormat};
use footprint::models::input::{CalculationInput, RawInput};
use footprint::modules::footprint::{calculator::FootprintCalculator, config::FootprintModelConfig};
use footprint::version::LONG_VERSION;

#[derive(Parser, Debug)]
#[command(
    version,
    long_version=LONG_VERSION,
    about="Agricultural water footprint estimator",
    long_about="Estimates the water used by a harvest from the crop, the irrigation method and the season's rainfall and temperature.
The per-kg requirement of the crop is scaled by an irrigation efficiency factor and by rainfall and temperature band factors."
)]
struct Args {
    #[arg(
        short,
        long,
        global = true,
        help = "Path to a YAML file overriding the coefficient tables"
    )]
    config: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        default_value = "text",
        help = "Output format: text or json"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate the water footprint of a single harvest
    Calculate {
        #[arg(long, help = "Crop type: wheat, rice, corn, cotton or sugarcane")]
        crop: String,

        #[arg(long, allow_hyphen_values = true, help = "Cultivated area [ha]")]
        area: String,

        #[arg(long = "yield", allow_hyphen_values = true, help = "Harvested yield [kg]")]
        yield_kg: String,

        #[arg(long, help = "Irrigation method: drip, sprinkler or flood")]
        irrigation: String,

        #[arg(long, allow_hyphen_values = true, help = "Seasonal rainfall [mm]")]
        rainfall: String,

        #[arg(long, allow_hyphen_values = true, help = "Mean temperature [°C]")]
        temperature: String,
    },

    /// Estimate the water footprint of every submission listed in a YAML or JSON file
    Batch {
        #[arg(required = true, help = "Path to the submissions file", index = 1)]
        input_path: String,
    },

    /// Show the coefficient tables in use
    Crops,
}

fn load_config(config_path: Option<&str>) -> Result<FootprintModelConfig, Box<dyn Error>> {
    match config_path {
        Some(config_path) => {
            if !Path::new(config_path).is_file() {
                return Err(format!("Config file {} is not a file", config_path).into());
            }
            let config = ConfigBuilder::from_file(config_path)
                .and_then(|builder| builder.build())
                .map_err(|err| format!("Failed to load config: {}", err))?;
            Ok(config)
        }
        None => Ok(FootprintModelConfig::default()),
    }
}

/// main function
fn main() -> ExitCode {
    let args = Args::parse();

    if var("RUST_LOG").is_err() {
        set_var("RUST_LOG", "info")
    }
    pretty_env_logger::init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let calculator = FootprintCalculator::new(load_config(args.config.as_deref())?);
    let sink = get_sink(args.format);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Calculate {
            crop,
            area,
            yield_kg,
            irrigation,
            rainfall,
            temperature,
        } => {
            let raw = RawInput {
                crop_type: crop,
                area,
                yield_kg,
                irrigation,
                rainfall,
                temperature,
            };
            let input = CalculationInput::try_from(&raw)?;
            let result = calculator.calculate(&input)?;
            sink.write_result(&mut out, &input, &result)?;
        }
        Command::Batch { input_path } => {
            let inputs = read_submissions(&input_path)?;
            let output = calculator.calculate_batch(&inputs)?;
            info!("Computed {} submissions", output.len());
            sink.write_batch(&mut out, &inputs, &output)?;
        }
        Command::Crops => {
            sink.write_crops(&mut out, calculator.config())?;
        }
    }

    out.flush()?;
    Ok(())
}
