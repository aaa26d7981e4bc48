use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::{FootprintError, Result};

/// Crops with a known water requirement
#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CropType {
    Wheat,
    Rice,
    Corn,
    Cotton,
    Sugarcane,
}

#[derive(
    Debug, PartialEq, Eq, Hash, Copy, Clone, EnumString, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    Flood,
}

/// Names of the submitted form fields, used to report which one was rejected
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, EnumIter, Display)]
pub enum InputField {
    #[strum(serialize = "cropType")]
    CropType,
    #[strum(serialize = "area")]
    Area,
    #[strum(serialize = "yield")]
    Yield,
    #[strum(serialize = "irrigation")]
    Irrigation,
    #[strum(serialize = "rainfall")]
    Rainfall,
    #[strum(serialize = "temperature")]
    Temperature,
}

/// A single submission, as the form delivers it: every field is text.
/// Numbers written in a batch file are read back as text and parsed like form values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    #[serde(alias = "cropType")]
    pub crop_type: String,
    #[serde(alias = "area_hectares", deserialize_with = "text_or_number")]
    pub area: String,
    #[serde(rename = "yield", alias = "yield_kg", deserialize_with = "text_or_number")]
    pub yield_kg: String,
    #[serde(alias = "irrigationMethod", alias = "irrigation_method")]
    pub irrigation: String,
    #[serde(alias = "rainfall_mm", deserialize_with = "text_or_number")]
    pub rainfall: String,
    #[serde(alias = "temperature_c", deserialize_with = "text_or_number")]
    pub temperature: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldText {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(
        match <FieldText as serde::Deserialize>::deserialize(deserializer)? {
            FieldText::Text(text) => text,
            FieldText::Number(number) => number.to_string(),
        },
    )
}

/// A validated submission
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculationInput {
    pub crop_type: CropType,
    /// cultivated area [ha], carried along but not used by the computation
    pub area_hectares: f64,
    /// harvested yield [kg]
    pub yield_kg: f64,
    pub irrigation_method: IrrigationMethod,
    /// seasonal rainfall [mm]
    pub rainfall_mm: f64,
    /// mean temperature [°C]
    pub temperature_c: f64,
}

pub fn parse_number(field: InputField, value: &str) -> Result<f64> {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => Ok(number),
        _ => Err(FootprintError::invalid_input(field, value)),
    }
}

pub fn parse_crop(value: &str) -> Result<CropType> {
    CropType::from_str(value.trim())
        .map_err(|_| FootprintError::invalid_input(InputField::CropType, value))
}

pub fn parse_irrigation(value: &str) -> Result<IrrigationMethod> {
    IrrigationMethod::from_str(value.trim())
        .map_err(|_| FootprintError::invalid_input(InputField::Irrigation, value))
}

fn check_finite(field: InputField, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FootprintError::invalid_input(field, value))
    }
}

impl CalculationInput {
    pub fn new(
        crop_type: CropType,
        area_hectares: f64,
        yield_kg: f64,
        irrigation_method: IrrigationMethod,
        rainfall_mm: f64,
        temperature_c: f64,
    ) -> Result<Self> {
        let input = Self {
            crop_type,
            area_hectares,
            yield_kg,
            irrigation_method,
            rainfall_mm,
            temperature_c,
        };
        input.validate()?;
        Ok(input)
    }

    /// Fields are public, so the calculator checks again before using them
    pub fn validate(&self) -> Result<()> {
        check_finite(InputField::Area, self.area_hectares)?;
        check_finite(InputField::Yield, self.yield_kg)?;
        check_finite(InputField::Rainfall, self.rainfall_mm)?;
        check_finite(InputField::Temperature, self.temperature_c)?;
        Ok(())
    }
}

impl TryFrom<&RawInput> for CalculationInput {
    type Error = FootprintError;

    fn try_from(raw: &RawInput) -> Result<Self> {
        // fields are checked in form order, the first bad one is reported
        let crop_type = parse_crop(&raw.crop_type)?;
        let area_hectares = parse_number(InputField::Area, &raw.area)?;
        let yield_kg = parse_number(InputField::Yield, &raw.yield_kg)?;
        let irrigation_method = parse_irrigation(&raw.irrigation)?;
        let rainfall_mm = parse_number(InputField::Rainfall, &raw.rainfall)?;
        let temperature_c = parse_number(InputField::Temperature, &raw.temperature)?;

        CalculationInput::new(
            crop_type,
            area_hectares,
            yield_kg,
            irrigation_method,
            rainfall_mm,
            temperature_c,
        )
    }
}

impl TryFrom<RawInput> for CalculationInput {
    type Error = FootprintError;

    fn try_from(raw: RawInput) -> Result<Self> {
        CalculationInput::try_from(&raw)
    }
}

/// Parse a list of submissions; the first invalid one fails the list with its index
pub fn parse_submissions(rows: &[RawInput]) -> Result<Vec<CalculationInput>> {
    rows.iter()
        .enumerate()
        .map(|(index, raw)| {
            CalculationInput::try_from(raw).map_err(|err| FootprintError::Submission {
                index,
                source: Box::new(err),
            })
        })
        .collect()
}
