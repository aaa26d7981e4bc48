use std::fs;
use std::path::Path;

use footprint::models::input::{parse_submissions, CalculationInput, RawInput};
use log::info;

use crate::common::helpers::FootprintCliError;

/// Read a list of submissions from a YAML file, or from JSON when the extension is `.json`.
/// Field names follow either the form (`cropType`, `yield`, ...) or the library (`crop_type`, `yield_kg`, ...).
/// Every row goes through the same parsing as a single form submission.
pub fn read_submissions(file_path: &str) -> Result<Vec<CalculationInput>, FootprintCliError> {
    let path = Path::new(file_path);
    if !path.is_file() {
        return Err(format!("Input file {} is not a file", file_path).into());
    }
    let contents =
        fs::read_to_string(path).map_err(|err| format!("can't read file {file_path}: {err}."))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let rows = if is_json {
        parse_json(&contents)
    } else {
        parse_yaml(&contents)
    }
    .map_err(|err| format!("can't parse file {file_path}: {err}"))?;

    let submissions =
        parse_submissions(&rows).map_err(|err| format!("invalid file {file_path}: {err}"))?;

    info!("Read {} submissions from {}", submissions.len(), file_path);
    Ok(submissions)
}

pub fn parse_yaml(contents: &str) -> Result<Vec<RawInput>, FootprintCliError> {
    serde_yaml::from_str(contents).map_err(|err| err.to_string().into())
}

pub fn parse_json(contents: &str) -> Result<Vec<RawInput>, FootprintCliError> {
    Ok(serde_json::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use footprint::error::FootprintError;
    use footprint::models::input::{CropType, InputField, IrrigationMethod};

    fn submissions(rows: Vec<RawInput>) -> Result<Vec<CalculationInput>, FootprintError> {
        parse_submissions(&rows)
    }

    #[test]
    fn yaml_with_form_field_names() {
        let yaml = "
- cropType: rice
  area: 3
  yield: 4500
  irrigation: flood
  rainfall: 1200
  temperature: 28
- crop_type: cotton
  area_hectares: 1.5
  yield_kg: 900
  irrigation_method: drip
  rainfall_mm: 250
  temperature_c: 33.5
";
        let rows = parse_yaml(yaml).expect("should parse");
        assert_eq!(rows[0].area, "3");
        let submissions = submissions(rows).expect("valid rows");
        assert_eq!(submissions.len(), 2);
        assert_eq!(submissions[0].crop_type, CropType::Rice);
        assert_eq!(submissions[0].irrigation_method, IrrigationMethod::Flood);
        assert_eq!(submissions[0].yield_kg, 4500.0);
        assert_eq!(submissions[1].crop_type, CropType::Cotton);
        assert_eq!(submissions[1].temperature_c, 33.5);
    }

    #[test]
    fn names_match_like_the_form() {
        let yaml = "
- cropType: Rice
  area: 1
  yield: 1000
  irrigation: ' Flood '
  rainfall: '900'
  temperature: 26.5
- cropType: '  SUGARCANE'
  area: 2
  yield: 500
  irrigation: Drip
  rainfall: 300
  temperature: 19
";
        let submissions = submissions(parse_yaml(yaml).expect("should parse")).expect("valid rows");
        assert_eq!(submissions[0].crop_type, CropType::Rice);
        assert_eq!(submissions[0].irrigation_method, IrrigationMethod::Flood);
        assert_eq!(submissions[0].rainfall_mm, 900.0);
        assert_eq!(submissions[1].crop_type, CropType::Sugarcane);
        assert_eq!(submissions[1].irrigation_method, IrrigationMethod::Drip);
    }

    #[test]
    fn json_list() {
        let json = r#"[{"cropType": "Corn", "area": 1, "yield": "800",
            "irrigation": "sprinkler", "rainfall": 450, "temperature": 22}]"#;
        let submissions = submissions(parse_json(json).expect("should parse")).expect("valid rows");
        assert_eq!(submissions[0].crop_type, CropType::Corn);
        assert_eq!(submissions[0].irrigation_method, IrrigationMethod::Sprinkler);
        assert_eq!(submissions[0].yield_kg, 800.0);
    }

    #[test]
    fn invalid_row_reports_index_and_field() {
        let yaml = "
- cropType: wheat
  area: 1
  yield: 1000
  irrigation: drip
  rainfall: 500
  temperature: 25
- cropType: wheat
  area: 1
  yield: lots
  irrigation: drip
  rainfall: 500
  temperature: 25
";
        let err = submissions(parse_yaml(yaml).expect("should parse")).unwrap_err();
        assert_eq!(
            err,
            FootprintError::Submission {
                index: 1,
                source: Box::new(FootprintError::InvalidInput {
                    field: InputField::Yield,
                    value: "lots".into()
                })
            }
        );
    }

    #[test]
    fn unknown_crop_fails_with_its_field() {
        let yaml = "
- cropType: barley
  area: 1
  yield: 1
  irrigation: drip
  rainfall: 1
  temperature: 1
";
        let err = submissions(parse_yaml(yaml).expect("should parse")).unwrap_err();
        assert!(matches!(
            err,
            FootprintError::Submission { index: 0, ref source }
                if matches!(**source, FootprintError::InvalidInput { field: InputField::CropType, .. })
        ));
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        assert!(parse_yaml("- cropType: wheat\n  area: 1\n").is_err());
    }

    #[test]
    fn missing_file_fails() {
        assert!(read_submissions("does/not/exist.yml").is_err());
    }

    #[test]
    fn demo_file_is_readable() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/submissions.yml");
        let submissions = read_submissions(path).expect("should read");
        assert_eq!(submissions.len(), 3);
        assert_eq!(submissions[1].crop_type, CropType::Cotton);
    }
}
