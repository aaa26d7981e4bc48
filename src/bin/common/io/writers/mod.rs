pub mod json;
pub mod prelude;
pub mod text;

use strum_macros::{Display, EnumString};

use json::JsonWriter;
use prelude::ReportSink;
use text::TextWriter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn get_sink(format: OutputFormat) -> Box<dyn ReportSink> {
    match format {
        OutputFormat::Text => Box::new(TextWriter),
        OutputFormat::Json => Box::new(JsonWriter),
    }
}
