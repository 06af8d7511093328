use super::{specs, FrameworkWriter};
use crate::aa::{AAFramework, FrameworkDescription};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the JSON notation of frameworks, as read by [JsonReader](crate::io::JsonReader).
///
/// Unlike the Aspartix format, this notation keeps the name of the framework and the metadata of arguments and attacks.
#[derive(Default)]
pub struct JsonWriter {}

impl FrameworkWriter<String> for JsonWriter {
    fn write_framework(
        &self,
        framework: &AAFramework<String>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let description = FrameworkDescription::from(framework);
        serde_json::to_writer_pretty(&mut *writer, &description)
            .context("while writing a JSON framework")?;
        specs::write_line(writer, "")?;
        specs::flush(writer)
    }
}
