use super::{specs, InstanceReader, WarningHandler};
use crate::aa::{AAFramework, Argument, FrameworkDescription};
use anyhow::{Context, Result};
use std::{collections::HashSet, io::Read};

/// A reader for the JSON notation of frameworks.
///
/// The expected content is an object with an optional `name`, an `arguments` array and a `defeats` array.
/// Arguments are objects with an `id` and optional `annotation`, `url` and `manualValue` fields;
/// defeats are objects with `from` and `to` fields, and an optional `annotation`.
///
/// ```text
/// {
///   "name": "chain",
///   "arguments": [{"id": "a"}, {"id": "b", "manualValue": "accepted"}],
///   "defeats": [{"from": "b", "to": "a", "annotation": "b rebuts a"}]
/// }
/// ```
///
/// Since the JSON content is not read line by line, warnings are raised with line number 0.
///
/// # Example
///
/// ```
/// # use argprov::io::{InstanceReader, JsonReader};
/// let content = r#"{"arguments": [{"id": "a"}, {"id": "b"}], "defeats": [{"from": "a", "to": "b"}]}"#;
/// let af = JsonReader::default().read(&mut content.as_bytes()).unwrap();
/// assert_eq!(2, af.n_arguments());
/// ```
#[derive(Default)]
pub struct JsonReader {
    warning_handlers: Vec<WarningHandler>,
}

impl JsonReader {
    /// Reads a framework description, without validating it.
    pub fn read_description(&self, reader: &mut dyn Read) -> Result<FrameworkDescription> {
        serde_json::from_reader(reader).context("while parsing the JSON content")
    }

    fn warn_duplicate_defeats(&self, description: &FrameworkDescription) {
        let mut seen = HashSet::new();
        for d in description.defeats.iter() {
            if !seen.insert((d.from.as_str(), d.to.as_str())) {
                let w = format!("duplicate attack from {} to {}", d.from, d.to);
                self.warning_handlers.iter().for_each(|h| (h)(0, w.clone()));
            }
        }
    }
}

impl InstanceReader<String> for JsonReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let description = self.read_description(reader)?;
        self.warn_duplicate_defeats(&description);
        AAFramework::try_from(description).context("while building the framework")
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        specs::find_argument(af, arg)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
