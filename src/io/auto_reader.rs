use super::{specs, AspartixReader, InstanceReader, JsonReader, WarningHandler};
use crate::aa::{AAFramework, Argument};
use anyhow::{Context, Result};
use log::debug;
use std::{io::Read, rc::Rc};

/// A reader guessing the notation of its input.
///
/// Inputs whose first non-blank character is `{` are read as [JSON](JsonReader),
/// other inputs as [Aspartix](AspartixReader) content.
///
/// # Example
///
/// ```
/// # use argprov::io::{AutoReader, InstanceReader};
/// let reader = AutoReader::default();
/// let from_apx = reader.read(&mut "arg(a).".as_bytes()).unwrap();
/// let from_json = reader.read(&mut r#" {"arguments": [{"id": "a"}]}"#.as_bytes()).unwrap();
/// assert_eq!(from_apx.n_arguments(), from_json.n_arguments());
/// ```
#[derive(Default)]
pub struct AutoReader {
    aspartix_reader: AspartixReader,
    json_reader: JsonReader,
}

impl InstanceReader<String> for AutoReader {
    fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .context("while reading the input")?;
        if content.trim_start().starts_with('{') {
            debug!("input detected as JSON");
            self.json_reader.read(&mut content.as_bytes())
        } else {
            debug!("input detected as Aspartix");
            self.aspartix_reader.read(&mut content.as_bytes())
        }
    }

    fn read_arg_from_str<'a>(
        &self,
        af: &'a AAFramework<String>,
        arg: &str,
    ) -> Result<&'a Argument<String>> {
        specs::find_argument(af, arg)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        let shared: Rc<dyn Fn(usize, String)> = Rc::from(h);
        let for_json = Rc::clone(&shared);
        self.aspartix_reader
            .add_warning_handler(Box::new(move |line: usize, w: String| (shared)(line, w)));
        self.json_reader
            .add_warning_handler(Box::new(move |line: usize, w: String| (for_json)(line, w)));
    }
}
