use crate::aa::{AAFramework, Argument, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// The type of callback functions to call when warnings are raised while parsing an AF.
///
/// The first parameter is the (1-based) line number, the second one the warning message.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read Argumentation Frameworks.
pub trait InstanceReader<T>
where
    T: LabelType,
{
    /// Reads an [`AAFramework`].
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
    /// Duplicate arguments and attacks involving undeclared arguments make the whole reading fail.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::AAFramework;
    /// # use argprov::io::{AspartixReader, InstanceReader};
    /// fn read_af_from_str(s: &str) -> AAFramework<String> {
    ///     let reader = AspartixReader::default();
    ///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
    /// }
    /// # read_af_from_str("arg(a).");
    /// ```
    fn read(&self, reader: &mut dyn std::io::Read) -> Result<AAFramework<T>>;

    /// Reads an argument from a string.
    fn read_arg_from_str<'a>(&self, af: &'a AAFramework<T>, arg: &str) -> Result<&'a Argument<T>>;

    /// Adds a callback function to call when warnings are raised while parsing an AF.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// A trait implemented by objects able to write Argumentation Frameworks.
pub trait FrameworkWriter<T>
where
    T: LabelType,
{
    /// Writes a framework to the provided writer.
    fn write_framework(&self, framework: &AAFramework<T>, writer: &mut dyn Write) -> Result<()>;
}

pub(crate) fn write_line(writer: &mut dyn Write, line: &str) -> Result<()> {
    writeln!(writer, "{}", line).context("while writing a line")
}

pub(crate) fn flush(writer: &mut dyn Write) -> Result<()> {
    writer.flush().context("while flushing the output")
}

pub(crate) fn find_argument<'a>(
    af: &'a AAFramework<String>,
    arg: &str,
) -> Result<&'a Argument<String>> {
    af.argument_set()
        .get_argument(&arg.to_string())
        .with_context(|| format!(r#"while looking for argument "{}""#, arg))
}
