use super::{specs, FrameworkWriter};
use crate::aa::{AAFramework, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object is used to write an [`AAFramework`] using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The name of the framework, if any, is written as a `%` comment; argument metadata is not written.
///
/// # Example
///
/// The following example retrieves an AF and writes it to the standard output using the Aspartix format.
///
/// ```
/// # use argprov::aa::{AAFramework, ArgumentSet, LabelType};
/// # use argprov::io::{AspartixWriter, FrameworkWriter};
/// # use anyhow::Result;
/// fn write_af_to_stdout<T: LabelType>(af: &AAFramework<T>) -> Result<()> {
///     let writer = AspartixWriter::default();
///     writer.write_framework(&af, &mut std::io::stdout())
/// }
/// # write_af_to_stdout(&AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[] as &[String]).unwrap()));
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

impl<T> FrameworkWriter<T> for AspartixWriter
where
    T: LabelType,
{
    fn write_framework(&self, framework: &AAFramework<T>, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing an Aspartix framework";
        if let Some(name) = framework.name() {
            writeln!(writer, "% {}", name).context(context)?;
        }
        for arg in framework.argument_set().iter() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked()).context(context)?;
        }
        specs::flush(writer)
    }
}
