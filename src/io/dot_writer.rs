use super::{specs, FrameworkWriter};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    engine::{ArgumentStatus, SemanticsResult},
};
use anyhow::{Context, Result};
use std::io::Write;
use strum_macros::{AsRefStr, EnumString};

/// The default fill color of accepted arguments.
pub const DEFAULT_ACCEPTED_COLOR: &str = "#40cfff";

/// The default fill color of rejected arguments.
pub const DEFAULT_REJECTED_COLOR: &str = "#ffb763";

/// The default fill color of undecided arguments (and of arguments with no computed status).
pub const DEFAULT_UNDECIDED_COLOR: &str = "#fefe62";

/// The direction of the graph layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum RankDirection {
    /// Left to right.
    #[strum(serialize = "LR")]
    LeftToRight,
    /// Top to bottom.
    #[strum(serialize = "TB")]
    TopToBottom,
}

/// The rendering options of a [DotWriter].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotConfig {
    /// The layout direction.
    pub direction: RankDirection,
    /// The fill color of accepted arguments, as `#rrggbb`.
    pub accepted_color: String,
    /// The fill color of rejected arguments, as `#rrggbb`.
    pub rejected_color: String,
    /// The fill color of undecided arguments, as `#rrggbb`.
    pub undecided_color: String,
    /// Whether attacks from an argument to an argument declared before it are drawn.
    pub allow_backward_arrows: bool,
    /// Groups of argument labels to draw at the same rank; groups of less than two arguments are ignored.
    pub rank_same_groups: Vec<Vec<String>>,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            direction: RankDirection::LeftToRight,
            accepted_color: DEFAULT_ACCEPTED_COLOR.to_string(),
            rejected_color: DEFAULT_REJECTED_COLOR.to_string(),
            undecided_color: DEFAULT_UNDECIDED_COLOR.to_string(),
            allow_backward_arrows: true,
            rank_same_groups: vec![],
        }
    }
}

/// A writer for the Graphviz DOT language.
///
/// Arguments are drawn as filled circles, colored by their status when a [SemanticsResult] is given.
/// The font color is chosen to contrast with the fill color.
/// Annotations of arguments become tooltips, their URLs become links, and annotations of attacks become edge labels.
///
/// # Example
///
/// ```
/// # use argprov::aa::{AAFramework, ArgumentSet, SemanticsKind};
/// # use argprov::engine::SemanticsEngine;
/// # use argprov::io::{DotConfig, DotWriter};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]).unwrap());
/// af.new_attack(&"a", &"b").unwrap();
/// let result = SemanticsEngine::default().solve(&af, SemanticsKind::Grounded).unwrap();
/// let mut buffer = Vec::new();
/// DotWriter::new(DotConfig::default()).write_solved_framework(&af, Some(&result), &mut buffer).unwrap();
/// assert!(String::from_utf8(buffer).unwrap().contains(r##""a" [fillcolor="#40cfff", fontcolor="black"];"##));
/// ```
#[derive(Default)]
pub struct DotWriter {
    config: DotConfig,
}

impl DotWriter {
    /// Builds a new DOT writer with the given rendering options.
    pub fn new(config: DotConfig) -> Self {
        Self { config }
    }

    /// Writes a framework, with the colors given by the statuses of a result if provided.
    pub fn write_solved_framework<T>(
        &self,
        framework: &AAFramework<T>,
        result: Option<&SemanticsResult<T>>,
        writer: &mut dyn Write,
    ) -> Result<()>
    where
        T: LabelType,
    {
        let context = "while writing a DOT graph";
        writeln!(writer, "digraph ArgumentationFramework {{").context(context)?;
        writeln!(writer, "  rankdir={};", self.config.direction.as_ref()).context(context)?;
        writeln!(
            writer,
            r#"  node [shape=circle, style=filled, fontname="Arial"];"#
        )
        .context(context)?;
        writeln!(writer, "  edge [arrowhead=normal];").context(context)?;
        specs::write_line(writer, "")?;
        for arg in framework.argument_set().iter() {
            let status = result.and_then(|r| r.status_of(arg.label()));
            writeln!(writer, "  {}", self.node_line(arg, status)).context(context)?;
        }
        specs::write_line(writer, "")?;
        for attack in framework.iter_attacks() {
            if !self.config.allow_backward_arrows && attack.attacker().id() > attack.attacked().id()
            {
                continue;
            }
            let label = match attack.annotation() {
                Some(a) => format!(r#" [label="{}"]"#, escape(a)),
                None => String::new(),
            };
            writeln!(
                writer,
                r#"  "{}" -> "{}"{};"#,
                escape(&attack.attacker().to_string()),
                escape(&attack.attacked().to_string()),
                label
            )
            .context(context)?;
        }
        specs::write_line(writer, "")?;
        for group in self.config.rank_same_groups.iter().filter(|g| g.len() > 1) {
            let members = group
                .iter()
                .map(|l| format!(r#""{}""#, escape(l)))
                .collect::<Vec<String>>()
                .join("; ");
            writeln!(writer, "  {{ rank=same; {}; }}", members).context(context)?;
        }
        specs::write_line(writer, "}")?;
        specs::flush(writer)
    }

    fn node_line<T>(&self, arg: &Argument<T>, status: Option<ArgumentStatus>) -> String
    where
        T: LabelType,
    {
        let color = match status {
            Some(ArgumentStatus::Accepted) => &self.config.accepted_color,
            Some(ArgumentStatus::Rejected) => &self.config.rejected_color,
            Some(ArgumentStatus::Undecided) | None => &self.config.undecided_color,
        };
        let mut attrs = vec![
            format!(r#"fillcolor="{}""#, color),
            format!(r#"fontcolor="{}""#, font_color(color)),
        ];
        if let Some(annotation) = arg.annotation() {
            attrs.push(format!(r#"tooltip="{}""#, escape(annotation)));
        }
        if let Some(url) = arg.url() {
            attrs.push(format!(r#"URL="{}""#, escape(url)));
        }
        format!(r#""{}" [{}];"#, escape(&arg.to_string()), attrs.join(", "))
    }
}

impl<T> FrameworkWriter<T> for DotWriter
where
    T: LabelType,
{
    fn write_framework(&self, framework: &AAFramework<T>, writer: &mut dyn Write) -> Result<()> {
        self.write_solved_framework(framework, None, writer)
    }
}

fn escape(s: &str) -> String {
    s.replace('"', r#"\""#)
}

fn font_color(fill_color: &str) -> &'static str {
    match brightness(fill_color) {
        Some(b) if b < 128 => "white",
        _ => "black",
    }
}

fn brightness(color: &str) -> Option<u32> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let component = |i: usize| u32::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    let (r, g, b) = (component(0)?, component(2)?, component(4)?);
    Some((r * 299 + g * 587 + b * 114) / 1000)
}
