use super::specs;
use crate::{
    aa::{Argument, LabelType},
    engine::{
        ArgumentStatus, DisputeNode, ProvenanceInfo, ProvenanceMode, SemanticsResult,
        VerdictReason,
    },
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::{collections::BTreeMap, io::Write};

/// The text written when the stable semantics admits no extension.
pub const NO_STABLE_EXTENSION: &str = "NO STABLE EXTENSION";

/// A writer for the results of the engine.
///
/// Results can be written as text, intended for humans, or as JSON.
///
/// # Example
///
/// ```
/// # use argprov::aa::{AAFramework, ArgumentSet, SemanticsKind};
/// # use argprov::engine::SemanticsEngine;
/// # use argprov::io::ResultWriter;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]).unwrap());
/// af.new_attack(&"a", &"b").unwrap();
/// let result = SemanticsEngine::default().solve(&af, SemanticsKind::Grounded).unwrap();
/// let mut buffer = Vec::new();
/// ResultWriter::default().write_statuses(&result, &mut buffer).unwrap();
/// assert_eq!("accepted: [a]\nrejected: [b]\nundecided: []\n", String::from_utf8(buffer).unwrap());
/// ```
#[derive(Default)]
pub struct ResultWriter {}

impl ResultWriter {
    /// Writes the accepted, rejected and undecided arguments, one status per line.
    pub fn write_statuses<T>(
        &self,
        result: &SemanticsResult<T>,
        writer: &mut dyn Write,
    ) -> Result<()>
    where
        T: LabelType,
    {
        for status in [
            ArgumentStatus::Accepted,
            ArgumentStatus::Rejected,
            ArgumentStatus::Undecided,
        ] {
            specs::write_line(
                writer,
                &format!(
                    "{}: {}",
                    status.as_ref(),
                    format_arguments(result.arguments_with_status(status))
                ),
            )?;
        }
        specs::flush(writer)
    }

    /// Writes a list of extensions, one per line.
    ///
    /// If the list is empty, `NO` is written instead.
    pub fn write_extensions<T>(
        &self,
        extensions: &[Vec<&Argument<T>>],
        writer: &mut dyn Write,
    ) -> Result<()>
    where
        T: LabelType,
    {
        if extensions.is_empty() {
            specs::write_line(writer, "NO")?;
        }
        for ext in extensions {
            specs::write_line(writer, &format_arguments(ext))?;
        }
        specs::flush(writer)
    }

    /// Writes the fact the stable semantics admits no extension.
    pub fn write_no_stable_extension(&self, writer: &mut dyn Write) -> Result<()> {
        specs::write_line(writer, NO_STABLE_EXTENSION)?;
        specs::flush(writer)
    }

    /// Writes the provenance of an argument: its status and the reason of it,
    /// its attackers and defenders, the requested provenance and the dispute tree.
    pub fn write_provenance<T>(
        &self,
        result: &SemanticsResult<T>,
        provenance: &ProvenanceInfo<T>,
        mode: ProvenanceMode,
        writer: &mut dyn Write,
    ) -> Result<()>
    where
        T: LabelType,
    {
        let lines = [
            format!("argument: {}", provenance.argument()),
            format!("status: {}", provenance.status().as_ref()),
            format!("reason: {}", describe_reason(result, provenance)),
            format!("attackers: {}", format_arguments(provenance.attackers())),
            format!("defenders: {}", format_arguments(provenance.defenders())),
            format!(
                "{} provenance: {}",
                mode.as_ref(),
                format_arguments(provenance.provenance(mode))
            ),
            "dispute tree:".to_string(),
        ];
        for l in lines.iter() {
            specs::write_line(writer, l)?;
        }
        write_dispute_node(writer, provenance.dispute_tree(), 1)?;
        specs::flush(writer)
    }

    /// Writes a result as a JSON object.
    ///
    /// The object gives the semantics, the extensions, the arguments of each status and the provenance of each argument.
    pub fn write_json<T>(&self, result: &SemanticsResult<T>, writer: &mut dyn Write) -> Result<()>
    where
        T: LabelType,
    {
        let json_result = JsonResult::from(result);
        serde_json::to_writer_pretty(&mut *writer, &json_result)
            .context("while writing a JSON result")?;
        specs::write_line(writer, "")?;
        specs::flush(writer)
    }
}

fn format_arguments<T>(arguments: &[&Argument<T>]) -> String
where
    T: LabelType,
{
    format!(
        "[{}]",
        arguments
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<String>>()
            .join(",")
    )
}

fn describe_reason<T>(result: &SemanticsResult<T>, provenance: &ProvenanceInfo<T>) -> String
where
    T: LabelType,
{
    match provenance.reason() {
        VerdictReason::Unattacked => "the argument is not attacked".to_string(),
        VerdictReason::AttackersDefeated => {
            "all the attackers of the argument are defeated".to_string()
        }
        VerdictReason::AttackedByAccepted => {
            let accepted = provenance
                .attackers()
                .iter()
                .filter(|a| result.status_of(a.label()) == Some(ArgumentStatus::Accepted))
                .copied()
                .collect::<Vec<&Argument<T>>>();
            format!(
                "the argument is attacked by accepted argument(s) {}",
                format_arguments(&accepted)
            )
        }
        VerdictReason::AttackedByExtensionMember => {
            "the argument is attacked by a member of each extension it could join".to_string()
        }
        VerdictReason::SelfAttacking => "the argument attacks itself".to_string(),
        VerdictReason::CredulouslyAccepted => {
            "the argument belongs to some extensions but not to all of them".to_string()
        }
        VerdictReason::Unresolved => {
            "the argument belongs to no extension, but no extension member attacks it".to_string()
        }
    }
}

fn write_dispute_node<T>(writer: &mut dyn Write, node: &DisputeNode<T>, depth: usize) -> Result<()>
where
    T: LabelType,
{
    let role = node.role();
    let mut flags = vec![role.as_ref()];
    if node.is_circular() {
        flags.push("circular");
    }
    if node.is_truncated() {
        flags.push("truncated");
    }
    specs::write_line(
        writer,
        &format!(
            "{}{} ({})",
            "  ".repeat(depth),
            node.argument(),
            flags.join(", ")
        ),
    )?;
    for child in node.children() {
        write_dispute_node(writer, child, depth + 1)?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonResult {
    semantics: String,
    extensions: Vec<Vec<String>>,
    accepted: Vec<String>,
    rejected: Vec<String>,
    undecided: Vec<String>,
    provenance: BTreeMap<String, JsonProvenance>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonProvenance {
    status: ArgumentStatus,
    reason: VerdictReason,
    attackers: Vec<String>,
    defenders: Vec<String>,
    potential_provenance: Vec<String>,
    primary_provenance: Vec<String>,
    actual_provenance: Vec<String>,
    dispute_tree: JsonDisputeNode,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDisputeNode {
    argument: String,
    role: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    circular: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    truncated: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<JsonDisputeNode>,
}

fn labels<T>(arguments: &[&Argument<T>]) -> Vec<String>
where
    T: LabelType,
{
    arguments.iter().map(|a| a.to_string()).collect()
}

impl<T> From<&SemanticsResult<'_, T>> for JsonResult
where
    T: LabelType,
{
    fn from(result: &SemanticsResult<T>) -> Self {
        JsonResult {
            semantics: result.semantics().as_ref().to_string(),
            extensions: result.extensions().iter().map(|e| labels(e)).collect(),
            accepted: labels(result.accepted()),
            rejected: labels(result.rejected()),
            undecided: labels(result.undecided()),
            provenance: result
                .iter_provenance()
                .map(|p| (p.argument().to_string(), JsonProvenance::from(p)))
                .collect(),
        }
    }
}

impl<T> From<&ProvenanceInfo<'_, T>> for JsonProvenance
where
    T: LabelType,
{
    fn from(provenance: &ProvenanceInfo<T>) -> Self {
        JsonProvenance {
            status: provenance.status(),
            reason: provenance.reason(),
            attackers: labels(provenance.attackers()),
            defenders: labels(provenance.defenders()),
            potential_provenance: labels(provenance.potential_provenance()),
            primary_provenance: labels(provenance.primary_provenance()),
            actual_provenance: labels(provenance.actual_provenance()),
            dispute_tree: JsonDisputeNode::from(provenance.dispute_tree()),
        }
    }
}

impl<T> From<&DisputeNode<'_, T>> for JsonDisputeNode
where
    T: LabelType,
{
    fn from(node: &DisputeNode<T>) -> Self {
        JsonDisputeNode {
            argument: node.argument().to_string(),
            role: node.role().as_ref().to_string(),
            circular: node.is_circular(),
            truncated: node.is_truncated(),
            children: node.children().iter().map(JsonDisputeNode::from).collect(),
        }
    }
}
