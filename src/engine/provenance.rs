use super::{ArgumentStatus, VerdictReason};
use crate::aa::{Argument, LabelType};
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The side a node of a dispute tree plays in the dispute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DisputeRole {
    /// The node argues for the root.
    Proponent,
    /// The node argues against the root.
    Opponent,
}

impl DisputeRole {
    /// Returns the role of the children of a node playing this role.
    pub fn opposite(&self) -> Self {
        match self {
            DisputeRole::Proponent => DisputeRole::Opponent,
            DisputeRole::Opponent => DisputeRole::Proponent,
        }
    }
}

/// The kinds of provenance that can be requested for an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProvenanceMode {
    /// The direct attackers.
    Potential,
    /// The defenders appearing in the dispute tree, i.e. at depth 2.
    Primary,
    /// All the arguments of the dispute tree.
    Actual,
}

impl ProvenanceMode {
    /// Iterates over the names of the provenance modes.
    pub fn iter_names() -> impl Iterator<Item = String> {
        ProvenanceMode::iter().map(|m| m.as_ref().to_string())
    }
}

impl TryFrom<&str> for ProvenanceMode {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lowercase = value.to_ascii_lowercase();
        ProvenanceMode::iter()
            .find(|m| m.as_ref() == lowercase)
            .ok_or_else(|| anyhow!(r#"undefined provenance mode "{}""#, value))
    }
}

/// A node of a dispute tree.
///
/// The root is the argument under inspection, playing the [Proponent](DisputeRole::Proponent) role.
/// The children of a proponent node are all its attackers, as opponents.
/// The children of an opponent node are its attackers that belong to at least one extension, as proponents.
///
/// A node whose argument already appears on the path from the root is marked as circular and has no children.
/// A node whose expansion stopped because the tree reached its maximal size is marked as truncated;
/// its children are then a prefix of the children it would have had.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisputeNode<'a, T>
where
    T: LabelType,
{
    pub(crate) argument: &'a Argument<T>,
    pub(crate) role: DisputeRole,
    pub(crate) circular: bool,
    pub(crate) truncated: bool,
    pub(crate) children: Vec<DisputeNode<'a, T>>,
}

impl<'a, T> DisputeNode<'a, T>
where
    T: LabelType,
{
    /// Returns the argument of this node.
    pub fn argument(&self) -> &'a Argument<T> {
        self.argument
    }

    /// Returns the role of this node.
    pub fn role(&self) -> DisputeRole {
        self.role
    }

    /// Returns `true` iff the recursion stopped at this node because its argument repeats an ancestor.
    pub fn is_circular(&self) -> bool {
        self.circular
    }

    /// Returns `true` iff some children of this node were left out to keep the tree within its size limit.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Returns the children of this node.
    pub fn children(&self) -> &[DisputeNode<'a, T>] {
        &self.children
    }

    /// Returns the number of levels of the tree rooted at this node (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(|c| c.depth()).max().unwrap_or(0)
    }

    /// Returns the number of nodes of the tree rooted at this node.
    pub fn n_nodes(&self) -> usize {
        1 + self.children.iter().map(|c| c.n_nodes()).sum::<usize>()
    }

    /// Iterates over the arguments of the tree in pre-order, this node first.
    ///
    /// Arguments appearing in several nodes are returned several times.
    pub fn iter_arguments(&self) -> impl Iterator<Item = &'a Argument<T>> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node.argument)
        })
    }
}

/// The justification of the status of an argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvenanceInfo<'a, T>
where
    T: LabelType,
{
    pub(crate) argument: &'a Argument<T>,
    pub(crate) status: ArgumentStatus,
    pub(crate) reason: VerdictReason,
    pub(crate) attackers: Vec<&'a Argument<T>>,
    pub(crate) defenders: Vec<&'a Argument<T>>,
    pub(crate) primary_provenance: Vec<&'a Argument<T>>,
    pub(crate) actual_provenance: Vec<&'a Argument<T>>,
    pub(crate) dispute_tree: DisputeNode<'a, T>,
}

impl<'a, T> ProvenanceInfo<'a, T>
where
    T: LabelType,
{
    /// Returns the argument this provenance is about.
    pub fn argument(&self) -> &'a Argument<T> {
        self.argument
    }

    /// Returns the computed status of the argument.
    pub fn status(&self) -> ArgumentStatus {
        self.status
    }

    /// Returns the reason of the status of the argument.
    pub fn reason(&self) -> VerdictReason {
        self.reason
    }

    /// Returns the direct attackers of the argument, sorted by label.
    pub fn attackers(&self) -> &[&'a Argument<T>] {
        &self.attackers
    }

    /// Returns the arguments attacking at least one attacker of the argument, sorted by label.
    pub fn defenders(&self) -> &[&'a Argument<T>] {
        &self.defenders
    }

    /// Returns the potential provenance, that is the direct attackers.
    pub fn potential_provenance(&self) -> &[&'a Argument<T>] {
        &self.attackers
    }

    /// Returns the primary provenance, that is the arguments at depth 2 of the dispute tree, sorted by label.
    pub fn primary_provenance(&self) -> &[&'a Argument<T>] {
        &self.primary_provenance
    }

    /// Returns the actual provenance, that is the arguments of the dispute tree except its root, sorted by label.
    ///
    /// The root may still belong to this set if it attacks itself, directly or through a cycle.
    pub fn actual_provenance(&self) -> &[&'a Argument<T>] {
        &self.actual_provenance
    }

    /// Returns the provenance of the requested kind.
    pub fn provenance(&self, mode: ProvenanceMode) -> &[&'a Argument<T>] {
        match mode {
            ProvenanceMode::Potential => self.potential_provenance(),
            ProvenanceMode::Primary => self.primary_provenance(),
            ProvenanceMode::Actual => self.actual_provenance(),
        }
    }

    /// Returns the dispute tree rooted at the argument.
    pub fn dispute_tree(&self) -> &DisputeNode<'a, T> {
        &self.dispute_tree
    }
}
