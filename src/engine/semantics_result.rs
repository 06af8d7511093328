use super::{ArgumentStatus, ProvenanceInfo};
use crate::aa::{Argument, LabelType, SemanticsKind};
use std::collections::BTreeMap;

/// The outcome of a solve: the status of each argument and the justification of these statuses.
///
/// The accepted, rejected and undecided arguments form a partition of the arguments of the framework.
/// Each argument has its [ProvenanceInfo].
#[derive(Debug, Clone)]
pub struct SemanticsResult<'a, T>
where
    T: LabelType,
{
    pub(crate) semantics: SemanticsKind,
    pub(crate) extensions: Vec<Vec<&'a Argument<T>>>,
    pub(crate) accepted: Vec<&'a Argument<T>>,
    pub(crate) rejected: Vec<&'a Argument<T>>,
    pub(crate) undecided: Vec<&'a Argument<T>>,
    pub(crate) provenance: BTreeMap<&'a T, ProvenanceInfo<'a, T>>,
}

impl<'a, T> SemanticsResult<'a, T>
where
    T: LabelType,
{
    /// Returns the semantics this result was computed for.
    pub fn semantics(&self) -> SemanticsKind {
        self.semantics
    }

    /// Returns the number of extensions the statuses were computed from.
    pub fn n_extensions(&self) -> usize {
        self.extensions.len()
    }

    /// Returns the extensions the statuses were computed from.
    ///
    /// Each extension is sorted by label, and the list is sorted lexicographically.
    pub fn extensions(&self) -> &[Vec<&'a Argument<T>>] {
        &self.extensions
    }

    /// Returns the accepted arguments, sorted by label.
    pub fn accepted(&self) -> &[&'a Argument<T>] {
        &self.accepted
    }

    /// Returns the rejected arguments, sorted by label.
    pub fn rejected(&self) -> &[&'a Argument<T>] {
        &self.rejected
    }

    /// Returns the undecided arguments, sorted by label.
    pub fn undecided(&self) -> &[&'a Argument<T>] {
        &self.undecided
    }

    /// Returns the arguments with the given status, sorted by label.
    pub fn arguments_with_status(&self, status: ArgumentStatus) -> &[&'a Argument<T>] {
        match status {
            ArgumentStatus::Accepted => self.accepted(),
            ArgumentStatus::Rejected => self.rejected(),
            ArgumentStatus::Undecided => self.undecided(),
        }
    }

    /// Returns the status of the argument with the given label, or `None` if there is no such argument.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::{AAFramework, ArgumentSet, SemanticsKind};
    /// # use argprov::engine::{ArgumentStatus, SemanticsEngine};
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]).unwrap());
    /// af.new_attack(&"a", &"b").unwrap();
    /// let result = SemanticsEngine::default().solve(&af, SemanticsKind::Grounded).unwrap();
    /// assert_eq!(Some(ArgumentStatus::Accepted), result.status_of(&"a"));
    /// assert_eq!(Some(ArgumentStatus::Rejected), result.status_of(&"b"));
    /// assert_eq!(None, result.status_of(&"c"));
    /// ```
    pub fn status_of(&self, label: &T) -> Option<ArgumentStatus> {
        self.provenance.get(label).map(|p| p.status())
    }

    /// Returns the provenance of the argument with the given label, or `None` if there is no such argument.
    pub fn provenance(&self, label: &T) -> Option<&ProvenanceInfo<'a, T>> {
        self.provenance.get(label)
    }

    /// Iterates over the provenance of all the arguments, by label order.
    pub fn iter_provenance(&self) -> impl Iterator<Item = &ProvenanceInfo<'a, T>> + '_ {
        self.provenance.values()
    }
}
