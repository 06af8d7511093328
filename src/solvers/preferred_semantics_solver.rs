use super::{CompleteSemanticsSolver, Extension, ExtensionsComputer};
use crate::{error::EngineError, utils::AttackIndex};
use log::debug;

/// A solver for the preferred semantics.
///
/// A preferred extension is a complete extension that is maximal with respect to set inclusion.
/// The solver enumerates the complete extensions and keeps the maximal ones;
/// it thus shares the search budget of the [CompleteSemanticsSolver].
///
/// Since the grounded extension is complete, a framework always has at least one preferred extension.
pub struct PreferredSemanticsSolver<'a> {
    index: &'a AttackIndex,
    max_candidate_sets: usize,
}

impl<'a> PreferredSemanticsSolver<'a> {
    /// Builds a new solver for the preferred semantics, given the maximal number of candidate sets to explore.
    pub fn new(index: &'a AttackIndex, max_candidate_sets: usize) -> Self {
        Self {
            index,
            max_candidate_sets,
        }
    }
}

impl ExtensionsComputer for PreferredSemanticsSolver<'_> {
    fn compute_extensions(&mut self) -> Result<Vec<Extension>, EngineError> {
        let complete =
            CompleteSemanticsSolver::new(self.index, self.max_candidate_sets).compute_extensions()?;
        let preferred = maximal_extensions(&complete);
        debug!(
            "{} of the {} complete extension(s) are maximal",
            preferred.len(),
            complete.len()
        );
        Ok(preferred)
    }
}

fn maximal_extensions(extensions: &[Extension]) -> Vec<Extension> {
    extensions
        .iter()
        .filter(|e| {
            !extensions
                .iter()
                .any(|other| other.len() > e.len() && e.is_subset_of(other))
        })
        .cloned()
        .collect()
}
