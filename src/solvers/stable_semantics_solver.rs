use super::{is_stable, CompleteSemanticsSolver, Extension, ExtensionsComputer};
use crate::{error::EngineError, utils::AttackIndex};
use log::debug;

/// A solver for the stable semantics.
///
/// A stable extension is a conflict-free set attacking every argument it does not contain.
/// Each stable extension is complete, so the solver filters the complete extensions
/// (and shares the search budget of the [CompleteSemanticsSolver]).
///
/// Some frameworks (e.g. odd-length cycles) have no stable extension.
/// In this case, [compute_extensions](ExtensionsComputer::compute_extensions) returns [`EngineError::NoStableExtension`].
pub struct StableSemanticsSolver<'a> {
    index: &'a AttackIndex,
    max_candidate_sets: usize,
}

impl<'a> StableSemanticsSolver<'a> {
    /// Builds a new solver for the stable semantics, given the maximal number of candidate sets to explore.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::{AAFramework, ArgumentSet};
    /// # use argprov::error::EngineError;
    /// # use argprov::utils::AttackIndex;
    /// # use argprov::solvers::{ExtensionsComputer, StableSemanticsSolver};
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a"]).unwrap());
    /// af.new_attack(&"a", &"a").unwrap();
    /// let index = AttackIndex::new(&af);
    /// assert_eq!(
    ///     Err(EngineError::NoStableExtension),
    ///     StableSemanticsSolver::new(&index, 1000).compute_extensions(),
    /// );
    /// ```
    pub fn new(index: &'a AttackIndex, max_candidate_sets: usize) -> Self {
        Self {
            index,
            max_candidate_sets,
        }
    }
}

impl ExtensionsComputer for StableSemanticsSolver<'_> {
    fn compute_extensions(&mut self) -> Result<Vec<Extension>, EngineError> {
        let n = self.index.len();
        let complete =
            CompleteSemanticsSolver::new(self.index, self.max_candidate_sets).compute_extensions()?;
        let stable = complete
            .into_iter()
            .filter(|e| is_stable(self.index, &e.to_mask(n)))
            .collect::<Vec<Extension>>();
        debug!("found {} stable extension(s)", stable.len());
        if stable.is_empty() {
            return Err(EngineError::NoStableExtension);
        }
        Ok(stable)
    }
}
