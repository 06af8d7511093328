use super::{Extension, ExtensionsComputer};
use crate::{
    error::EngineError,
    utils::{self, AttackIndex},
};

/// A solver for the grounded semantics.
///
/// The (unique) grounded extension is the minimal complete extension (see [CompleteSemanticsSolver](crate::solvers::CompleteSemanticsSolver) for more information).
/// It is computed in time polynomial in the size of the framework, with no search involved.
pub struct GroundedSemanticsSolver<'a> {
    index: &'a AttackIndex,
}

impl<'a> GroundedSemanticsSolver<'a> {
    /// Builds a new solver dedicated to the grounded semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::{AAFramework, ArgumentSet};
    /// # use argprov::utils::AttackIndex;
    /// # use argprov::solvers::{ExtensionsComputer, GroundedSemanticsSolver};
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]).unwrap());
    /// af.new_attack(&"a", &"b").unwrap();
    /// let index = AttackIndex::new(&af);
    /// let extensions = GroundedSemanticsSolver::new(&index).compute_extensions().unwrap();
    /// assert_eq!(1, extensions.len());
    /// assert_eq!(&[0], extensions[0].members());
    /// ```
    pub fn new(index: &'a AttackIndex) -> Self {
        Self { index }
    }

    /// Computes the grounded extension.
    pub fn grounded_extension(&self) -> Extension {
        utils::grounded_extension(self.index)
    }
}

impl ExtensionsComputer for GroundedSemanticsSolver<'_> {
    fn compute_extensions(&mut self) -> Result<Vec<Extension>, EngineError> {
        Ok(vec![self.grounded_extension()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::{AAFramework, ArgumentSet};

    #[test]
    fn test_grounded_solver_is_deterministic() {
        let mut af = AAFramework::new_with_argument_set(
            ArgumentSet::new_with_labels(&["a", "b", "c", "d"]).unwrap(),
        );
        af.new_attack(&"a", &"b").unwrap();
        af.new_attack(&"b", &"a").unwrap();
        af.new_attack(&"c", &"d").unwrap();
        let index = AttackIndex::new(&af);
        let mut solver = GroundedSemanticsSolver::new(&index);
        let first = solver.compute_extensions().unwrap();
        let second = solver.compute_extensions().unwrap();
        assert_eq!(first, second);
        assert_eq!(vec![Extension::from_positions(vec![2])], first);
    }
}
