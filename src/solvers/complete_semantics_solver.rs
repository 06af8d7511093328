use super::{is_complete, Extension, ExtensionsComputer};
use crate::{
    error::EngineError,
    utils::{self, AttackIndex},
};
use log::debug;
use std::collections::{BTreeSet, HashSet};

/// A search-based solver for the complete semantics.
///
/// A complete extension is an admissible set that contains every argument it defends.
///
/// Every complete extension contains the grounded extension, and every subset of a complete extension is conflict-free.
/// The solver thus starts from the grounded extension and grows it one argument at a time,
/// discarding any growth that would introduce a conflict.
/// Each candidate set reached this way is checked for completeness.
/// Candidate sets are memoized, so that a set reached through different orders of additions is explored once.
///
/// The number of candidate sets may be exponential in the number of arguments.
/// The exploration is bounded by a budget: once more than `max_candidate_sets` sets have been explored,
/// the search stops with a [`SearchBudgetExceeded`](EngineError::SearchBudgetExceeded) error.
pub struct CompleteSemanticsSolver<'a> {
    index: &'a AttackIndex,
    max_candidate_sets: usize,
}

impl<'a> CompleteSemanticsSolver<'a> {
    /// Builds a new solver for the complete semantics, given the maximal number of candidate sets to explore.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::{AAFramework, ArgumentSet};
    /// # use argprov::utils::AttackIndex;
    /// # use argprov::solvers::{ExtensionsComputer, CompleteSemanticsSolver};
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]).unwrap());
    /// af.new_attack(&"a", &"b").unwrap();
    /// af.new_attack(&"b", &"a").unwrap();
    /// let index = AttackIndex::new(&af);
    /// let extensions = CompleteSemanticsSolver::new(&index, 1000).compute_extensions().unwrap();
    /// assert_eq!(3, extensions.len()); // {}, {a} and {b}
    /// ```
    pub fn new(index: &'a AttackIndex, max_candidate_sets: usize) -> Self {
        Self {
            index,
            max_candidate_sets,
        }
    }
}

impl ExtensionsComputer for CompleteSemanticsSolver<'_> {
    fn compute_extensions(&mut self) -> Result<Vec<Extension>, EngineError> {
        let grounded = utils::grounded_extension(self.index);
        let mut search = CandidateSearch::new(self.index, &grounded, self.max_candidate_sets);
        search.run(grounded)?;
        debug!(
            "complete extension search explored {} candidate set(s) and found {} extension(s)",
            search.visited.len(),
            search.found.len()
        );
        Ok(search.found.into_iter().collect())
    }
}

struct CandidateSearch<'a> {
    index: &'a AttackIndex,
    candidates: Vec<usize>,
    visited: HashSet<Extension>,
    found: BTreeSet<Extension>,
    max_candidate_sets: usize,
}

impl<'a> CandidateSearch<'a> {
    fn new(index: &'a AttackIndex, grounded: &Extension, max_candidate_sets: usize) -> Self {
        let grounded_mask = grounded.to_mask(index.len());
        let candidates = (0..index.len())
            .filter(|a| {
                !grounded_mask[*a]
                    && !index.is_self_attacking(*a)
                    && !in_conflict(index, &grounded_mask, *a)
            })
            .collect::<Vec<usize>>();
        debug!(
            "{} argument(s) may extend the grounded extension",
            candidates.len()
        );
        Self {
            index,
            candidates,
            visited: HashSet::new(),
            found: BTreeSet::new(),
            max_candidate_sets,
        }
    }

    fn run(&mut self, start: Extension) -> Result<(), EngineError> {
        let n = self.index.len();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if self.visited.contains(&current) {
                continue;
            }
            if self.visited.len() >= self.max_candidate_sets {
                return Err(EngineError::SearchBudgetExceeded {
                    budget: self.max_candidate_sets,
                });
            }
            let mask = current.to_mask(n);
            if is_complete(self.index, &mask) {
                self.found.insert(current.clone());
            }
            for c in self.candidates.iter().rev() {
                if mask[*c] || in_conflict(self.index, &mask, *c) {
                    continue;
                }
                let mut members = current.members().to_vec();
                members.push(*c);
                let next = Extension::from_positions(members);
                if !self.visited.contains(&next) {
                    stack.push(next);
                }
            }
            self.visited.insert(current);
        }
        Ok(())
    }
}

fn in_conflict(index: &AttackIndex, set: &[bool], position: usize) -> bool {
    index.attackers_of(position).iter().any(|a| set[*a])
        || index.attackees_of(position).iter().any(|a| set[*a])
}
