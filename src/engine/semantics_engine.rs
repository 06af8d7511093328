use super::{
    ArgumentStatus, EngineConfig, ProvenanceResolver, SemanticsResult, VerdictClassifier,
};
use crate::{
    aa::{AAFramework, Argument, LabelType, SemanticsKind},
    error::EngineError,
    solvers::{
        CompleteSemanticsSolver, Extension, ExtensionsComputer, GroundedSemanticsSolver,
        PreferredSemanticsSolver, StableSemanticsSolver,
    },
    utils::AttackIndex,
};
use log::info;
use std::collections::BTreeMap;

/// The entry point of the library: computes the statuses of the arguments of a framework, with their provenance.
///
/// The engine holds no state apart from its configuration.
/// Solving the same framework twice under the same semantics gives the same result.
///
/// # Example
///
/// ```
/// # use argprov::aa::{AAFramework, ArgumentSet, SemanticsKind};
/// # use argprov::engine::{EngineConfig, SemanticsEngine};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b", "c"]).unwrap());
/// af.new_attack(&"b", &"a").unwrap();
/// af.new_attack(&"c", &"b").unwrap();
/// let engine = SemanticsEngine::new(EngineConfig::default());
/// let result = engine.solve(&af, SemanticsKind::Preferred).unwrap();
/// let accepted = result.accepted().iter().map(|a| *a.label()).collect::<Vec<&str>>();
/// assert_eq!(vec!["a", "c"], accepted);
/// let provenance = result.provenance(&"a").unwrap();
/// assert_eq!("b", *provenance.attackers()[0].label());
/// ```
#[derive(Debug, Clone, Default)]
pub struct SemanticsEngine {
    config: EngineConfig,
}

impl SemanticsEngine {
    /// Builds a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this engine.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Computes all the extensions of the framework under the given semantics.
    ///
    /// Each extension is sorted by label, and the list of extensions is sorted lexicographically.
    pub fn compute_extensions<'a, T>(
        &self,
        af: &'a AAFramework<T>,
        semantics: SemanticsKind,
    ) -> Result<Vec<Vec<&'a Argument<T>>>, EngineError>
    where
        T: LabelType,
    {
        let index = AttackIndex::new(af);
        let extensions = self.extensions(&index, semantics)?;
        Ok(extensions
            .iter()
            .map(|e| e.to_arguments(af, &index))
            .collect())
    }

    /// Solves the framework under the given semantics.
    ///
    /// The statuses are computed under skeptical acceptance (see [VerdictClassifier]),
    /// and the provenance of every argument is computed (see [ProvenanceResolver]).
    ///
    /// An error is returned if the stable semantics is requested for a framework without stable extension,
    /// or if the candidate set budget of the [EngineConfig] is exceeded.
    /// No partial result is returned in these cases.
    /// Dispute trees reaching their maximal size are truncated instead.
    pub fn solve<'a, T>(
        &self,
        af: &'a AAFramework<T>,
        semantics: SemanticsKind,
    ) -> Result<SemanticsResult<'a, T>, EngineError>
    where
        T: LabelType,
    {
        let index = AttackIndex::new(af);
        let extensions = self.extensions(&index, semantics)?;
        let verdicts = VerdictClassifier::new(&index).classify_with_reasons(&extensions)?;
        let resolver = ProvenanceResolver::new(
            af,
            &index,
            &extensions,
            self.config.max_dispute_tree_nodes(),
        );
        let mut accepted = vec![];
        let mut rejected = vec![];
        let mut undecided = vec![];
        let mut provenance = BTreeMap::new();
        for (position, verdict) in verdicts.iter().enumerate() {
            let info = resolver.resolve(position, *verdict);
            let argument = info.argument();
            match info.status() {
                ArgumentStatus::Accepted => accepted.push(argument),
                ArgumentStatus::Rejected => rejected.push(argument),
                ArgumentStatus::Undecided => undecided.push(argument),
            }
            provenance.insert(argument.label(), info);
        }
        info!(
            "{} semantics: {} extension(s); {} accepted, {} rejected and {} undecided argument(s)",
            semantics.as_ref(),
            extensions.len(),
            accepted.len(),
            rejected.len(),
            undecided.len()
        );
        Ok(SemanticsResult {
            semantics,
            extensions: extensions
                .iter()
                .map(|e| e.to_arguments(af, &index))
                .collect(),
            accepted,
            rejected,
            undecided,
            provenance,
        })
    }

    fn extensions(
        &self,
        index: &AttackIndex,
        semantics: SemanticsKind,
    ) -> Result<Vec<Extension>, EngineError> {
        let budget = self.config.max_candidate_sets();
        match semantics {
            SemanticsKind::Grounded => GroundedSemanticsSolver::new(index).compute_extensions(),
            SemanticsKind::Complete => {
                CompleteSemanticsSolver::new(index, budget).compute_extensions()
            }
            SemanticsKind::Preferred => {
                PreferredSemanticsSolver::new(index, budget).compute_extensions()
            }
            SemanticsKind::Stable => StableSemanticsSolver::new(index, budget).compute_extensions(),
        }
    }
}
