//! Solvers dedicated to Abstract Argumentation frameworks.
//!
//! All the solvers work on an [AttackIndex](crate::utils::AttackIndex) built from the framework.
//! They return [Extension]s, i.e. sets of argument positions, in a deterministic order.

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod extension;
pub use extension::attacked_by;
pub use extension::characteristic_function;
pub use extension::defends;
pub use extension::is_admissible;
pub use extension::is_complete;
pub use extension::is_conflict_free;
pub use extension::is_stable;
pub use extension::Extension;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod specs;
pub use specs::ExtensionsComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;
