use super::Extension;
use crate::error::EngineError;

/// A trait for solvers able to compute all the extensions of a semantics.
pub trait ExtensionsComputer {
    /// Computes all the extensions.
    ///
    /// The extensions are returned in lexicographic order of their label-sorted members, without duplicates.
    /// Solvers of semantics that may admit no extension report this case as an error
    /// rather than returning an empty list.
    fn compute_extensions(&mut self) -> Result<Vec<Extension>, EngineError>;
}
