//! The semantics engine: statuses of arguments under a semantics, and their provenance.

mod engine_config;
pub use engine_config::EngineConfig;
pub use engine_config::DEFAULT_MAX_CANDIDATE_SETS;
pub use engine_config::DEFAULT_MAX_DISPUTE_TREE_NODES;

mod provenance;
pub use provenance::DisputeNode;
pub use provenance::DisputeRole;
pub use provenance::ProvenanceInfo;
pub use provenance::ProvenanceMode;

mod provenance_resolver;
pub use provenance_resolver::ProvenanceResolver;

mod semantics_engine;
pub use semantics_engine::SemanticsEngine;

mod semantics_result;
pub use semantics_result::SemanticsResult;

mod verdict_classifier;
pub use verdict_classifier::ArgumentStatus;
pub use verdict_classifier::VerdictClassifier;
pub use verdict_classifier::VerdictReason;
