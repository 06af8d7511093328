//! Objects used to read and write Argumentation frameworks and the results of the engine.

mod aspartix_reader;
pub use aspartix_reader::AspartixReader;

mod aspartix_writer;
pub use aspartix_writer::AspartixWriter;

mod auto_reader;
pub use auto_reader::AutoReader;

mod dot_writer;
pub use dot_writer::DotConfig;
pub use dot_writer::DotWriter;
pub use dot_writer::RankDirection;
pub use dot_writer::DEFAULT_ACCEPTED_COLOR;
pub use dot_writer::DEFAULT_REJECTED_COLOR;
pub use dot_writer::DEFAULT_UNDECIDED_COLOR;

mod json_reader;
pub use json_reader::JsonReader;

mod json_writer;
pub use json_writer::JsonWriter;

mod result_writer;
pub use result_writer::ResultWriter;
pub use result_writer::NO_STABLE_EXTENSION;

mod specs;
pub use specs::FrameworkWriter;
pub use specs::InstanceReader;
pub use specs::WarningHandler;
