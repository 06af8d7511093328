//! This module contains the main material used to define Abstract Argumentation.

mod aa_framework;
pub use aa_framework::AAFramework;
pub use aa_framework::Attack;

mod arguments;
pub use arguments::Argument;
pub use arguments::ArgumentMetadata;
pub use arguments::ArgumentSet;
pub use arguments::LabelType;
pub use arguments::ManualLabel;

mod framework_description;
pub use framework_description::ArgumentDescription;
pub use framework_description::AttackDescription;
pub use framework_description::FrameworkDescription;

mod generators;
pub use generators::RandomFrameworkGenerator;

mod sample_frameworks;
pub use sample_frameworks::SampleFramework;

mod semantics;
pub use semantics::SemanticsKind;
