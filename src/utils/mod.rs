//! Miscellaneous components used in the library.

mod attack_index;
pub use attack_index::AttackIndex;

mod grounded_extension_computer;
pub(crate) use grounded_extension_computer::grounded_extension;
