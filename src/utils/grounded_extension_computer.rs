use super::AttackIndex;
use crate::solvers::{characteristic_function, Extension};
use log::debug;

/// Computes the grounded extension of an AF.
///
/// The grounded extension is the least fixpoint of the characteristic function:
/// starting from the empty set, the function is applied until the set stops growing.
/// Since the function is monotonic, each step either adds an argument or ends the computation.
pub(crate) fn grounded_extension(index: &AttackIndex) -> Extension {
    let mut current = vec![false; index.len()];
    let mut n_steps = 0;
    loop {
        let next = characteristic_function(index, &current);
        if next == current {
            break;
        }
        n_steps += 1;
        current = next;
    }
    debug_assert!(n_steps <= index.len());
    debug!("grounded fixpoint reached after {} step(s)", n_steps);
    Extension::from_mask(&current)
}
