use crate::{
    aa::{AAFramework, Argument, LabelType},
    utils::AttackIndex,
};

/// A set of arguments given by their positions in an [`AttackIndex`].
///
/// Members are kept sorted, so the derived ordering between extensions is the lexicographic order
/// of their label-sorted members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Extension {
    members: Vec<usize>,
}

impl Extension {
    /// Builds an extension from a list of positions; order and repetitions do not matter.
    pub fn from_positions(mut positions: Vec<usize>) -> Self {
        positions.sort_unstable();
        positions.dedup();
        Self { members: positions }
    }

    /// Builds an extension from a membership mask.
    pub fn from_mask(mask: &[bool]) -> Self {
        Self {
            members: mask
                .iter()
                .enumerate()
                .filter_map(|(i, b)| if *b { Some(i) } else { None })
                .collect(),
        }
    }

    /// Returns the sorted positions of the members.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Returns `true` iff the argument at the given position belongs to this extension.
    pub fn contains(&self, position: usize) -> bool {
        self.members.binary_search(&position).is_ok()
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` iff the extension has no member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` iff every member of this extension is a member of the other one.
    pub fn is_subset_of(&self, other: &Extension) -> bool {
        self.len() <= other.len() && self.members.iter().all(|m| other.contains(*m))
    }

    /// Returns the membership mask of this extension for a framework of `n` arguments.
    pub fn to_mask(&self, n: usize) -> Vec<bool> {
        let mut mask = vec![false; n];
        self.members.iter().for_each(|m| mask[*m] = true);
        mask
    }

    /// Translates the positions of the members into the arguments of the framework.
    pub fn to_arguments<'a, T>(
        &self,
        af: &'a AAFramework<T>,
        index: &AttackIndex,
    ) -> Vec<&'a Argument<T>>
    where
        T: LabelType,
    {
        self.members
            .iter()
            .map(|p| af.argument_set().get_argument_by_id(index.argument_id(*p)))
            .collect()
    }
}

/// Returns the mask of the arguments attacked by at least one member of the set.
pub fn attacked_by(index: &AttackIndex, set: &[bool]) -> Vec<bool> {
    let mut attacked = vec![false; index.len()];
    set.iter()
        .enumerate()
        .filter(|(_, b)| **b)
        .for_each(|(a, _)| {
            index
                .attackees_of(a)
                .iter()
                .for_each(|t| attacked[*t] = true)
        });
    attacked
}

/// Checks that no member of the set attacks a member of the set.
pub fn is_conflict_free(index: &AttackIndex, set: &[bool]) -> bool {
    set.iter()
        .enumerate()
        .filter(|(_, b)| **b)
        .all(|(a, _)| index.attackees_of(a).iter().all(|t| !set[*t]))
}

/// Checks that every attacker of the argument is attacked by a member of the set.
pub fn defends(index: &AttackIndex, set: &[bool], position: usize) -> bool {
    index
        .attackers_of(position)
        .iter()
        .all(|b| index.attackers_of(*b).iter().any(|d| set[*d]))
}

/// The characteristic function `F(S) = {a | S defends a}`.
pub fn characteristic_function(index: &AttackIndex, set: &[bool]) -> Vec<bool> {
    let defeated = attacked_by(index, set);
    (0..index.len())
        .map(|a| index.attackers_of(a).iter().all(|b| defeated[*b]))
        .collect()
}

/// Checks that the set is conflict-free and defends each of its members.
pub fn is_admissible(index: &AttackIndex, set: &[bool]) -> bool {
    if !is_conflict_free(index, set) {
        return false;
    }
    let defended = characteristic_function(index, set);
    set.iter().zip(defended.iter()).all(|(s, d)| !*s || *d)
}

/// Checks that the set is admissible and contains every argument it defends.
///
/// For a conflict-free set, this is equivalent to be a fixpoint of the [characteristic function](characteristic_function).
pub fn is_complete(index: &AttackIndex, set: &[bool]) -> bool {
    is_conflict_free(index, set) && characteristic_function(index, set) == set
}

/// Checks that the set is conflict-free and attacks every argument outside of it.
pub fn is_stable(index: &AttackIndex, set: &[bool]) -> bool {
    if !is_conflict_free(index, set) {
        return false;
    }
    let attacked = attacked_by(index, set);
    set.iter().zip(attacked.iter()).all(|(s, a)| *s || *a)
}
