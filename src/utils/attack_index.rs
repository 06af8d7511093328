use crate::aa::{AAFramework, Argument, LabelType};

/// Lookup tables of attackers and attacked arguments, built once per solve.
///
/// The index works on *positions* rather than on argument ids:
/// positions are dense (removed arguments leave no hole) and follow the order of the argument labels.
/// Thus, sorting a set of positions sorts the corresponding arguments by label,
/// which is what makes the enumeration order of the solvers deterministic.
///
/// Each attacker (resp. attacked) list is sorted and holds no duplicate.
pub struct AttackIndex {
    argument_ids: Vec<usize>,
    positions: Vec<Option<usize>>,
    attackers: Vec<Vec<usize>>,
    attackees: Vec<Vec<usize>>,
}

impl AttackIndex {
    /// Builds the index of a framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::{AAFramework, ArgumentSet};
    /// # use argprov::utils::AttackIndex;
    /// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["b", "a"]).unwrap());
    /// af.new_attack(&"b", &"a").unwrap();
    /// let index = AttackIndex::new(&af);
    /// // "a" comes first in label order
    /// assert_eq!(&[1], index.attackers_of(0));
    /// assert!(index.attackees_of(0).is_empty());
    /// ```
    pub fn new<T>(af: &AAFramework<T>) -> Self
    where
        T: LabelType,
    {
        let mut sorted = af.argument_set().iter().collect::<Vec<&Argument<T>>>();
        sorted.sort_unstable_by(|a, b| a.label().cmp(b.label()));
        let argument_ids = sorted.iter().map(|a| a.id()).collect::<Vec<usize>>();
        let mut positions = vec![None; af.argument_set().id_bound()];
        argument_ids
            .iter()
            .enumerate()
            .for_each(|(pos, id)| positions[*id] = Some(pos));
        let mut attackers = vec![vec![]; argument_ids.len()];
        let mut attackees = vec![vec![]; argument_ids.len()];
        for att in af.iter_attacks() {
            let (from, to) = match (
                positions[att.attacker().id()],
                positions[att.attacked().id()],
            ) {
                (Some(f), Some(t)) => (f, t),
                _ => continue,
            };
            attackers[to].push(from);
            attackees[from].push(to);
        }
        attackers.iter_mut().chain(attackees.iter_mut()).for_each(|v| {
            v.sort_unstable();
            v.dedup();
        });
        Self {
            argument_ids,
            positions,
            attackers,
            attackees,
        }
    }

    /// Returns the number of indexed arguments.
    pub fn len(&self) -> usize {
        self.argument_ids.len()
    }

    /// Returns `true` iff the framework has no argument.
    pub fn is_empty(&self) -> bool {
        self.argument_ids.is_empty()
    }

    /// Returns the positions of the arguments attacking the argument at the given position.
    pub fn attackers_of(&self, position: usize) -> &[usize] {
        &self.attackers[position]
    }

    /// Returns the positions of the arguments attacked by the argument at the given position.
    pub fn attackees_of(&self, position: usize) -> &[usize] {
        &self.attackees[position]
    }

    /// Returns `true` iff the first argument attacks the second one.
    pub fn attacks(&self, from: usize, to: usize) -> bool {
        self.attackees[from].binary_search(&to).is_ok()
    }

    /// Returns `true` iff the argument at the given position attacks itself.
    pub fn is_self_attacking(&self, position: usize) -> bool {
        self.attacks(position, position)
    }

    /// Returns the framework id of the argument at the given position.
    pub fn argument_id(&self, position: usize) -> usize {
        self.argument_ids[position]
    }

    /// Returns the position of the argument with the given framework id.
    ///
    /// `None` is returned for ids of removed or unknown arguments.
    pub fn position_of(&self, argument_id: usize) -> Option<usize> {
        self.positions.get(argument_id).copied().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    #[test]
    fn test_positions_follow_labels() {
        let args = ArgumentSet::new_with_labels(&["c", "a", "b"]).unwrap();
        let af = AAFramework::new_with_argument_set(args);
        let index = AttackIndex::new(&af);
        assert_eq!(3, index.len());
        assert_eq!(1, index.argument_id(0));
        assert_eq!(2, index.argument_id(1));
        assert_eq!(0, index.argument_id(2));
        assert_eq!(Some(2), index.position_of(0));
        assert_eq!(None, index.position_of(3));
    }

    #[test]
    fn test_attackers_and_attackees() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]).unwrap();
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"c", &"a").unwrap();
        af.new_attack(&"b", &"a").unwrap();
        af.new_attack(&"c", &"c").unwrap();
        let index = AttackIndex::new(&af);
        assert_eq!(&[1, 2], index.attackers_of(0));
        assert_eq!(&[0, 2], index.attackees_of(2));
        assert!(index.attackers_of(1).is_empty());
        assert!(index.attacks(1, 0));
        assert!(!index.attacks(0, 1));
        assert!(index.is_self_attacking(2));
        assert!(!index.is_self_attacking(0));
    }

    #[test]
    fn test_removed_arguments_leave_no_hole() {
        let args = ArgumentSet::new_with_labels(&["a", "b", "c"]).unwrap();
        let mut af = AAFramework::new_with_argument_set(args);
        af.new_attack(&"a", &"c").unwrap();
        af.new_attack(&"b", &"c").unwrap();
        af.remove_argument(&"a").unwrap();
        let index = AttackIndex::new(&af);
        assert_eq!(2, index.len());
        assert_eq!(None, index.position_of(0));
        assert_eq!(&[0], index.attackers_of(1));
    }

    #[test]
    fn test_empty() {
        let index = AttackIndex::new(&AAFramework::<String>::default());
        assert!(index.is_empty());
    }
}
