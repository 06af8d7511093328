use crate::{error::EngineError, solvers::Extension, utils::AttackIndex};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter};

/// The status the engine gives to an argument.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    AsRefStr,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArgumentStatus {
    /// The argument belongs to every extension.
    Accepted,
    /// The argument belongs to no extension and is defeated.
    Rejected,
    /// Neither accepted nor rejected.
    Undecided,
}

/// The reason an argument received its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum VerdictReason {
    /// Accepted, since nothing attacks the argument.
    Unattacked,
    /// Accepted, since every extension defends the argument against all its attackers.
    AttackersDefeated,
    /// Rejected, since an accepted argument attacks it.
    AttackedByAccepted,
    /// Rejected, since members of extensions attack it, although none of them is accepted.
    AttackedByExtensionMember,
    /// Rejected, since the argument attacks itself.
    SelfAttacking,
    /// Undecided, since the argument belongs to some extensions but not all of them.
    CredulouslyAccepted,
    /// Undecided, since the argument belongs to no extension but no extension member attacks it.
    Unresolved,
}

/// Turns a list of extensions into a three-way labelling of the arguments, under skeptical acceptance.
///
/// An argument is accepted if it belongs to every extension.
/// It is rejected if it belongs to no extension and is either attacked by a member of some extension or attacks itself.
/// All other arguments are undecided.
///
/// A self-attacking argument cannot be defended against itself, so it never belongs to an admissible set.
pub struct VerdictClassifier<'a> {
    index: &'a AttackIndex,
}

impl<'a> VerdictClassifier<'a> {
    /// Builds a new classifier for the framework described by the index.
    pub fn new(index: &'a AttackIndex) -> Self {
        Self { index }
    }

    /// Computes the status of each argument, given by its position in the index.
    ///
    /// An empty list of extensions cannot be classified: [`EngineError::NoStableExtension`] is returned in this case,
    /// since only the stable semantics may lack extensions.
    pub fn classify(&self, extensions: &[Extension]) -> Result<Vec<ArgumentStatus>, EngineError> {
        Ok(self
            .classify_with_reasons(extensions)?
            .into_iter()
            .map(|(status, _)| status)
            .collect())
    }

    /// Computes the status of each argument together with the reason of this status.
    ///
    /// See [classify](Self::classify) for more information.
    pub fn classify_with_reasons(
        &self,
        extensions: &[Extension],
    ) -> Result<Vec<(ArgumentStatus, VerdictReason)>, EngineError> {
        if extensions.is_empty() {
            return Err(EngineError::NoStableExtension);
        }
        let n = self.index.len();
        let mut n_memberships = vec![0; n];
        let mut defeated = vec![false; n];
        for ext in extensions {
            for m in ext.members() {
                n_memberships[*m] += 1;
                self.index
                    .attackees_of(*m)
                    .iter()
                    .for_each(|a| defeated[*a] = true);
            }
        }
        let statuses = (0..n)
            .map(|a| {
                if n_memberships[a] == extensions.len() {
                    ArgumentStatus::Accepted
                } else if n_memberships[a] == 0
                    && (defeated[a] || self.index.is_self_attacking(a))
                {
                    ArgumentStatus::Rejected
                } else {
                    ArgumentStatus::Undecided
                }
            })
            .collect::<Vec<ArgumentStatus>>();
        Ok(statuses
            .iter()
            .enumerate()
            .map(|(a, status)| {
                let attackers = self.index.attackers_of(a);
                let reason = match status {
                    ArgumentStatus::Accepted if attackers.is_empty() => VerdictReason::Unattacked,
                    ArgumentStatus::Accepted => VerdictReason::AttackersDefeated,
                    ArgumentStatus::Rejected
                        if attackers
                            .iter()
                            .any(|b| statuses[*b] == ArgumentStatus::Accepted) =>
                    {
                        VerdictReason::AttackedByAccepted
                    }
                    ArgumentStatus::Rejected if defeated[a] => {
                        VerdictReason::AttackedByExtensionMember
                    }
                    ArgumentStatus::Rejected => VerdictReason::SelfAttacking,
                    ArgumentStatus::Undecided if n_memberships[a] > 0 => {
                        VerdictReason::CredulouslyAccepted
                    }
                    ArgumentStatus::Undecided => VerdictReason::Unresolved,
                };
                (*status, reason)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::{AAFramework, ArgumentSet};

    fn index_of(labels: &[&'static str], attacks: &[(&'static str, &'static str)]) -> AttackIndex {
        let mut af =
            AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(labels).unwrap());
        for (a, b) in attacks {
            af.new_attack(a, b).unwrap();
        }
        AttackIndex::new(&af)
    }

    #[test]
    fn test_single_extension() {
        let index = index_of(&["a", "b", "c"], &[("b", "a"), ("c", "b")]);
        let statuses = VerdictClassifier::new(&index)
            .classify(&[Extension::from_positions(vec![0, 2])])
            .unwrap();
        assert_eq!(
            vec![
                ArgumentStatus::Accepted,
                ArgumentStatus::Rejected,
                ArgumentStatus::Accepted
            ],
            statuses
        );
    }

    #[test]
    fn test_several_extensions() {
        let index = index_of(&["a", "b", "c"], &[("a", "b"), ("b", "a"), ("a", "c"), ("b", "c")]);
        let statuses = VerdictClassifier::new(&index)
            .classify(&[
                Extension::from_positions(vec![0]),
                Extension::from_positions(vec![1]),
            ])
            .unwrap();
        assert_eq!(
            vec![
                ArgumentStatus::Undecided,
                ArgumentStatus::Undecided,
                ArgumentStatus::Rejected
            ],
            statuses
        );
    }

    #[test]
    fn test_self_attack_is_rejected() {
        let index = index_of(&["a"], &[("a", "a")]);
        let statuses = VerdictClassifier::new(&index)
            .classify(&[Extension::default()])
            .unwrap();
        assert_eq!(vec![ArgumentStatus::Rejected], statuses);
    }

    #[test]
    fn test_unattacked_outsider_is_undecided() {
        let index = index_of(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let statuses = VerdictClassifier::new(&index)
            .classify(&[Extension::default()])
            .unwrap();
        assert_eq!(vec![ArgumentStatus::Undecided; 3], statuses);
    }

    #[test]
    fn test_no_extension() {
        let index = index_of(&["a"], &[]);
        assert_eq!(
            Err(EngineError::NoStableExtension),
            VerdictClassifier::new(&index).classify(&[])
        );
    }

    #[test]
    fn test_reasons() {
        let index = index_of(
            &["a", "b", "c", "d", "e", "f"],
            &[("a", "b"), ("b", "c"), ("d", "e"), ("e", "d"), ("f", "f"), ("d", "f")],
        );
        let verdicts = VerdictClassifier::new(&index)
            .classify_with_reasons(&[
                Extension::from_positions(vec![0, 2, 3]),
                Extension::from_positions(vec![0, 2, 4]),
            ])
            .unwrap();
        assert_eq!(
            vec![
                (ArgumentStatus::Accepted, VerdictReason::Unattacked),
                (ArgumentStatus::Rejected, VerdictReason::AttackedByAccepted),
                (ArgumentStatus::Accepted, VerdictReason::AttackersDefeated),
                (ArgumentStatus::Undecided, VerdictReason::CredulouslyAccepted),
                (ArgumentStatus::Undecided, VerdictReason::CredulouslyAccepted),
                (ArgumentStatus::Rejected, VerdictReason::AttackedByExtensionMember),
            ],
            verdicts
        );
    }

    #[test]
    fn test_self_attack_reason() {
        let index = index_of(&["a", "b", "c"], &[("a", "a"), ("b", "c"), ("c", "b")]);
        let verdicts = VerdictClassifier::new(&index)
            .classify_with_reasons(&[Extension::default()])
            .unwrap();
        assert_eq!(
            vec![
                (ArgumentStatus::Rejected, VerdictReason::SelfAttacking),
                (ArgumentStatus::Undecided, VerdictReason::Unresolved),
                (ArgumentStatus::Undecided, VerdictReason::Unresolved),
            ],
            verdicts
        );
    }
}
