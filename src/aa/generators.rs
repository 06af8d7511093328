use super::{AAFramework, ArgumentSet};
use crate::error::{EngineError, FrameworkDefect};
use log::debug;
use rand::{rngs::StdRng, seq::index, SeedableRng};

/// Draws frameworks with a given number of arguments and attacks.
///
/// Arguments are labelled `A`, `B`, ..., `Z`, `AA`, `AB` and so on.
/// Attacks are drawn uniformly among the ordered pairs of distinct arguments,
/// so that generated frameworks contain neither self-attacks nor duplicate attacks.
///
/// # Example
///
/// ```
/// # use argprov::aa::RandomFrameworkGenerator;
/// let af = RandomFrameworkGenerator::new(5, 8).with_seed(42).generate().unwrap();
/// assert_eq!(5, af.n_arguments());
/// assert_eq!(8, af.n_attacks());
/// ```
pub struct RandomFrameworkGenerator {
    n_arguments: usize,
    n_attacks: usize,
    seed: Option<u64>,
}

impl RandomFrameworkGenerator {
    /// Builds a generator for frameworks with the given number of arguments and attacks.
    pub fn new(n_arguments: usize, n_attacks: usize) -> Self {
        Self {
            n_arguments,
            n_attacks,
            seed: None,
        }
    }

    /// Sets the seed of the random generator, making the generated frameworks reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws a new framework.
    ///
    /// An error is returned if more attacks are requested than there are pairs of distinct arguments.
    pub fn generate(&self) -> Result<AAFramework<String>, EngineError> {
        let max = self.n_arguments * self.n_arguments.saturating_sub(1);
        if self.n_attacks > max {
            return Err(FrameworkDefect::TooManyAttacks {
                requested: self.n_attacks,
                n_arguments: self.n_arguments,
                max,
            }
            .into());
        }
        let labels = (0..self.n_arguments)
            .map(generated_label)
            .collect::<Vec<String>>();
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels)?);
        let mut rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let mut pairs = index::sample(&mut rng, max, self.n_attacks).into_vec();
        pairs.sort_unstable();
        for p in pairs {
            let (from, to) = pair_at(self.n_arguments, p);
            af.new_attack(&labels[from], &labels[to])?;
        }
        debug!(
            "generated a framework with {} argument(s) and {} attack(s)",
            af.n_arguments(),
            af.n_attacks()
        );
        Ok(af)
    }
}

// the k-th ordered pair of distinct positions, in lexicographic order
fn pair_at(n: usize, k: usize) -> (usize, usize) {
    let from = k / (n - 1);
    let to = k % (n - 1);
    (from, if to >= from { to + 1 } else { to })
}

fn generated_label(mut position: usize) -> String {
    let mut chars = vec![];
    loop {
        chars.push((b'A' + (position % 26) as u8) as char);
        if position < 26 {
            break;
        }
        position = position / 26 - 1;
    }
    chars.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_labels() {
        assert_eq!(
            vec!["A", "B", "Z", "AA", "AB", "BA", "ZZ", "AAA"],
            [0, 1, 25, 26, 27, 52, 701, 702]
                .iter()
                .map(|p| generated_label(*p))
                .collect::<Vec<String>>()
        );
    }

    #[test]
    fn test_pairs_skip_diagonal() {
        assert_eq!(
            vec![(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)],
            (0..6).map(|k| pair_at(3, k)).collect::<Vec<(usize, usize)>>()
        );
    }

    #[test]
    fn test_no_self_attack_nor_duplicate() {
        for seed in 0..20 {
            let af = RandomFrameworkGenerator::new(6, 12)
                .with_seed(seed)
                .generate()
                .unwrap();
            assert_eq!(6, af.n_arguments());
            assert_eq!(12, af.n_attacks());
            assert!(af
                .iter_attacks()
                .all(|att| att.attacker().id() != att.attacked().id()));
        }
    }

    #[test]
    fn test_all_attacks() {
        let af = RandomFrameworkGenerator::new(4, 12).generate().unwrap();
        assert_eq!(12, af.n_attacks());
    }

    #[test]
    fn test_same_seed_same_framework() {
        let attacks = |seed| {
            let af = RandomFrameworkGenerator::new(8, 10)
                .with_seed(seed)
                .generate()
                .unwrap();
            af.iter_attacks()
                .map(|att| format!("{}->{}", att.attacker(), att.attacked()))
                .collect::<Vec<String>>()
        };
        assert_eq!(attacks(7), attacks(7));
    }

    #[test]
    fn test_too_many_attacks() {
        assert_eq!(
            Some(EngineError::InvalidFramework(
                FrameworkDefect::TooManyAttacks {
                    requested: 7,
                    n_arguments: 3,
                    max: 6
                }
            )),
            RandomFrameworkGenerator::new(3, 7).generate().err()
        );
        assert!(RandomFrameworkGenerator::new(0, 0).generate().is_ok());
        assert!(RandomFrameworkGenerator::new(1, 1).generate().is_err());
    }
}
