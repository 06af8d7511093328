use super::arguments::{Argument, ArgumentMetadata, ArgumentSet, LabelType};
use crate::error::{EngineError, FrameworkDefect};
use std::collections::HashMap;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// Every attack of a framework refers to arguments of this framework:
/// attacks involving unknown arguments are refused when they are added.
/// Attacks are deduplicated, so that an ordered pair of arguments appears at most once.
pub struct AAFramework<T>
where
    T: LabelType,
{
    name: Option<String>,
    arguments: ArgumentSet<T>,
    attacks: Vec<Option<AttackData>>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
    attack_ids: HashMap<(usize, usize), usize>,
    n_removed_attacks: usize,
}

struct AttackData {
    from: usize,
    to: usize,
    annotation: Option<String>,
}

/// An attack, represented as a couple of two arguments and an optional annotation.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>
where
    T: LabelType,
{
    attacker: &'a Argument<T>,
    attacked: &'a Argument<T>,
    annotation: Option<&'a str>,
}

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use argprov::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.attacker
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.attacked
    }

    /// Returns the annotation of the attack, if any.
    pub fn annotation(&self) -> Option<&'a str> {
        self.annotation
    }
}

impl<T> Default for AAFramework<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self::new_with_argument_set(ArgumentSet::default())
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]).unwrap();
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.n_arguments());
    /// assert_eq!(0, framework.n_attacks());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let attacks_from = (0..arguments.id_bound()).map(|_| vec![]).collect();
        let attacks_to = (0..arguments.id_bound()).map(|_| vec![]).collect();
        AAFramework {
            name: None,
            arguments,
            attacks: vec![],
            attacks_from,
            attacks_to,
            attack_ids: HashMap::new(),
            n_removed_attacks: 0,
        }
    }

    /// Returns the name of the framework, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets the name of the framework.
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Adds a new argument to this argumentation framework.
    ///
    /// An error is returned if an argument with the same label already exists.
    pub fn new_argument(&mut self, label: T) -> Result<(), EngineError> {
        self.new_argument_with_metadata(label, ArgumentMetadata::default())
    }

    /// Adds a new argument with its metadata to this argumentation framework.
    pub fn new_argument_with_metadata(
        &mut self,
        label: T,
        metadata: ArgumentMetadata,
    ) -> Result<(), EngineError> {
        self.arguments.new_argument_with_metadata(label, metadata)?;
        self.attacks_from.push(Vec::new());
        self.attacks_to.push(Vec::new());
        Ok(())
    }

    /// Removes an argument from this argumentation framework, together with all the attacks it is involved in.
    ///
    /// The argument id will not be attributed to new arguments.
    pub fn remove_argument(&mut self, label: &T) -> Result<(), EngineError> {
        let removed_id = self.arguments.remove_argument(label)?.id();
        let incident = self.attacks_from[removed_id]
            .iter()
            .chain(self.attacks_to[removed_id].iter())
            .copied()
            .collect::<Vec<usize>>();
        for attack_id in incident {
            if let Some(data) = self.attacks[attack_id].take() {
                self.attack_ids.remove(&(data.from, data.to));
                self.attacks_from[data.from].retain(|i| *i != attack_id);
                self.attacks_to[data.to].retain(|i| *i != attack_id);
                self.n_removed_attacks += 1;
            }
        }
        Ok(())
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an [`InvalidFramework`](EngineError::InvalidFramework) error is returned.
    /// If the attack already exists, nothing is added and `false` is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert!(framework.new_attack(&"a", &"b").unwrap());
    /// assert!(!framework.new_attack(&"a", &"b").unwrap());
    /// assert!(framework.new_attack(&"a", &"d").is_err());
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<bool, EngineError> {
        self.new_attack_with_annotation(from, to, None)
    }

    /// Adds a new annotated attack given the labels of the source and destination arguments.
    ///
    /// See [`new_attack`](Self::new_attack) for the behavior on errors and redundant attacks.
    /// The annotation of a redundant attack is ignored.
    pub fn new_attack_with_annotation(
        &mut self,
        from: &T,
        to: &T,
        annotation: Option<String>,
    ) -> Result<bool, EngineError> {
        let attacker_id = self.arguments.get_argument_index(from)?;
        let attacked_id = self.arguments.get_argument_index(to)?;
        if self.attack_ids.contains_key(&(attacker_id, attacked_id)) {
            return Ok(false);
        }
        let attack_id = self.attacks.len();
        self.attacks.push(Some(AttackData {
            from: attacker_id,
            to: attacked_id,
            annotation,
        }));
        self.attack_ids.insert((attacker_id, attacked_id), attack_id);
        self.attacks_from[attacker_id].push(attack_id);
        self.attacks_to[attacked_id].push(attack_id);
        Ok(true)
    }

    /// Removes an attack.
    ///
    /// If the provided attack or one of its arguments does not belong to this framework, an error is returned.
    pub fn remove_attack(&mut self, from: &T, to: &T) -> Result<(), EngineError> {
        let attacker_id = self.arguments.get_argument_index(from)?;
        let attacked_id = self.arguments.get_argument_index(to)?;
        match self.attack_ids.remove(&(attacker_id, attacked_id)) {
            Some(attack_id) => {
                self.attacks[attack_id] = None;
                self.attacks_from[attacker_id].retain(|i| *i != attack_id);
                self.attacks_to[attacked_id].retain(|i| *i != attack_id);
                self.n_removed_attacks += 1;
                Ok(())
            }
            None => Err(FrameworkDefect::UnknownAttack {
                from: from.to_string(),
                to: to.to_string(),
            }
            .into()),
        }
    }

    /// Returns `true` iff the first argument attacks the second one.
    pub fn has_attack(&self, from: &T, to: &T) -> bool {
        match (
            self.arguments.get_argument_index(from),
            self.arguments.get_argument_index(to),
        ) {
            (Ok(a), Ok(b)) => self.attack_ids.contains_key(&(a, b)),
            _ => false,
        }
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    fn make_attack<'a>(&'a self, data: &'a AttackData) -> Attack<'a, T> {
        Attack {
            attacker: self.arguments.get_argument_by_id(data.from),
            attacked: self.arguments.get_argument_by_id(data.to),
            annotation: data.annotation.as_deref(),
        }
    }

    /// Provides an iterator to the attacks, in the order they were added.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks
            .iter()
            .filter_map(|o| o.as_ref())
            .map(|d| self.make_attack(d))
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_from[arg.id()]
            .iter()
            .filter_map(|i| self.attacks[*i].as_ref())
            .map(|d| self.make_attack(d))
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to(&self, arg: &Argument<T>) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks_to[arg.id()]
            .iter()
            .filter_map(|i| self.attacks[*i].as_ref())
            .map(|d| self.make_attack(d))
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len() - self.n_removed_attacks
    }
}
