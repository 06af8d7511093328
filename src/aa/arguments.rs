use crate::error::{EngineError, FrameworkDefect};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;
use strum_macros::{AsRefStr, EnumString};

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
///
/// The ordering of labels gives the order in which the engine explores and reports arguments,
/// which makes its results reproducible.
pub trait LabelType: Clone + Debug + Display + Eq + Hash + Ord {}
impl<T: Clone + Debug + Display + Eq + Hash + Ord> LabelType for T {}

/// A label set by a human on an argument, independently of any computed status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ManualLabel {
    /// The argument is considered accepted.
    Accepted,
    /// The argument is considered defeated.
    Defeated,
    /// No opinion on the argument.
    Undecided,
}

/// Free data attached to an argument.
///
/// The engine carries it along but never uses it to compute statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMetadata {
    /// A free text describing the argument.
    pub annotation: Option<String>,
    /// A link to an external reference.
    pub url: Option<String>,
    /// An override label set by a human.
    pub manual_label: Option<ManualLabel>,
}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
    metadata: ArgumentMetadata,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use argprov::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the metadata attached to this argument.
    pub fn metadata(&self) -> &ArgumentMetadata {
        &self.metadata
    }

    /// Returns the annotation of this argument, if any.
    pub fn annotation(&self) -> Option<&str> {
        self.metadata.annotation.as_deref()
    }

    /// Returns the external reference of this argument, if any.
    pub fn url(&self) -> Option<&str> {
        self.metadata.url.as_deref()
    }

    /// Returns the label a human set on this argument, if any.
    pub fn manual_label(&self) -> Option<ManualLabel> {
        self.metadata.manual_label
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
///
/// Labels are unique: adding an argument whose label is already in use is an error.
/// Arguments may be removed; their ids are not given to newer arguments.
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Option<Argument<T>>>,
    label_to_id: HashMap<T, usize>,
    n_removed: usize,
}

impl<T> Default for ArgumentSet<T>
where
    T: LabelType,
{
    fn default() -> Self {
        Self {
            arguments: vec![],
            label_to_id: HashMap::new(),
            n_removed: 0,
        }
    }
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, an [`InvalidFramework`](EngineError::InvalidFramework) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
    /// assert_eq!(3, arguments.len());
    /// assert!(ArgumentSet::new_with_labels(&["a", "a"]).is_err());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Result<Self, EngineError> {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
            n_removed: 0,
        };
        for l in labels {
            argument_set.new_argument(l.clone())?;
        }
        Ok(argument_set)
    }

    /// Adds a new argument to this set and returns its id.
    ///
    /// The id of the new argument is the previous maximal id plus one.
    pub fn new_argument(&mut self, label: T) -> Result<usize, EngineError> {
        self.new_argument_with_metadata(label, ArgumentMetadata::default())
    }

    /// Adds a new argument with its metadata to this set and returns its id.
    pub fn new_argument_with_metadata(
        &mut self,
        label: T,
        metadata: ArgumentMetadata,
    ) -> Result<usize, EngineError> {
        if self.label_to_id.contains_key(&label) {
            return Err(FrameworkDefect::DuplicateArgument {
                label: label.to_string(),
            }
            .into());
        }
        let id = self.arguments.len();
        self.label_to_id.insert(label.clone(), id);
        self.arguments.push(Some(Argument {
            id,
            label,
            metadata,
        }));
        Ok(id)
    }

    /// Removes an argument from this set.
    ///
    /// The argument id will not be attributed to new arguments.
    pub fn remove_argument(&mut self, label: &T) -> Result<Argument<T>, EngineError> {
        let removed = self
            .label_to_id
            .remove(label)
            .and_then(|id| self.arguments[id].take());
        match removed {
            Some(a) => {
                self.n_removed += 1;
                Ok(a)
            }
            None => Err(FrameworkDefect::UnknownArgument {
                label: label.to_string(),
            }
            .into()),
        }
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len() - self.n_removed
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.len() == self.n_removed
    }

    /// Returns an upper bound (exclusive) on the ids given so far, including the ones of removed arguments.
    pub fn id_bound(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels).unwrap();
    /// assert_eq!(1, arguments.get_argument_index(&"b").unwrap());
    /// assert!(arguments.get_argument_index(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize, EngineError> {
        self.label_to_id.get(label).copied().ok_or_else(|| {
            FrameworkDefect::UnknownArgument {
                label: label.to_string(),
            }
            .into()
        })
    }

    /// Returns the argument associated to an argument label.
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>, EngineError> {
        self.get_argument_index(label)
            .map(|i| self.get_argument_by_id(i))
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id, or if it has been removed.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        self.arguments[id]
            .as_ref()
            .unwrap_or_else(|| panic!("no argument with id {}", id))
    }

    /// Returns `true` iff an argument with the provided id exists and has not been removed.
    pub fn has_argument_with_id(&self, id: usize) -> bool {
        id < self.arguments.len() && self.arguments[id].is_some()
    }

    /// Returns an iterator to the arguments, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter().filter_map(|o| o.as_ref())
    }
}
