use thiserror::Error;

/// The reasons why a framework is refused by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameworkDefect {
    /// The same label was given to two arguments.
    #[error("duplicate argument {label}")]
    DuplicateArgument {
        /// the repeated label
        label: String,
    },
    /// An attack (or a removal request) refers to an argument that does not belong to the framework.
    #[error("no such argument: {label}")]
    UnknownArgument {
        /// the unknown label
        label: String,
    },
    /// A removal request refers to an attack that does not belong to the framework.
    #[error("no such attack from {from} to {to}")]
    UnknownAttack {
        /// the label of the attacker
        from: String,
        /// the label of the attacked argument
        to: String,
    },
    /// More distinct attacks were requested than a framework of this size can hold without self-attacks.
    #[error("{requested} attacks cannot be drawn among {n_arguments} arguments (at most {max})")]
    TooManyAttacks {
        /// the number of requested attacks
        requested: usize,
        /// the number of arguments
        n_arguments: usize,
        /// the maximal number of attacks
        max: usize,
    },
}

/// The errors returned by the semantics engine.
///
/// These are the only failures the engine knows about:
/// the computation itself is total and deterministic for a valid framework.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The framework is malformed; nothing was solved.
    #[error("invalid framework: {0}")]
    InvalidFramework(#[from] FrameworkDefect),
    /// The stable semantics was requested but the framework has no stable extension.
    #[error("the framework admits no stable extension")]
    NoStableExtension,
    /// An exhaustive search went through more states than allowed.
    #[error("search budget exceeded (limit is {budget})")]
    SearchBudgetExceeded {
        /// the configured limit that was hit
        budget: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_framework() {
        let e = EngineError::from(FrameworkDefect::UnknownArgument {
            label: "d".to_string(),
        });
        assert_eq!("invalid framework: no such argument: d", e.to_string());
    }

    #[test]
    fn test_display_budget() {
        let e = EngineError::SearchBudgetExceeded { budget: 12 };
        assert_eq!("search budget exceeded (limit is 12)", e.to_string());
    }

    #[test]
    fn test_into_anyhow() {
        let e: anyhow::Error = EngineError::NoStableExtension.into();
        assert_eq!(
            Some(&EngineError::NoStableExtension),
            e.downcast_ref::<EngineError>()
        );
    }
}
