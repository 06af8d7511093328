use super::{AAFramework, ArgumentDescription, AttackDescription, FrameworkDescription};
use crate::error::EngineError;
use anyhow::{anyhow, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// Small frameworks shipped with the library, to try the semantics out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SampleFramework {
    /// A chain of three arguments.
    Simple,
    /// An odd cycle of three arguments.
    Cycle,
    /// Two defended chains against the same argument.
    Complex,
}

const SAMPLE_URL_PREFIX: &str = "https://example.com/argument/";

impl SampleFramework {
    /// Iterates over the names of the sample frameworks.
    pub fn iter_names() -> impl Iterator<Item = String> {
        SampleFramework::iter().map(|s| s.as_ref().to_string())
    }

    /// Returns the human readable title of the sample.
    pub fn title(&self) -> &'static str {
        match self {
            SampleFramework::Simple => "Simple Framework",
            SampleFramework::Cycle => "Cycle Example",
            SampleFramework::Complex => "Complex Framework",
        }
    }

    /// Returns the description of the sample, arguments carrying annotations and URLs.
    pub fn description(&self) -> FrameworkDescription {
        let (arguments, attacks): (&[(&str, &str)], &[(&str, &str)]) = match self {
            SampleFramework::Simple => (
                &[
                    ("a", "It will rain tomorrow"),
                    ("b", "The forecast says it will be sunny"),
                    ("c", "The forecast is often wrong"),
                ],
                &[("b", "a"), ("c", "b")],
            ),
            SampleFramework::Cycle => (
                &[
                    ("a", "We should go to the beach"),
                    ("b", "We should go to the mountains"),
                    ("c", "We should stay home"),
                ],
                &[("a", "b"), ("b", "c"), ("c", "a")],
            ),
            SampleFramework::Complex => (
                &[
                    ("a", "The product should be released now"),
                    ("b", "There are still bugs to fix"),
                    ("c", "The bugs are minor"),
                    ("d", "The competition is releasing similar features"),
                    ("e", "Our product has unique advantages"),
                ],
                &[("b", "a"), ("c", "b"), ("d", "a"), ("e", "d")],
            ),
        };
        FrameworkDescription {
            name: Some(self.title().to_string()),
            arguments: arguments
                .iter()
                .map(|(id, annotation)| ArgumentDescription {
                    id: id.to_string(),
                    annotation: Some(annotation.to_string()),
                    url: Some(format!("{}{}", SAMPLE_URL_PREFIX, id)),
                    ..Default::default()
                })
                .collect(),
            defeats: attacks
                .iter()
                .map(|(from, to)| AttackDescription {
                    from: from.to_string(),
                    to: to.to_string(),
                    annotation: None,
                })
                .collect(),
        }
    }

    /// Builds the framework of the sample.
    pub fn framework(&self) -> Result<AAFramework<String>, EngineError> {
        AAFramework::try_from(self.description())
    }
}

impl TryFrom<&str> for SampleFramework {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lowercase = value.to_ascii_lowercase();
        SampleFramework::iter()
            .find(|s| s.as_ref() == lowercase)
            .ok_or_else(|| anyhow!(r#"undefined sample framework "{}""#, value))
    }
}
