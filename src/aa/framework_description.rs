use super::{AAFramework, ArgumentMetadata, ArgumentSet, ManualLabel};
use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// A plain description of a framework, as exchanged with the outside world.
///
/// This is the shape of the JSON notation (`arguments` and `defeats` arrays).
/// Nothing is checked at this level: converting a description into an [`AAFramework`] is the validation step.
///
/// # Example
///
/// ```
/// # use argprov::aa::{AAFramework, FrameworkDescription};
/// let description: FrameworkDescription = serde_json::from_str(r#"{
///     "name": "chain",
///     "arguments": [{"id": "a"}, {"id": "b", "annotation": "a rebuttal"}],
///     "defeats": [{"from": "b", "to": "a"}]
/// }"#).unwrap();
/// let af = AAFramework::try_from(description).unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(Some("chain"), af.name());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkDescription {
    /// The name of the framework.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The arguments.
    #[serde(default)]
    pub arguments: Vec<ArgumentDescription>,
    /// The attacks.
    #[serde(default)]
    pub defeats: Vec<AttackDescription>,
}

/// The description of an argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentDescription {
    /// The argument identifier.
    pub id: String,
    /// A free text describing the argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
    /// An external reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// A label set by a human.
    #[serde(
        default,
        rename = "manualValue",
        skip_serializing_if = "Option::is_none"
    )]
    pub manual_value: Option<ManualLabel>,
}

/// The description of an attack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackDescription {
    /// The attacker identifier.
    pub from: String,
    /// The attacked argument identifier.
    pub to: String,
    /// A free text describing the attack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<String>,
}

impl TryFrom<FrameworkDescription> for AAFramework<String> {
    type Error = EngineError;

    fn try_from(description: FrameworkDescription) -> Result<Self, Self::Error> {
        let mut arguments = ArgumentSet::default();
        for arg in description.arguments {
            arguments.new_argument_with_metadata(
                arg.id,
                ArgumentMetadata {
                    annotation: arg.annotation,
                    url: arg.url,
                    manual_label: arg.manual_value,
                },
            )?;
        }
        let mut af = AAFramework::new_with_argument_set(arguments);
        af.set_name(description.name);
        for att in description.defeats {
            af.new_attack_with_annotation(&att.from, &att.to, att.annotation)?;
        }
        Ok(af)
    }
}

impl From<&AAFramework<String>> for FrameworkDescription {
    fn from(af: &AAFramework<String>) -> Self {
        FrameworkDescription {
            name: af.name().map(str::to_string),
            arguments: af
                .argument_set()
                .iter()
                .map(|a| ArgumentDescription {
                    id: a.label().clone(),
                    annotation: a.metadata().annotation.clone(),
                    url: a.metadata().url.clone(),
                    manual_value: a.manual_label(),
                })
                .collect(),
            defeats: af
                .iter_attacks()
                .map(|att| AttackDescription {
                    from: att.attacker().label().clone(),
                    to: att.attacked().label().clone(),
                    annotation: att.annotation().map(str::to_string),
                })
                .collect(),
        }
    }
}
