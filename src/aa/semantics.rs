use anyhow::{anyhow, Result};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The semantics the engine can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SemanticsKind {
    /// The grounded semantics
    Grounded,
    /// The complete semantics
    Complete,
    /// The preferred semantics
    Preferred,
    /// The stable semantics
    Stable,
}

impl SemanticsKind {
    /// Returns the two letters name of the semantics, as used in ICCMA competitions.
    pub fn to_short_str(&self) -> &str {
        match self {
            SemanticsKind::Grounded => "GR",
            SemanticsKind::Complete => "CO",
            SemanticsKind::Preferred => "PR",
            SemanticsKind::Stable => "ST",
        }
    }

    /// Iterates over the (long) names of the available semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use argprov::aa::SemanticsKind;
    /// let names = SemanticsKind::iter_names().collect::<Vec<String>>();
    /// assert_eq!(vec!["grounded", "complete", "preferred", "stable"], names);
    /// ```
    pub fn iter_names() -> impl Iterator<Item = String> {
        SemanticsKind::iter().map(|s| s.as_ref().to_string())
    }
}

impl TryFrom<&str> for SemanticsKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lowercase = value.to_ascii_lowercase();
        SemanticsKind::iter()
            .find(|s| s.as_ref() == lowercase || s.to_short_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| anyhow!(r#"undefined semantics "{}""#, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_semantics_ok() {
        assert_eq!(
            SemanticsKind::Stable,
            SemanticsKind::try_from("stable").unwrap()
        );
        assert_eq!(
            SemanticsKind::Preferred,
            SemanticsKind::try_from("PREFERRED").unwrap()
        );
        assert_eq!(SemanticsKind::Grounded, SemanticsKind::try_from("gr").unwrap());
        assert_eq!(SemanticsKind::Complete, SemanticsKind::try_from("CO").unwrap());
    }

    #[test]
    fn test_read_semantics_unknown() {
        assert!(SemanticsKind::try_from("semi-stable").is_err());
        assert!(SemanticsKind::try_from("").is_err());
    }

    #[test]
    fn test_names() {
        for s in SemanticsKind::iter() {
            assert_eq!(s, SemanticsKind::try_from(s.as_ref()).unwrap());
            assert_eq!(s, SemanticsKind::try_from(s.to_short_str()).unwrap());
        }
    }
}
