//! Value objects shared across aggregates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An ORCID iD identifying an author.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Orcid(String);

impl Orcid {
    /// Wraps an ORCID iD such as `0000-0002-1825-0097`.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the iD as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Orcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A Digital Object Identifier, e.g. `10.5281/zenodo.1061864`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Doi(String);

impl Doi {
    /// Wraps a DOI.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the DOI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How an author appears on published work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    /// Under their public name.
    Public,
    /// Under their PREreview pseudonym.
    Pseudonym,
}

/// An author's competing-interests declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompetingInterests {
    /// The author declared no competing interests.
    None,
    /// The author described their competing interests.
    Declared(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_serialize_as_plain_strings() {
        let value = serde_json::to_value((
            Orcid::new("0000-0002-1825-0097"),
            Doi::new("10.5281/zenodo.1061864"),
        ))
        .unwrap();

        assert_eq!(
            value,
            serde_json::json!(["0000-0002-1825-0097", "10.5281/zenodo.1061864"])
        );
    }

    #[test]
    fn test_persona_uses_snake_case_tags() {
        assert_eq!(
            serde_json::to_value(Persona::Pseudonym).unwrap(),
            serde_json::json!("pseudonym")
        );
    }
}
