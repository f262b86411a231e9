//! Validation patterns attached to catalog parameters.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};

/// How a parameter value is tested against its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueMatch {
    /// The pattern may occur anywhere in the value.
    ///
    /// With this mode `"150"` satisfies `[2-9]|1[0-6]?` because `"1"` is
    /// found at the start.
    #[default]
    Substring,
    /// The pattern must cover the whole value.
    WholeValue,
}

impl fmt::Display for ValueMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => f.write_str("substring"),
            Self::WholeValue => f.write_str("whole_value"),
        }
    }
}

/// Error returned when parsing an unknown [`ValueMatch`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value match mode {0:?} (expected \"substring\" or \"whole_value\")")]
pub struct UnknownValueMatch(pub String);

impl FromStr for ValueMatch {
    type Err = UnknownValueMatch;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "substring" => Ok(Self::Substring),
            "whole_value" => Ok(Self::WholeValue),
            other => Err(UnknownValueMatch(other.to_string())),
        }
    }
}

/// A compiled regular expression constraining a parameter's value.
///
/// Both the unanchored and the anchored form are compiled up front so a
/// bad pattern surfaces once, when the catalog is built.
#[derive(Debug, Clone)]
pub struct ValidationPattern {
    search: Regex,
    whole: Regex,
}

impl ValidationPattern {
    /// Compile `source`.
    ///
    /// # Errors
    ///
    /// Returns the [`regex::Error`] when `source` is not a valid expression.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let search = Regex::new(source)?;
        let whole = Regex::new(&format!(r"\A(?:{source})\z"))?;
        Ok(Self { search, whole })
    }

    /// The expression as written in the catalog.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.search.as_str()
    }

    #[must_use]
    pub fn matches(&self, value: &str, mode: ValueMatch) -> bool {
        match mode {
            ValueMatch::Substring => self.search.is_match(value),
            ValueMatch::WholeValue => self.whole.is_match(value),
        }
    }
}

impl PartialEq for ValidationPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for ValidationPattern {}

impl fmt::Display for ValidationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ValidationPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
