//! Device descriptors — a possibly partial description of a device to check
//! against the catalog.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The parameters supplied with a descriptor.
///
/// Deserializes from `null`, a list of names, or a name → value object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterSet {
    /// No parameters given.
    #[default]
    None,
    /// Parameter names without values.
    Names(BTreeSet<String>),
    /// Parameter names with the values to check against their patterns.
    Values(BTreeMap<String, String>),
}

impl ParameterSet {
    /// Collect parameter names.
    #[must_use]
    pub fn names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Names(names.into_iter().map(Into::into).collect())
    }

    /// Collect name → value pairs.
    #[must_use]
    pub fn values<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Values(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether no parameter is given. An empty set is vacuously valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Names(names) => names.is_empty(),
            Self::Values(values) => values.is_empty(),
        }
    }

    /// Each given name, paired with its value when one was supplied.
    #[must_use]
    pub fn iter(&self) -> Box<dyn Iterator<Item = (&str, Option<&str>)> + '_> {
        match self {
            Self::None => Box::new(std::iter::empty()),
            Self::Names(names) => Box::new(names.iter().map(|n| (n.as_str(), None))),
            Self::Values(values) => {
                Box::new(values.iter().map(|(n, v)| (n.as_str(), Some(v.as_str()))))
            }
        }
    }
}

/// A device as far as the caller has described it.
///
/// Fields fill in as a registration wizard progresses: protocol first, then
/// model, then parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub protocol: Option<String>,
    pub model: Option<String>,
    #[serde(default)]
    pub parameters: ParameterSet,
}

impl DeviceDescriptor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    #[must_use]
    pub fn parameters(mut self, parameters: ParameterSet) -> Self {
        self.parameters = parameters;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_treat_all_empty_forms_as_empty() {
        assert!(ParameterSet::None.is_empty());
        assert!(ParameterSet::names(Vec::<String>::new()).is_empty());
        assert!(ParameterSet::values(Vec::<(String, String)>::new()).is_empty());
        assert!(!ParameterSet::names(["house"]).is_empty());
    }

    #[test]
    fn should_iterate_names_without_values() {
        let set = ParameterSet::names(["unit", "house"]);
        let items: Vec<_> = set.iter().collect();
        assert_eq!(items, vec![("house", None), ("unit", None)]);
    }

    #[test]
    fn should_iterate_names_with_values() {
        let set = ParameterSet::values([("house", "B")]);
        let items: Vec<_> = set.iter().collect();
        assert_eq!(items, vec![("house", Some("B"))]);
    }

    #[test]
    fn should_deserialize_descriptor_with_value_object() {
        let json = r#"{"protocol":"arctech","model":"codeswitch","parameters":{"house":"B","unit":"5"}}"#;
        let descriptor: DeviceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.protocol.as_deref(), Some("arctech"));
        assert_eq!(
            descriptor.parameters,
            ParameterSet::values([("house", "B"), ("unit", "5")])
        );
    }

    #[test]
    fn should_deserialize_descriptor_with_name_list() {
        let json = r#"{"protocol":"arctech","model":"bell","parameters":["house"]}"#;
        let descriptor: DeviceDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(descriptor.parameters, ParameterSet::names(["house"]));
    }

    #[test]
    fn should_deserialize_partial_descriptor() {
        let descriptor: DeviceDescriptor = serde_json::from_str(r#"{"protocol":"x10"}"#).unwrap();
        assert_eq!(descriptor.protocol.as_deref(), Some("x10"));
        assert!(descriptor.model.is_none());
        assert_eq!(descriptor.parameters, ParameterSet::None);
    }

    #[test]
    fn should_build_descriptor_step_by_step() {
        let descriptor = DeviceDescriptor::new()
            .protocol("arctech")
            .model("bell")
            .parameters(ParameterSet::names(["house"]));
        assert_eq!(descriptor.model.as_deref(), Some("bell"));
        assert!(!descriptor.parameters.is_empty());
    }
}
