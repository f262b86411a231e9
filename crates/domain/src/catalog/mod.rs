//! Catalog — the static protocol → model → parameter schema.
//!
//! A [`Catalog`] is assembled once through [`Catalog::builder`] and never
//! changes afterwards. Every lookup preserves registration order and compares
//! names exactly (case-sensitive, no trimming).

mod builder;
mod pattern;
mod telldus;

pub use builder::{CatalogBuilder, ModelBuilder, ProtocolBuilder};
pub use pattern::{UnknownValueMatch, ValidationPattern, ValueMatch};
pub use telldus::telldus;

use std::collections::HashSet;

use serde::Serialize;

use crate::validation::Validator;

/// Immutable set of supported protocols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    protocols: Vec<Protocol>,
}

/// A device communication family (e.g. `arctech`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Protocol {
    name: String,
    models: Vec<Model>,
}

/// A device variant within one protocol (e.g. `codeswitch`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    name: String,
    parameters: Vec<Parameter>,
}

/// A configuration field of a model, optionally constrained by a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    name: String,
    pattern: Option<ValidationPattern>,
}

impl Catalog {
    /// Start describing a catalog.
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Validator over this catalog using the default [`ValueMatch`].
    #[must_use]
    pub fn validator(&self) -> Validator<'_> {
        Validator::new(self)
    }

    /// Every protocol in registration order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Protocol> {
        self.protocols.iter()
    }

    /// Find a protocol by exact name.
    #[must_use]
    pub fn protocol(&self, name: &str) -> Option<&Protocol> {
        self.protocols.iter().find(|p| p.name == name)
    }

    /// Find a model by exact protocol and model name.
    #[must_use]
    pub fn model(&self, protocol: &str, model: &str) -> Option<&Model> {
        self.protocol(protocol)?.model(model)
    }

    /// Names of all protocols, in registration order.
    #[must_use]
    pub fn protocols(&self) -> Vec<&str> {
        self.protocols.iter().map(Protocol::name).collect()
    }

    /// Names of all models across every protocol, without duplicates, in
    /// first-seen order.
    #[must_use]
    pub fn all_models(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.protocols
            .iter()
            .flat_map(|p| p.models.iter().map(Model::name))
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Model names under `protocol`; empty when the protocol is unknown.
    #[must_use]
    pub fn models_for(&self, protocol: &str) -> Vec<&str> {
        self.protocol(protocol)
            .map(|p| p.models.iter().map(Model::name).collect())
            .unwrap_or_default()
    }

    /// Parameter names of `protocol`/`model`; empty when either is unknown.
    #[must_use]
    pub fn parameters_for(&self, protocol: &str, model: &str) -> Vec<&str> {
        self.model(protocol, model)
            .map(|m| m.parameters.iter().map(Parameter::name).collect())
            .unwrap_or_default()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Protocol;
    type IntoIter = std::slice::Iter<'a, Protocol>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Protocol {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    #[must_use]
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }
}

impl Model {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }
}

impl Parameter {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The constraint on this parameter's value, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&ValidationPattern> {
        self.pattern.as_ref()
    }

    /// Whether `value` is acceptable. Unconstrained parameters accept anything.
    #[must_use]
    pub fn accepts(&self, value: &str, mode: ValueMatch) -> bool {
        self.pattern
            .as_ref()
            .is_none_or(|pattern| pattern.matches(value, mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::builder()
            .protocol("alpha", |p| {
                p.model("switch", |m| m.parameter_matching("house", "[A-P]").parameter("unit"))
                    .model("bell", |m| m.parameter("house"))
            })
            .protocol("beta", |p| {
                p.model("switch", |m| m.parameter("code"))
                    .model("dimmer", |m| m)
            })
            .build()
            .unwrap()
    }

    #[test]
    fn should_list_protocols_in_registration_order() {
        assert_eq!(sample().protocols(), vec!["alpha", "beta"]);
    }

    #[test]
    fn should_list_models_in_registration_order() {
        assert_eq!(sample().models_for("alpha"), vec!["switch", "bell"]);
    }

    #[test]
    fn should_deduplicate_models_shared_between_protocols() {
        assert_eq!(sample().all_models(), vec!["switch", "bell", "dimmer"]);
    }

    #[test]
    fn should_return_empty_models_when_protocol_unknown() {
        assert!(sample().models_for("gamma").is_empty());
    }

    #[test]
    fn should_compare_protocol_names_case_sensitively() {
        let catalog = sample();
        assert!(catalog.models_for("ALPHA").is_empty());
        assert!(catalog.protocol("Alpha").is_none());
    }

    #[test]
    fn should_not_trim_names() {
        assert!(sample().models_for(" alpha").is_empty());
    }

    #[test]
    fn should_list_parameters_in_registration_order() {
        assert_eq!(
            sample().parameters_for("alpha", "switch"),
            vec!["house", "unit"]
        );
    }

    #[test]
    fn should_scope_parameters_to_their_protocol() {
        assert_eq!(sample().parameters_for("beta", "switch"), vec!["code"]);
    }

    #[test]
    fn should_return_empty_parameters_when_model_unknown() {
        let catalog = sample();
        assert!(catalog.parameters_for("alpha", "dimmer").is_empty());
        assert!(catalog.parameters_for("gamma", "switch").is_empty());
    }

    #[test]
    fn should_return_empty_parameters_for_model_without_parameters() {
        assert!(sample().parameters_for("beta", "dimmer").is_empty());
    }

    #[test]
    fn should_expose_parameter_pattern() {
        let catalog = sample();
        let model = catalog.model("alpha", "switch").unwrap();
        assert_eq!(
            model.parameter("house").and_then(Parameter::pattern).map(ValidationPattern::as_str),
            Some("[A-P]")
        );
        assert!(model.parameter("unit").unwrap().pattern().is_none());
    }

    #[test]
    fn should_accept_any_value_for_unconstrained_parameter() {
        let catalog = sample();
        let unit = catalog.model("alpha", "switch").unwrap().parameter("unit").unwrap();
        assert!(unit.accepts("anything at all", ValueMatch::WholeValue));
    }

    #[test]
    fn should_iterate_protocols() {
        let catalog = sample();
        let names: Vec<&str> = (&catalog).into_iter().map(Protocol::name).collect();
        assert_eq!(names, catalog.protocols());
    }

    #[test]
    fn should_serialize_tree_with_pattern_sources() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["protocols"][0]["name"], "alpha");
        assert_eq!(
            json["protocols"][0]["models"][0]["parameters"][0]["pattern"],
            "[A-P]"
        );
        assert!(json["protocols"][0]["models"][0]["parameters"][1]["pattern"].is_null());
    }

    #[test]
    fn should_be_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
