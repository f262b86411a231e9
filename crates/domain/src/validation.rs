//! Validator — checks device descriptors against a [`Catalog`].
//!
//! The queries escalate in specificity (protocol, then model, then
//! parameters) so a caller filling in a descriptor step by step gets an
//! answer at every stage. Predicates never fail: unknown names yield `false`
//! and an empty parameter set is vacuously valid. [`Validator::check`]
//! reports *why* a full descriptor is rejected.

use crate::catalog::{Catalog, Model, ValueMatch};
use crate::descriptor::{DeviceDescriptor, ParameterSet};
use crate::error::ValidationError;

/// Read-only view over a catalog that answers validity queries.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'a> {
    catalog: &'a Catalog,
    value_match: ValueMatch,
}

impl<'a> Validator<'a> {
    /// Validator over `catalog` with the default [`ValueMatch`].
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            value_match: ValueMatch::default(),
        }
    }

    /// Select how parameter values are matched against their patterns.
    #[must_use]
    pub fn with_value_match(mut self, value_match: ValueMatch) -> Self {
        self.value_match = value_match;
        self
    }

    #[must_use]
    pub fn value_match(&self) -> ValueMatch {
        self.value_match
    }

    #[must_use]
    pub fn is_valid_protocol(&self, protocol: &str) -> bool {
        self.catalog.protocol(protocol).is_some()
    }

    #[must_use]
    pub fn is_valid_model(&self, protocol: &str, model: &str) -> bool {
        self.catalog.model(protocol, model).is_some()
    }

    #[must_use]
    pub fn is_valid_parameter(&self, protocol: &str, model: &str, parameter: &str) -> bool {
        self.catalog
            .model(protocol, model)
            .is_some_and(|m| m.parameter(parameter).is_some())
    }

    /// Whether every given parameter exists on the model and, when values are
    /// given, every value satisfies its parameter's pattern.
    ///
    /// An empty set is valid even when `protocol`/`model` are unknown.
    #[must_use]
    pub fn is_valid_parameters(&self, protocol: &str, model: &str, parameters: &ParameterSet) -> bool {
        if parameters.is_empty() {
            return true;
        }
        self.catalog
            .model(protocol, model)
            .is_some_and(|m| self.check_parameters(protocol, m, parameters).is_ok())
    }

    /// Descriptor form of [`is_valid_protocol`](Self::is_valid_protocol);
    /// a missing protocol is invalid.
    #[must_use]
    pub fn is_valid_descriptor_protocol(&self, descriptor: &DeviceDescriptor) -> bool {
        descriptor
            .protocol
            .as_deref()
            .is_some_and(|p| self.is_valid_protocol(p))
    }

    /// Descriptor form of [`is_valid_model`](Self::is_valid_model);
    /// a missing protocol or model is invalid.
    #[must_use]
    pub fn is_valid_descriptor_model(&self, descriptor: &DeviceDescriptor) -> bool {
        match (descriptor.protocol.as_deref(), descriptor.model.as_deref()) {
            (Some(protocol), Some(model)) => self.is_valid_model(protocol, model),
            _ => false,
        }
    }

    /// Whether the whole descriptor is acceptable.
    #[must_use]
    pub fn is_valid(&self, descriptor: &DeviceDescriptor) -> bool {
        self.check(descriptor).is_ok()
    }

    /// Check a complete descriptor, stopping at the first problem.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] describing the first missing or
    /// unknown name, or the first value that fails its pattern.
    pub fn check(&self, descriptor: &DeviceDescriptor) -> Result<(), ValidationError> {
        let protocol_name = descriptor
            .protocol
            .as_deref()
            .ok_or(ValidationError::MissingProtocol)?;
        let protocol = self
            .catalog
            .protocol(protocol_name)
            .ok_or_else(|| ValidationError::UnknownProtocol(protocol_name.to_string()))?;
        let model_name = descriptor
            .model
            .as_deref()
            .ok_or(ValidationError::MissingModel)?;
        let model = protocol
            .model(model_name)
            .ok_or_else(|| ValidationError::UnknownModel {
                protocol: protocol_name.to_string(),
                model: model_name.to_string(),
            })?;
        self.check_parameters(protocol_name, model, &descriptor.parameters)
    }

    fn check_parameters(
        &self,
        protocol: &str,
        model: &Model,
        parameters: &ParameterSet,
    ) -> Result<(), ValidationError> {
        for (name, value) in parameters.iter() {
            let parameter = model
                .parameter(name)
                .ok_or_else(|| ValidationError::UnknownParameter {
                    protocol: protocol.to_string(),
                    model: model.name().to_string(),
                    parameter: name.to_string(),
                })?;
            let (Some(value), Some(pattern)) = (value, parameter.pattern()) else {
                continue;
            };
            if !pattern.matches(value, self.value_match) {
                return Err(ValidationError::InvalidValue {
                    parameter: name.to_string(),
                    value: value.to_string(),
                    pattern: pattern.as_str().to_string(),
                });
            }
        }
        Ok(())
    }
}
