//! Device — a physical receiver the gateway knows about, and the
//! registration that asks the gateway to add one.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::descriptor::{DeviceDescriptor, ParameterSet};
use crate::error::ValidationError;
use crate::id::DeviceId;
use crate::method::DeviceMethods;

/// UTC timestamp recorded when the gateway accepts a device.
pub type Timestamp = DateTime<Utc>;

/// A device registered with the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub protocol: String,
    pub model: String,
    pub parameters: BTreeMap<String, String>,
    pub supported_methods: DeviceMethods,
    pub registered_at: Timestamp,
}

/// Request to add a device to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRegistration {
    pub name: String,
    pub protocol: String,
    pub model: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

impl DeviceRegistration {
    /// Create a builder for constructing a [`DeviceRegistration`].
    #[must_use]
    pub fn builder() -> DeviceRegistrationBuilder {
        DeviceRegistrationBuilder::default()
    }

    /// Check the invariants that do not need the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyName`], [`ValidationError::MissingProtocol`]
    /// or [`ValidationError::MissingModel`] for the first empty field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if self.protocol.is_empty() {
            return Err(ValidationError::MissingProtocol);
        }
        if self.model.is_empty() {
            return Err(ValidationError::MissingModel);
        }
        Ok(())
    }

    /// The catalog-facing view of this registration.
    #[must_use]
    pub fn descriptor(&self) -> DeviceDescriptor {
        DeviceDescriptor::new()
            .protocol(&self.protocol)
            .model(&self.model)
            .parameters(ParameterSet::Values(self.parameters.clone()))
    }
}

/// Step-by-step builder for [`DeviceRegistration`].
#[derive(Debug, Default)]
pub struct DeviceRegistrationBuilder {
    name: Option<String>,
    protocol: Option<String>,
    model: Option<String>,
    parameters: BTreeMap<String, String>,
}

impl DeviceRegistrationBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
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
    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Consume the builder, validate, and return a [`DeviceRegistration`].
    ///
    /// Only the catalog-independent invariants are checked here.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if `name`, `protocol` or `model` is
    /// missing or empty.
    pub fn build(self) -> Result<DeviceRegistration, ValidationError> {
        let registration = DeviceRegistration {
            name: self.name.unwrap_or_default(),
            protocol: self.protocol.unwrap_or_default(),
            model: self.model.unwrap_or_default(),
            parameters: self.parameters,
        };
        registration.validate()?;
        Ok(registration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_valid_registration_when_fields_provided() {
        let registration = DeviceRegistration::builder()
            .name("Porch light")
            .protocol("arctech")
            .model("codeswitch")
            .parameter("house", "A")
            .parameter("unit", "1")
            .build()
            .unwrap();
        assert_eq!(registration.name, "Porch light");
        assert_eq!(registration.parameters.len(), 2);
    }

    #[test]
    fn should_return_validation_error_when_name_is_empty() {
        let result = DeviceRegistration::builder()
            .protocol("arctech")
            .model("bell")
            .build();
        assert_eq!(result, Err(ValidationError::EmptyName));
    }

    #[test]
    fn should_return_validation_error_when_protocol_is_missing() {
        let result = DeviceRegistration::builder().name("Bell").model("bell").build();
        assert_eq!(result, Err(ValidationError::MissingProtocol));
    }

    #[test]
    fn should_return_validation_error_when_model_is_missing() {
        let result = DeviceRegistration::builder().name("Bell").protocol("arctech").build();
        assert_eq!(result, Err(ValidationError::MissingModel));
    }

    #[test]
    fn should_keep_last_value_for_repeated_parameter() {
        let registration = DeviceRegistration::builder()
            .name("Bell")
            .protocol("arctech")
            .model("bell")
            .parameter("house", "A")
            .parameter("house", "B")
            .build()
            .unwrap();
        assert_eq!(registration.parameters["house"], "B");
    }

    #[test]
    fn should_expose_parameters_as_values_in_descriptor() {
        let registration = DeviceRegistration::builder()
            .name("Bell")
            .protocol("arctech")
            .model("bell")
            .parameter("house", "C")
            .build()
            .unwrap();
        let descriptor = registration.descriptor();
        assert_eq!(descriptor.protocol.as_deref(), Some("arctech"));
        assert_eq!(descriptor.model.as_deref(), Some("bell"));
        assert_eq!(descriptor.parameters, ParameterSet::values([("house", "C")]));
    }

    #[test]
    fn should_default_parameters_when_deserializing() {
        let json = r#"{"name":"Bell","protocol":"arctech","model":"bell"}"#;
        let registration: DeviceRegistration = serde_json::from_str(json).unwrap();
        assert!(registration.parameters.is_empty());
    }
}
