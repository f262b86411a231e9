//! Step-by-step builders for [`Catalog`].
//!
//! Builders only record definitions. Names and patterns are checked in one
//! place, [`CatalogBuilder::build`], so a broken definition fails as a whole.

use std::collections::HashSet;

use crate::error::CatalogError;

use super::{Catalog, Model, Parameter, Protocol, ValidationPattern};

/// Collects protocol definitions in registration order.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    protocols: Vec<ProtocolBuilder>,
}

/// Collects the models of one protocol.
#[derive(Debug)]
pub struct ProtocolBuilder {
    name: String,
    models: Vec<ModelBuilder>,
}

/// Collects the parameters of one model.
#[derive(Debug)]
pub struct ModelBuilder {
    name: String,
    parameters: Vec<(String, Option<String>)>,
}

impl CatalogBuilder {
    /// Register a protocol; `configure` appends its models.
    #[must_use]
    pub fn protocol(
        mut self,
        name: impl Into<String>,
        configure: impl FnOnce(ProtocolBuilder) -> ProtocolBuilder,
    ) -> Self {
        let protocol = ProtocolBuilder {
            name: name.into(),
            models: Vec::new(),
        };
        self.protocols.push(configure(protocol));
        self
    }

    /// Check every definition, compile every pattern and freeze the catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when a name is empty, a name is repeated
    /// within its scope, or a pattern does not compile.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut seen = HashSet::new();
        let mut protocols = Vec::with_capacity(self.protocols.len());
        for protocol in self.protocols {
            if protocol.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(protocol.name.clone()) {
                return Err(CatalogError::DuplicateProtocol(protocol.name));
            }
            protocols.push(protocol.build()?);
        }
        Ok(Catalog { protocols })
    }
}

impl ProtocolBuilder {
    /// Append a model; `configure` appends its parameters.
    #[must_use]
    pub fn model(
        mut self,
        name: impl Into<String>,
        configure: impl FnOnce(ModelBuilder) -> ModelBuilder,
    ) -> Self {
        let model = ModelBuilder {
            name: name.into(),
            parameters: Vec::new(),
        };
        self.models.push(configure(model));
        self
    }

    fn build(self) -> Result<Protocol, CatalogError> {
        let mut seen = HashSet::new();
        let mut models = Vec::with_capacity(self.models.len());
        for model in self.models {
            if model.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(model.name.clone()) {
                return Err(CatalogError::DuplicateModel {
                    protocol: self.name,
                    model: model.name,
                });
            }
            models.push(model.build(&self.name)?);
        }
        Ok(Protocol {
            name: self.name,
            models,
        })
    }
}

impl ModelBuilder {
    /// Append a parameter that accepts any value.
    #[must_use]
    pub fn parameter(mut self, name: impl Into<String>) -> Self {
        self.parameters.push((name.into(), None));
        self
    }

    /// Append a parameter whose value must match `pattern`.
    #[must_use]
    pub fn parameter_matching(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.parameters.push((name.into(), Some(pattern.into())));
        self
    }

    fn build(self, protocol: &str) -> Result<Model, CatalogError> {
        let mut seen = HashSet::new();
        let mut parameters = Vec::with_capacity(self.parameters.len());
        for (name, source) in self.parameters {
            if name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if !seen.insert(name.clone()) {
                return Err(CatalogError::DuplicateParameter {
                    protocol: protocol.to_string(),
                    model: self.name,
                    parameter: name,
                });
            }
            let pattern = match source {
                Some(source) => match ValidationPattern::new(&source) {
                    Ok(pattern) => Some(pattern),
                    Err(source) => {
                        return Err(CatalogError::InvalidPattern {
                            protocol: protocol.to_string(),
                            model: self.name,
                            parameter: name,
                            source,
                        });
                    }
                },
                None => None,
            };
            parameters.push(Parameter { name, pattern });
        }
        Ok(Model {
            name: self.name,
            parameters,
        })
    }
}
