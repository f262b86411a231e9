//! Registration service — the device-registration workflow.
//!
//! A registration is checked against the catalog before the gateway sees it,
//! so the hardware layer only ever receives known protocol/model/parameter
//! combinations.

use std::sync::Arc;

use tellhub_domain::catalog::{Catalog, ValueMatch};
use tellhub_domain::device::{Device, DeviceRegistration};
use tellhub_domain::error::{NotFoundError, TellhubError};
use tellhub_domain::id::DeviceId;
use tellhub_domain::validation::Validator;

use crate::ports::DeviceGateway;

/// Application service for adding and removing devices.
pub struct RegistrationService<G> {
    catalog: Arc<Catalog>,
    gateway: G,
    value_match: ValueMatch,
}

impl<G: DeviceGateway> RegistrationService<G> {
    /// Create a new service over a shared catalog and a gateway.
    pub fn new(catalog: Arc<Catalog>, gateway: G) -> Self {
        Self {
            catalog,
            gateway,
            value_match: ValueMatch::default(),
        }
    }

    /// Select how parameter values are matched against catalog patterns.
    #[must_use]
    pub fn with_value_match(mut self, value_match: ValueMatch) -> Self {
        self.value_match = value_match;
        self
    }

    /// The catalog registrations are checked against.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validator configured the way this service checks registrations.
    #[must_use]
    pub fn validator(&self) -> Validator<'_> {
        self.catalog.validator().with_value_match(self.value_match)
    }

    /// Validate a registration against the catalog, add it to the gateway and
    /// return the device as the gateway reports it.
    ///
    /// # Errors
    ///
    /// Returns [`TellhubError::Validation`] if the registration is incomplete
    /// or rejected by the catalog (the gateway is not called),
    /// [`TellhubError::Gateway`] if the gateway refuses it, or
    /// [`TellhubError::NotFound`] if the gateway loses the new device.
    #[tracing::instrument(
        skip(self, registration),
        fields(
            device_name = %registration.name,
            protocol = %registration.protocol,
            model = %registration.model,
        )
    )]
    pub async fn register_device(
        &self,
        registration: DeviceRegistration,
    ) -> Result<Device, TellhubError> {
        registration.validate()?;
        if let Err(err) = self.validator().check(&registration.descriptor()) {
            tracing::debug!(error = %err, "registration rejected by catalog");
            return Err(err.into());
        }
        let id = self.gateway.add_device(&registration).await.inspect_err(|err| {
            tracing::warn!(error = %err, "gateway refused registration");
        })?;
        tracing::info!(device_id = %id, "device registered");
        self.get_device(id).await
    }

    /// Look up a device by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`TellhubError::NotFound`] when the gateway does not know `id`,
    /// or a gateway error.
    #[tracing::instrument(skip(self))]
    pub async fn get_device(&self, id: DeviceId) -> Result<Device, TellhubError> {
        self.gateway.get_device(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Device",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all devices known to the gateway.
    ///
    /// # Errors
    ///
    /// Returns a gateway error.
    pub async fn list_devices(&self) -> Result<Vec<Device>, TellhubError> {
        Ok(self.gateway.list_devices().await?)
    }

    /// Remove a device from the gateway.
    ///
    /// # Errors
    ///
    /// Returns a gateway error, e.g. when the device does not exist.
    #[tracing::instrument(skip(self))]
    pub async fn remove_device(&self, id: DeviceId) -> Result<(), TellhubError> {
        self.gateway.remove_device(id).await?;
        tracing::info!("device removed");
        Ok(())
    }
}
