//! Gateway port — the hardware layer that actually stores and drives devices.
//!
//! Implementations wrap the native TellStick library (or simulate it). The
//! application only calls [`add_device`](DeviceGateway::add_device) with
//! registrations the catalog has already accepted.

use std::future::Future;

use tellhub_domain::device::{Device, DeviceRegistration};
use tellhub_domain::error::GatewayError;
use tellhub_domain::id::DeviceId;

/// Device management on the TellStick service.
pub trait DeviceGateway: Send + Sync {
    /// Add a device and return the identifier the service assigned.
    fn add_device(
        &self,
        registration: &DeviceRegistration,
    ) -> impl Future<Output = Result<DeviceId, GatewayError>> + Send;

    /// Remove a device.
    fn remove_device(&self, id: DeviceId) -> impl Future<Output = Result<(), GatewayError>> + Send;

    /// Fetch a device, or `None` when the service does not know the id.
    fn get_device(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GatewayError>> + Send;

    /// Every device known to the service.
    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, GatewayError>> + Send;
}

impl<T: DeviceGateway> DeviceGateway for std::sync::Arc<T> {
    fn add_device(
        &self,
        registration: &DeviceRegistration,
    ) -> impl Future<Output = Result<DeviceId, GatewayError>> + Send {
        (**self).add_device(registration)
    }

    fn remove_device(&self, id: DeviceId) -> impl Future<Output = Result<(), GatewayError>> + Send {
        (**self).remove_device(id)
    }

    fn get_device(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, GatewayError>> + Send {
        (**self).get_device(id)
    }

    fn list_devices(&self) -> impl Future<Output = Result<Vec<Device>, GatewayError>> + Send {
        (**self).list_devices()
    }
}
