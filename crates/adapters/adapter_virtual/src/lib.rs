//! # tellhub-adapter-virtual
//!
//! Virtual gateway that simulates a TellStick service in memory, for testing
//! and demonstration purposes.
//!
//! ## Behaviour
//!
//! | Call | Result |
//! |------|--------|
//! | `add_device` | Assigns the next id (starting at 1) and stores the device |
//! | `remove_device` | Drops the device, or fails with `DeviceNotFound` |
//! | `get_device` / `list_devices` | Reads the stored devices |
//!
//! An [`offline`](VirtualGateway::offline) gateway answers every call with
//! `ErrorConnectingService`, like a native library whose service is down.
//!
//! ## Dependency rule
//!
//! Depends on `tellhub-app` (port traits) and `tellhub-domain` only.

mod methods;

use std::collections::BTreeMap;

use tellhub_app::ports::DeviceGateway;
use tellhub_domain::device::{Device, DeviceRegistration};
use tellhub_domain::error::GatewayError;
use tellhub_domain::id::DeviceId;
use tellhub_domain::result_code::ResultCode;
use tokio::sync::Mutex;

/// In-memory stand-in for the TellStick service.
pub struct VirtualGateway {
    online: bool,
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    devices: BTreeMap<DeviceId, Device>,
    last_id: i32,
}

impl Default for VirtualGateway {
    fn default() -> Self {
        Self {
            online: true,
            state: Mutex::new(State::default()),
        }
    }
}

impl VirtualGateway {
    /// A gateway whose service cannot be reached.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            online: false,
            ..Self::default()
        }
    }

    fn ensure_online(&self) -> Result<(), GatewayError> {
        if self.online {
            Ok(())
        } else {
            Err(ResultCode::ErrorConnectingService.into())
        }
    }
}

impl DeviceGateway for VirtualGateway {
    async fn add_device(
        &self,
        registration: &DeviceRegistration,
    ) -> Result<DeviceId, GatewayError> {
        self.ensure_online()?;
        let mut state = self.state.lock().await;
        let raw = state
            .last_id
            .checked_add(1)
            .unwrap_or(ResultCode::UnknownError.as_raw());
        let id = DeviceId::from_raw(raw).map_err(GatewayError::from)?;
        state.last_id = raw;
        state.devices.insert(
            id,
            Device {
                id,
                name: registration.name.clone(),
                protocol: registration.protocol.clone(),
                model: registration.model.clone(),
                parameters: registration.parameters.clone(),
                supported_methods: methods::for_model(&registration.model),
                registered_at: chrono::Utc::now(),
            },
        );
        tracing::debug!(device_id = %id, "virtual device added");
        Ok(id)
    }

    async fn remove_device(&self, id: DeviceId) -> Result<(), GatewayError> {
        self.ensure_online()?;
        let mut state = self.state.lock().await;
        match state.devices.remove(&id) {
            Some(_) => Ok(()),
            None => Err(ResultCode::DeviceNotFound.into()),
        }
    }

    async fn get_device(&self, id: DeviceId) -> Result<Option<Device>, GatewayError> {
        self.ensure_online()?;
        Ok(self.state.lock().await.devices.get(&id).cloned())
    }

    async fn list_devices(&self) -> Result<Vec<Device>, GatewayError> {
        self.ensure_online()?;
        Ok(self.state.lock().await.devices.values().cloned().collect())
    }
}
