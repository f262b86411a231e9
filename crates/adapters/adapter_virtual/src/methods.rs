//! Method flags the simulated service reports for each model.

use tellhub_domain::method::{DeviceMethod, DeviceMethods};

/// Methods a device of `model` answers to, as the TellStick service would
/// report them.
pub fn for_model(model: &str) -> DeviceMethods {
    let methods: &[DeviceMethod] = match model {
        "bell" => &[DeviceMethod::Bell],
        "selflearning-dimmer" => &[
            DeviceMethod::TurnOn,
            DeviceMethod::TurnOff,
            DeviceMethod::Dim,
            DeviceMethod::Learn,
        ],
        m if m.starts_with("selflearning") => &[
            DeviceMethod::TurnOn,
            DeviceMethod::TurnOff,
            DeviceMethod::Learn,
        ],
        _ => &[DeviceMethod::TurnOn, DeviceMethod::TurnOff],
    };
    methods.iter().copied().collect()
}
