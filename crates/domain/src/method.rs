//! Device methods — the commands a device understands.

use serde::{Deserialize, Serialize};

/// A single command a device may support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceMethod {
    TurnOn,
    TurnOff,
    Bell,
    Toggle,
    Dim,
    Learn,
    Execute,
    Up,
    Down,
    Stop,
}

impl DeviceMethod {
    pub const ALL: [Self; 10] = [
        Self::TurnOn,
        Self::TurnOff,
        Self::Bell,
        Self::Toggle,
        Self::Dim,
        Self::Learn,
        Self::Execute,
        Self::Up,
        Self::Down,
        Self::Stop,
    ];

    /// The flag bit the native library uses for this method.
    #[must_use]
    pub fn bit(self) -> u32 {
        match self {
            Self::TurnOn => 1,
            Self::TurnOff => 2,
            Self::Bell => 4,
            Self::Toggle => 8,
            Self::Dim => 16,
            Self::Learn => 32,
            Self::Execute => 64,
            Self::Up => 128,
            Self::Down => 256,
            Self::Stop => 512,
        }
    }
}

impl std::fmt::Display for DeviceMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::TurnOn => "turn_on",
            Self::TurnOff => "turn_off",
            Self::Bell => "bell",
            Self::Toggle => "toggle",
            Self::Dim => "dim",
            Self::Learn => "learn",
            Self::Execute => "execute",
            Self::Up => "up",
            Self::Down => "down",
            Self::Stop => "stop",
        };
        f.write_str(name)
    }
}

/// Set of [`DeviceMethod`]s, stored as the native flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceMethods(u32);

impl DeviceMethods {
    #[must_use]
    pub fn empty() -> Self {
        Self(0)
    }

    /// Decode a native flag word. Unknown bits are dropped.
    #[must_use]
    pub fn from_bits(bits: u32) -> Self {
        let known = DeviceMethod::ALL.iter().fold(0, |acc, m| acc | m.bit());
        Self(bits & known)
    }

    #[must_use]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn with(self, method: DeviceMethod) -> Self {
        Self(self.0 | method.bit())
    }

    #[must_use]
    pub fn contains(self, method: DeviceMethod) -> bool {
        self.0 & method.bit() != 0
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Methods in the set, in flag order.
    pub fn iter(self) -> impl Iterator<Item = DeviceMethod> {
        DeviceMethod::ALL.into_iter().filter(move |m| self.contains(*m))
    }
}

impl FromIterator<DeviceMethod> for DeviceMethods {
    fn from_iter<I: IntoIterator<Item = DeviceMethod>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}
