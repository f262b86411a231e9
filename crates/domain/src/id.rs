//! Gateway-assigned device identifiers.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::result_code::ResultCode;

/// Identifier the gateway assigns to a device. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(NonZeroU32);

impl DeviceId {
    /// Wrap a known-positive identifier.
    #[must_use]
    pub fn new(id: NonZeroU32) -> Self {
        Self(id)
    }

    /// Decode the raw return value of the native "add device" call.
    ///
    /// Positive values are identifiers; anything else is a status code.
    ///
    /// # Errors
    ///
    /// Returns the decoded [`ResultCode`] when `raw` is zero or negative.
    pub fn from_raw(raw: i32) -> Result<Self, ResultCode> {
        u32::try_from(raw)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Self)
            .ok_or_else(|| match ResultCode::from_raw(raw) {
                ResultCode::Success => ResultCode::UnknownError,
                code => code,
            })
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DeviceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<NonZeroU32>().map(Self)
    }
}
