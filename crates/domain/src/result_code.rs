//! Result codes reported by the TellStick service.

use serde::{Deserialize, Serialize};

/// Status of a gateway call, mirroring the codes the native library returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    Success,
    NotFound,
    PermissionDenied,
    DeviceNotFound,
    MethodNotSupported,
    CommunicationError,
    ErrorConnectingService,
    UnknownResponse,
    SyntaxError,
    BrokenPipe,
    ErrorCommunicatingService,
    ConfigSyntaxError,
    UnknownError,
}

impl ResultCode {
    /// Decode a raw status. Codes the library does not define map to
    /// [`UnknownError`](Self::UnknownError).
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Success,
            -1 => Self::NotFound,
            -2 => Self::PermissionDenied,
            -3 => Self::DeviceNotFound,
            -4 => Self::MethodNotSupported,
            -5 => Self::CommunicationError,
            -6 => Self::ErrorConnectingService,
            -7 => Self::UnknownResponse,
            -8 => Self::SyntaxError,
            -9 => Self::BrokenPipe,
            -10 => Self::ErrorCommunicatingService,
            -11 => Self::ConfigSyntaxError,
            _ => Self::UnknownError,
        }
    }

    /// The raw status as the native library reports it.
    #[must_use]
    pub fn as_raw(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::NotFound => -1,
            Self::PermissionDenied => -2,
            Self::DeviceNotFound => -3,
            Self::MethodNotSupported => -4,
            Self::CommunicationError => -5,
            Self::ErrorConnectingService => -6,
            Self::UnknownResponse => -7,
            Self::SyntaxError => -8,
            Self::BrokenPipe => -9,
            Self::ErrorCommunicatingService => -10,
            Self::ConfigSyntaxError => -11,
            Self::UnknownError => -99,
        }
    }

    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Success => "success",
            Self::NotFound => "TellStick not found",
            Self::PermissionDenied => "permission denied",
            Self::DeviceNotFound => "device not found",
            Self::MethodNotSupported => "method not supported by the device",
            Self::CommunicationError => "error while communicating with TellStick",
            Self::ErrorConnectingService => "could not connect to the Telldus service",
            Self::UnknownResponse => "unknown response",
            Self::SyntaxError => "syntax error",
            Self::BrokenPipe => "broken pipe",
            Self::ErrorCommunicatingService => "error while communicating with the Telldus service",
            Self::ConfigSyntaxError => "syntax error in the configuration file",
            Self::UnknownError => "unknown error",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_every_known_code_back_to_itself() {
        let codes = [
            ResultCode::Success,
            ResultCode::NotFound,
            ResultCode::PermissionDenied,
            ResultCode::DeviceNotFound,
            ResultCode::MethodNotSupported,
            ResultCode::CommunicationError,
            ResultCode::ErrorConnectingService,
            ResultCode::UnknownResponse,
            ResultCode::SyntaxError,
            ResultCode::BrokenPipe,
            ResultCode::ErrorCommunicatingService,
            ResultCode::ConfigSyntaxError,
            ResultCode::UnknownError,
        ];
        for code in codes {
            assert_eq!(ResultCode::from_raw(code.as_raw()), code);
        }
    }

    #[test]
    fn should_map_undefined_codes_to_unknown_error() {
        assert_eq!(ResultCode::from_raw(-42), ResultCode::UnknownError);
        assert_eq!(ResultCode::from_raw(17), ResultCode::UnknownError);
    }

    #[test]
    fn should_report_success_only_for_zero() {
        assert!(ResultCode::from_raw(0).is_success());
        assert!(!ResultCode::DeviceNotFound.is_success());
    }

    #[test]
    fn should_display_human_readable_text() {
        assert_eq!(ResultCode::DeviceNotFound.to_string(), "device not found");
    }

    #[test]
    fn should_serialize_as_snake_case() {
        let json = serde_json::to_string(&ResultCode::BrokenPipe).unwrap();
        assert_eq!(json, "\"broken_pipe\"");
    }
}
