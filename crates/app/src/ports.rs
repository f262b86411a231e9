//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. The only outbound boundary is the TellStick service itself.

pub mod gateway;

pub use gateway::DeviceGateway;
