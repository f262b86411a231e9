//! # tellhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Build the device catalog once, at startup ([`catalog::init`])
//! - Define the **port trait** the hardware adapter implements:
//!   - `DeviceGateway` — add, remove, get and list devices on the TellStick service
//! - Define the **driving/inbound** use-case:
//!   - `RegistrationService` — validate a registration, then hand it to the gateway
//! - Load optional configuration ([`config::Config`])
//!
//! ## Dependency rule
//! Depends on `tellhub-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod catalog;
pub mod config;
pub mod ports;
pub mod services;
