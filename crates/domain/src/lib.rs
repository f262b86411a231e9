//! # tellhub-domain
//!
//! Pure domain model for the tellhub device broker.
//!
//! ## Responsibilities
//! - Foundational types: device identifiers, error conventions
//! - Define the **Catalog** (protocol → model → parameter schema) and its lookups
//! - Define the **Validator** that checks device descriptors against the catalog
//! - Define the gateway vocabulary: **result codes** and **device methods**
//! - Define **Devices** and the **registrations** that create them
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! The hardware boundary is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod id;

pub mod catalog;
pub mod descriptor;
pub mod device;
pub mod method;
pub mod result_code;
pub mod validation;
