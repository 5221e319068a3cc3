//! Domain logic for the orchard distribution platform.
//!
//! Pure types and functions with no I/O: error taxonomy, staff/location
//! role tables, delivery status constants, the cross-collection name
//! joiner, and the monthly yield report aggregator. Everything here is
//! usable from both the repository layer and the API crate.

pub mod error;
pub mod join;
pub mod report;
pub mod roles;
pub mod shipping;
pub mod types;
