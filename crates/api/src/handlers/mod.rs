//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the repositories in `orchard_db`, validate inputs
//! via the `orchard_core` validators, and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod borrow;
pub mod delivery;
pub mod fruit;
pub mod geo;
pub mod inventory;
pub mod location;
pub mod staff;
