//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for partial edits
//!
//! API responses are camelCase; the serde renames on these structs are the
//! single normalization point between column names and the wire format.

pub mod borrow;
pub mod delivery;
pub mod fruit;
pub mod geo;
pub mod inventory;
pub mod location;
pub mod staff;
