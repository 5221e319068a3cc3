//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod borrow_repo;
pub mod delivery_repo;
pub mod fruit_repo;
pub mod geo_repo;
pub mod inventory_repo;
pub mod location_repo;
pub mod staff_repo;

pub use borrow_repo::BorrowRepo;
pub use delivery_repo::DeliveryRepo;
pub use fruit_repo::FruitRepo;
pub use geo_repo::{CityRepo, CountryRepo};
pub use inventory_repo::InventoryRepo;
pub use location_repo::LocationRepo;
pub use staff_repo::StaffRepo;
