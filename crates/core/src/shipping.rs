//! Delivery status constants and validators.
//!
//! Statuses are stored as display text (the values the admin console shows
//! verbatim), so the canonical spellings live here rather than in an enum
//! mapped through a lookup table.

use crate::error::CoreError;

pub const STATUS_PENDING: &str = "Pending";
pub const STATUS_IN_TRANSIT: &str = "In Transit";
pub const STATUS_DELIVERED: &str = "Delivered";
pub const STATUS_CANCELLED: &str = "Cancelled";

pub const VALID_DELIVERY_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_IN_TRANSIT,
    STATUS_DELIVERED,
    STATUS_CANCELLED,
];

/// Validate that a delivery status is one of the canonical spellings.
pub fn validate_delivery_status(status: &str) -> Result<(), CoreError> {
    if VALID_DELIVERY_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown delivery status '{status}'. Valid: {VALID_DELIVERY_STATUSES:?}"
        )))
    }
}

/// Whether a delivery in this status counts toward the yield report.
pub fn is_delivered(status: &str) -> bool {
    status == STATUS_DELIVERED
}
