//! Staff job roles and location type constants.
//!
//! Both fields are stored as plain text; these tables define the accepted
//! values and the validators used at the API boundary.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Staff jobs
// ---------------------------------------------------------------------------

pub const JOB_MANAGER: &str = "manager";
pub const JOB_STAFF: &str = "staff";
pub const JOB_SHOP: &str = "shop";

pub const VALID_JOBS: &[&str] = &[JOB_MANAGER, JOB_STAFF, JOB_SHOP];

/// Validate that a staff job name is in the known set.
pub fn validate_job(job: &str) -> Result<(), CoreError> {
    if VALID_JOBS.contains(&job) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown job '{job}'. Valid: {VALID_JOBS:?}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Location types
// ---------------------------------------------------------------------------

pub const LOCATION_WAREHOUSE: &str = "warehouse";
pub const LOCATION_SHOP: &str = "shop";

pub const VALID_LOCATION_TYPES: &[&str] = &[LOCATION_WAREHOUSE, LOCATION_SHOP];

/// Validate that a location type is in the known set.
pub fn validate_location_type(location_type: &str) -> Result<(), CoreError> {
    if VALID_LOCATION_TYPES.contains(&location_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown location type '{location_type}'. Valid: {VALID_LOCATION_TYPES:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_jobs_pass() {
        for job in VALID_JOBS {
            assert!(validate_job(job).is_ok());
        }
    }

    #[test]
    fn unknown_job_fails() {
        let err = validate_job("director").unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn location_type_is_case_sensitive() {
        assert!(validate_location_type("shop").is_ok());
        assert!(validate_location_type("Shop").is_err());
    }
}
