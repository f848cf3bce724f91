//! Standard error messages for consistent error responses.

pub const INTERNAL_ERROR: &str = "Internal server error";
pub const RESOURCE_NOT_FOUND: &str = "Resource not found";
pub const ID_NOT_INTEGER: &str = "Id must be an integer";
