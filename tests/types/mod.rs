pub mod error_details;
pub mod location;
