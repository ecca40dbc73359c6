//! Error records and locations.
//!
//! This module provides the structured data every validation failure is made
//! of:
//!
//! - [`Location`] / [`LocItem`] - where in a nested structure a failure happened
//! - [`ErrorDetails`] - one failure record (`kind`, `loc`, `msg`, `input`, `ctx`)
//! - [`ValidationError`] - the aggregated error a collection raises
//!
//! # Examples
//!
//! ```
//! use model_collections::{loc, ErrorDetails, ValidationError};
//!
//! let err = ValidationError::new(
//!     "Mapping[User]",
//!     [ErrorDetails::new("is_instance_of", "Input should be an instance of User").at(loc!["u1"])],
//! );
//! println!("{err}");
//! ```
use smallvec::SmallVec;

pub mod error_details;
pub mod location;
pub mod validation_error;

pub use error_details::*;
pub use location::*;
pub use validation_error::*;

/// SmallVec-backed list used for accumulating error records.
///
/// A single failure is the overwhelmingly common case, so one record lives
/// inline without a heap allocation.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
