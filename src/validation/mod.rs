//! Error-accumulating validation outcomes.
//!
//! This module provides the [`Validation`] type, which either holds a validated
//! value or every [`ErrorDetails`](crate::ErrorDetails) record collected on the
//! way. Bulk paths (decoding a whole raw array or object) collect one
//! `Validation` per element so that all offending locations are reported at once.
//!
//! # Examples
//!
//! ```
//! use model_collections::validation::Validation;
//! use model_collections::ErrorDetails;
//!
//! let ok: Validation<i32> = Validation::valid(42);
//! assert!(ok.is_valid());
//!
//! let bad: Validation<i32> = Validation::invalid(ErrorDetails::new("a", "first"));
//! assert_eq!(bad.map(|n| n + 1).into_errors().unwrap().len(), 1);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
