//! Collections of validated models.
//!
//! A collection is specialized with an element type into a
//! [`CollectionClass`]. Every write to an instance of that class validates the
//! incoming value against the element type, optionally rejecting inputs of
//! the wrong runtime type before any coercion, and reports failures as one
//! [`ValidationError`] whose records are located relative to the collection.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `model_collections::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Sequences
//!
//! ```
//! use model_collections::{Model, Sequence, SequenceArgs};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl Model for User {}
//!
//! let users = Sequence::<User>::construct(
//!     Sequence::default_class(),
//!     SequenceArgs::new().positional([
//!         User { name: "Name 0".into(), age: 0 },
//!         User { name: "Name 1".into(), age: 1 },
//!     ]),
//! )
//! .unwrap();
//!
//! assert_eq!(users.len(), 2);
//! assert_eq!(
//!     users.to_value().unwrap(),
//!     json!([{"name": "Name 0", "age": 0}, {"name": "Name 1", "age": 1}])
//! );
//! ```
//!
//! ## Error Locations
//!
//! ```
//! use model_collections::{loc, Input, Mapping, Model};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! impl Model for User {}
//!
//! let mut users = Mapping::<User>::new();
//! let err = users.set("u1", Input::raw(json!({"name": "A"}))).unwrap_err();
//!
//! let details = &err.validation_error().unwrap().errors()[0];
//! assert_eq!(details.loc, loc!["u1"]);
//! assert_eq!(details.kind, "is_instance_of");
//! ```

/// Declared element type expressions
pub mod annotation;
/// Ready-made persistence backends
pub mod backend;
/// Sequence, mapping and persistent collections
pub mod collection;
/// Per-class validation policy
pub mod config;
/// Conversions between engine errors, locations and JSON
pub mod convert;
/// Element descriptors binding annotations to validators
pub mod element;
/// The default serde-backed validator
pub mod engine;
/// Errors raised by collection operations
pub mod error;
/// Location-building macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Process-wide specialization cache
pub mod specialize;
/// Core traits: models, validators, backends
pub mod traits;
/// Error records and locations
pub mod types;
/// Error-accumulating validation outcomes
pub mod validation;

pub use annotation::{get_types_from_annotation, Annotation};
pub use collection::*;
pub use config::CollectionConfig;
pub use convert::wrap_errors_with_loc;
pub use element::Element;
pub use engine::ModelValidator;
pub use error::{CollectionError, PersistError, Result};
pub use specialize::{cached_classes, specialize, specialize_with};
pub use traits::*;
pub use types::{ErrorDetails, ErrorVec, LocItem, Location, ValidationError};
pub use validation::Validation;
