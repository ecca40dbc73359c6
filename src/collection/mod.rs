//! Validated collections.
//!
//! - [`CollectionClass`] - a collection shape specialized with an element type,
//!   holding the validation policy every write goes through
//! - [`Sequence`] - an ordered list of elements
//! - [`Mapping`] - a string-keyed map of elements in insertion order
//! - [`PersistentSequence`] - a sequence that forwards commits to a [`Backend`](crate::Backend)
//!
//! # Examples
//!
//! ```
//! use model_collections::{loc, CollectionConfig, Input, Model, Sequence};
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
//! let class = Sequence::<User>::default_class().subclass("WeakUsers", CollectionConfig::lax());
//! let mut users = Sequence::with_class(class);
//!
//! let err = users.append(Input::raw(json!({"name": "A", "age": "old"}))).unwrap_err();
//! let details = &err.validation_error().unwrap().errors()[0];
//! assert_eq!(details.loc, loc![0]);
//! ```
pub mod base;
pub mod mapping;
pub mod persistent;
pub mod sequence;
pub mod slice;

pub use base::{CollectionClass, CollectionKind};
pub use mapping::Mapping;
pub use persistent::{KeySource, PersistentSequence};
pub use sequence::{Sequence, SequenceArgs};
pub use slice::Slice;
