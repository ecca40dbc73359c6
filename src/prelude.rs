//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use model_collections::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`loc!`]
//! - **Collections**: [`Sequence`], [`SequenceArgs`], [`Mapping`], [`PersistentSequence`], [`KeySource`]
//! - **Policy**: [`CollectionConfig`]
//! - **Traits**: [`Model`], [`Backend`], [`ResultExt`]
//! - **Errors**: [`CollectionError`], [`ValidationError`], [`ErrorDetails`]
//!
//! # Examples
//!
//! ```
//! use model_collections::prelude::*;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! struct Tag {
//!     label: String,
//! }
//!
//! impl Model for Tag {}
//!
//! fn tags(labels: &[&str]) -> Result<Sequence<Tag>, CollectionError> {
//!     let mut tags = Sequence::<Tag>::new();
//!     tags.extend(labels.iter().map(|label| Tag { label: label.to_string() }))?;
//!     Ok(tags)
//! }
//!
//! assert_eq!(tags(&["a", "b"]).unwrap().len(), 2);
//! ```

pub use crate::loc;
pub use crate::{
    Backend, CollectionConfig, CollectionError, ErrorDetails, Input, KeySource, Location, Mapping,
    Model, PersistentSequence, ResultExt, Sequence, SequenceArgs, ValidationError,
};
