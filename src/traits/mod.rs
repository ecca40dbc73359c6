//! Core traits at the seams of the crate.
//!
//! - [`Model`]: an element type, with its declared annotation and field checks
//! - [`Validator`]: the compiled validator a collection routes every write through
//! - [`Backend`]: the key-value store behind a persistent sequence
//! - [`ResultExt`]: re-basing validator errors under a collection location

pub mod backend;
pub mod model;
pub mod result_ext;
pub mod validator;

pub use backend::Backend;
pub use model::{Input, Model};
pub use result_ext::ResultExt;
pub use validator::{ValidateOptions, Validator};
