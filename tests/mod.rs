pub mod collection;
pub mod properties;
pub mod specialize;
pub mod types;
pub mod validation;
