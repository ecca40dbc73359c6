pub mod core;
pub mod element;
