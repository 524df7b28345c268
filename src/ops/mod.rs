//! Fallible operations

pub mod division;
pub mod resource;

pub use division::divide;
pub use resource::{Resource, open_resource, with_resource};
