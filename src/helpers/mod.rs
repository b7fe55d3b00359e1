pub(crate) mod json;
pub mod number;

pub use json::*;
