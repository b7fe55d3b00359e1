pub mod benchmark;
pub mod health_checks;

pub use health_checks::*;
