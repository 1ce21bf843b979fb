//! Domain model for the employee directory.
//!
//! Employees reference their direct reports either fully expanded or as
//! identifier-only stubs; records loaded from the store carry stubs one level
//! down and the reporting resolver expands them on demand.

mod compensation;
mod employee;

pub use compensation::*;
pub use employee::*;
