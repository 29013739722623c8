//! Resource definition helpers

pub mod macros;
