//! Shared test utilities.

pub mod runtime;
