//! CLI command implementations.
pub mod scan;
