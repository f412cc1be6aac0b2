//! Shared test bootstrap utilities.

pub mod logging;
