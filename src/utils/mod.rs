//! Shared helpers for Arrow data handling, logging and console output

pub mod arrow;
pub mod logging;
