//! Utility Modules
//!
//! This module provides helper functions used across all processors.
//!
//! # Modules
//!
//! - `accounts`: System Program account allocation
//! - `assertions`: Common validation checks and state loaders
//! - `math`: Checked arithmetic with caller-chosen errors

pub mod accounts;
pub mod assertions;
pub mod math;

// Re-export the checks for easy access
pub use assertions::*;
