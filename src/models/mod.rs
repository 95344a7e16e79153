//! Data models.
//!
//! This module contains the immutable configuration value that drives a
//! greeting run, together with the casing styles it can carry.
pub mod greeting;
