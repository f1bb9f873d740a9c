//! Core types and errors for the easy-layout engine.
//!
//! This crate provides the foundational types used across all other easy-layout crates:
//! - The token grid and the per-area spans derived from it
//! - Spacing values (absolute units or percentages)
//! - Percentage rectangles produced by the coordinate converter
//! - Error types

pub mod errors;
pub mod types;

pub use errors::*;
pub use types::*;
