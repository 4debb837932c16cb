//! Foundation types for the cskin preview tool.
//!
//! This crate contains the types shared by all cskin-preview crates:
//! the error enum, `Result` alias, geometry primitives, and the layout
//! configuration constants.

pub mod config;
pub mod error;
pub mod geometry;
