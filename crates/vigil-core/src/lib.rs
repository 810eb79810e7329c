//! Core types and definitions for the VIGIL engine.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, enumerations, UI events, and constants.
//! It has no dependency on any runtime framework.

pub mod constants;
pub mod enums;
pub mod events;
pub mod types;
