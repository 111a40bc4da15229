//! # scout-core
//!
//! Core types and error types for Scout.
//!
//! This crate provides the foundational types shared across all Scout crates:
//! - Entity structs for every piece of the report artifact (scope, cards,
//!   digest, advisor, ops plan, sources)
//! - Closed enums for opportunity types, weather badges, modes, risk levels
//! - Source-id generation and comparison helpers
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod source_id;
