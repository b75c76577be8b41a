//! frontmeta core: shared types and errors.
//!
//! This crate provides the foundational types used across all frontmeta
//! crates. It has no internal frontmeta dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`record`]: Canonical attributes and the metadata record

#![doc = include_str!("../README.md")]

pub mod error;
pub mod record;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use record::{Attribute, AttributeValue, MetadataRecord};
