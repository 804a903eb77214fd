//! Core types for phonerecall
//!
//! This crate defines the foundational types used throughout the system:
//! - ContactId: Unique identifier for a stored contact
//! - Contact: A persisted name + phone number record
//! - ContactPatch: Partial update applied by the store
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contact;
pub mod error;
pub mod types;

pub use contact::{Contact, ContactPatch};
pub use error::{Error, Result};
pub use types::ContactId;
