//! Storage layer for phonerecall
//!
//! This crate implements the key-value backends the engine persists into:
//! - KvBackend: string key → string blob abstraction
//! - MemoryBackend: in-process map guarded by a `parking_lot::RwLock`
//! - FileBackend: one file per key, written atomically (temp + fsync + rename)
//!
//! Values are opaque to this layer; the engine decides how to encode them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod file;
pub mod memory;

pub use backend::KvBackend;
pub use file::FileBackend;
pub use memory::MemoryBackend;
