//! Key-value persistence abstractions.
//!
//! # Responsibility
//! - Provide the string key-value contract the application collection is
//!   stored through.
//! - Isolate SQLite details from repository logic.
//!
//! # Invariants
//! - `set` overwrites the whole value for a key; there are no partial writes.

pub mod kv;
