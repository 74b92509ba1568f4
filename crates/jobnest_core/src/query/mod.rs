//! In-memory list queries over a loaded collection.
//!
//! # Invariants
//! - Queries never mutate the input collection.
//! - Unset filter criteria match every record.

pub mod filter;
