//! Repository layer over the stored application collection.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate the serialized storage shape from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `JobApplication::validate()` before
//!   persistence.
//! - Every mutation rewrites the whole collection.

pub mod application_repo;
