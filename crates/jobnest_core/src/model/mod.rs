//! Domain model for tracked job applications.
//!
//! # Responsibility
//! - Define the canonical record shared by list, dashboard and summary views.
//! - Keep the serialized shape compatible with the stored `jobs` array.
//!
//! # Invariants
//! - Every application is identified by an `ApplicationId` unique in its
//!   collection.
//! - Deletion is a hard removal from the collection.

pub mod application;
