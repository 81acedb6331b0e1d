//! Contracts for the hosted services this client consumes.
//!
//! The identity, tabular, and blob services are opaque collaborators: this
//! crate only speaks the contracts below and never reimplements their
//! internals. [`RestBackend`] implements all three against the platform's
//! REST endpoints; tests substitute in-memory doubles.

pub mod avatars;
pub mod identity;
pub mod profiles;
pub mod rest;

pub use avatars::BlobStore;
pub use identity::IdentityService;
pub use profiles::ProfileStore;
pub use rest::RestBackend;
