//! Domain types and shared context used by multiple entities in the
//! profile-hub user management system.
//!
//! ⚠️ __Usage__: This crate is not intended for direct use. It is designed as
//! a dependency for other crates in the ecosystem, including
//! `profile-hub-client` and `profile-hub-cli`.
#![warn(unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod constants;
pub mod error;
pub mod types;

pub use error::ProfileHubError;
