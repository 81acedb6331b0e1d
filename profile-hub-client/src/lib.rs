//! This crate is an implementation of a client to a hosted profile platform.
//!
//! The platform's identity, tabular, and blob services are consumed through
//! the trait contracts in [`backend`]; the workflows in [`auth`], [`account`],
//! and [`avatar`] wire those contracts to the session state in [`session`],
//! and [`controller`] dispatches between the signed-out and signed-in
//! surfaces.
#![warn(unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
#![forbid(rustdoc::broken_intra_doc_links)]

pub mod account;
pub mod auth;
pub mod avatar;
pub mod backend;
mod busy;
pub mod config;
pub mod controller;
pub mod error;
pub mod session;

pub use account::AccountWorkflow;
pub use auth::AuthWorkflow;
pub use avatar::AvatarStore;
pub use config::Config;
pub use controller::RootController;
pub use error::{ProfileHubClientError, Result};
pub use session::SessionStore;
