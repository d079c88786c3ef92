//! # soar-client
//!
//! Authenticated REST client for the case-management platform.
//!
//! Tasks never construct their own transport. The host builds one
//! [`CaseClient`] from configuration and injects it through the [`RestClient`]
//! trait, which exposes exactly the two verbs the platform's task surface
//! needs.

pub mod client;
pub mod rest;

pub use client::CaseClient;
pub use rest::{ClientError, RestClient};
