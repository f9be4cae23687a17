//! sled store and repository implementations.
//!
//! # Types
//!
//! - [`SledStore`] - Owned store handle with an explicit open/close lifecycle
//! - [`SledRedirectRepository`] - One bucket (sled tree) of path to URL pairs

pub mod sled_redirect_repository;

pub use sled_redirect_repository::{SledRedirectRepository, SledStore};
