//! Repository trait definitions for the domain layer.
//!
//! # Available Repositories
//!
//! - [`RedirectRepository`] - Path to URL pairs in one bucket of the persistent store
//!
//! # Testing
//!
//! See integration tests in `tests/repository_redirect.rs` for usage examples.

pub mod redirect_repository;

pub use redirect_repository::RedirectRepository;

#[cfg(test)]
pub use redirect_repository::MockRedirectRepository;
