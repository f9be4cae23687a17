//! Domain layer containing the redirect data model and lookup contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Redirect rules and the compiled path mapping
//! - [`repositories`] - Persistent store trait definitions
//! - [`resolver`] - The [`resolver::Resolver`] capability shared by every lookup source
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Lookup sources and their composition live in [`crate::application`]

pub mod entities;
pub mod repositories;
pub mod resolver;
