//! Domain layer containing business entities and the ports the core depends on.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`resolver`] - Hostname lookup trait used to validate URLs
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business flows are composed in [`crate::application::services`].

pub mod entities;
pub mod repositories;
pub mod resolver;
