//! Application layer services implementing business logic.
//!
//! Services consume the domain traits and give HTTP handlers and the admin
//! CLI a single entry point for each flow.
//!
//! # Available Services
//!
//! - [`services::url_validator::UrlValidator`] - Hostname resolution check for submitted URLs
//! - [`services::link_service::LinkService`] - Shorten and resolve flows

pub mod services;
