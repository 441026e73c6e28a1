//! Utility functions shared across layers.
//!
//! - [`db_error`] - SQLx error classification
//! - [`hostname`] - Hostname extraction from submitted URLs
//! - [`location`] - Redirect target encoding

pub mod db_error;
pub mod hostname;
pub mod location;
