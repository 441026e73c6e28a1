//! Core domain entities representing the business data model.
//!
//! The service is scoped to a single record type, [`ShortLink`]. Creation never
//! takes a client-built entity: the store derives the short code itself (see
//! [`crate::domain::repositories::ShortLinkRepository::create_next`]).

pub mod short_link;

pub use short_link::ShortLink;
