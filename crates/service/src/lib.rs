//! Domain layer for the capitals service.
//! - Holds the read-only state→capital store and its lookup operations.
//! - Keeps lookup decisions free of HTTP and logging concerns so they can
//!   be tested on their own.
//! - Provides the one domain error surfaced by the read endpoint.

pub mod errors;
pub mod store;
