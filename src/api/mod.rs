//! Remote API Bindings
//!
//! HTTP access to the external people-listing API, organized by resource.

mod error;
mod followers;

// Re-export all public items
pub use error::*;
pub use followers::*;
