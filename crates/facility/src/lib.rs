//! Facility domain: categories, records, outbound query routing and response
//! normalization.
//!
//! Nothing in this crate touches a visual surface. It answers two questions for
//! a search session: which request to issue, and whether the decoded response
//! is a usable, ordered result set.

pub mod category;
pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod normalize;
pub mod query;
pub mod record;

pub use category::*;
pub use client::*;
pub use config::*;
pub use detail::*;
pub use error::*;
pub use normalize::*;
pub use query::*;
pub use record::*;
