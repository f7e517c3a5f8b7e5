//! Boundary data model for the comparison core.
//!
//! Catalog records and shopping-list lines arrive from the external
//! ingestion/storage layers as read-only snapshots; everything derived from
//! them (baskets, comparisons, summaries) is rebuilt from scratch on each
//! comparison run. Wire shapes follow the upstream JSON (camelCase) and are
//! closed: unknown fields are rejected at deserialization time rather than
//! passed through silently.

mod basket;
mod record;
mod summary;

pub use basket::*;
pub use record::*;
pub use summary::*;
