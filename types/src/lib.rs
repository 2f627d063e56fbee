//! This library contains the record types served by the Blob Explorer. They
//! are shared between the server, its tests and any Rust client that wants
//! to decode the JSON responses.
//!
//! Field names on the wire are fixed by existing consumers of the API, which
//! is why most fields carry an explicit `#[serde(rename)]`.

/// The [Chain] enum selects one of the per-chain record sets.
mod chain;
pub use chain::*;

mod records;
pub use records::*;

pub mod serde_parsers;
