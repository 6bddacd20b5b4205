//! Input helpers.
//!
//! - CSV price ingest + validation (`ingest`)

pub mod ingest;

pub use ingest::*;
