//! Parsers for the three playground state documents.
//!
//! Each parser consumes the full text of one document in a single pass and
//! produces typed records. Parsers hold no shared state and have no
//! invocation-order dependency; malformed rows and blocks are dropped
//! locally rather than surfaced as errors.

pub mod activity;
pub mod roadmap;
pub mod table;
pub mod timeline;
