//! Core type definitions using newtype patterns for type safety.

mod result_id;

pub use result_id::ResultId;
