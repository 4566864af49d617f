//! Curated result model.
//!
//! Defines the closed set of result variants and the factory that rebuilds
//! them from their stored JSON records.

mod factory;
mod model;

pub use factory::{Constructor, ResultFactory, ResultRegistry};
pub use model::{CuratedResult, Photo, Tweet, Video};
