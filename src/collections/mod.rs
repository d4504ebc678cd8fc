//! Collection utilities for entity and component storage

mod bag;
mod immutable;

pub use bag::Bag;
pub use immutable::{ImmutableArray, Iter};
