//! Hash-based storage for the course catalog.

pub mod chained;

pub use chained::ChainedHashTable;
