pub mod catalog;
pub mod error;
pub mod hashing;

pub use catalog::{load_courses, Course};
pub use error::{Error, Result};
pub use hashing::ChainedHashTable;
