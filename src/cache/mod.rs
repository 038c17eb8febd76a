// Cache module for fetched repository lists.
// Session-lifetime, in-memory only.

pub mod store;

pub use store::{CachedData, CategoryCache};
