//! Record storage for the Tutor Match Engine.
//!
//! The matching core never touches storage; the HTTP layer reads records
//! from a [`ProfileStore`] and hands copies to the ranking functions.

mod profile_store;
mod seed;

pub use profile_store::ProfileStore;
pub use seed::SeedData;
