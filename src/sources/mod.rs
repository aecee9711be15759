//! Query-source adapters bundled with the crate.
//!
//! Only the in-memory reference adapter lives here; engine-specific
//! adapters belong to the crates that own those engines.

pub mod memory;

pub use memory::InMemorySource;
