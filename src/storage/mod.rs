//! Storage implementations for different backends

pub mod in_memory;

pub use in_memory::InMemoryDataProvider;
