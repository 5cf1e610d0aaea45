//! Storage layer.
//!
//! The engine never touches storage: it is a pure function of the records
//! handed to it. This module is the repository the web layer reads and
//! writes through. The reference implementation is in-memory; a durable
//! backend can replace it behind the same operation surface.

pub mod memory;

pub use memory::MemoryDb;
