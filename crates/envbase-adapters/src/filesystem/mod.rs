//! Filesystem adapters implementing the core `Filesystem` port.

pub mod local;
pub mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
