//! Filesystem access for tripane.
//!
//! [`entry::FileEntry`] is the listing unit, [`ops`] and [`preview`] hold
//! the real filesystem primitives, and [`gateway`] defines the boundary
//! the browser core talks through.

pub mod entry;
pub mod gateway;
#[cfg(test)]
pub mod memory;
pub mod ops;
pub mod preview;

pub use entry::{EntryKind, FileEntry};
pub use gateway::{FileSystemGateway, LocalFs};
