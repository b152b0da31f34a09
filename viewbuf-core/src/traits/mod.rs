//! Abstract interfaces for buffer storage
//!
//! Traits are pure interfaces - no I/O-backed implementations.

pub mod region;

pub use region::StorageRegion;
