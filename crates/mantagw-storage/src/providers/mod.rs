//! Directory store implementations.

#[cfg(feature = "local")]
pub mod local;
#[cfg(feature = "manta")]
pub mod manta;

#[cfg(feature = "local")]
pub use local::LocalDirectoryStore;
