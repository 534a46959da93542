//! # mantagw-storage
//!
//! [`DirectoryStore`](mantagw_core::traits::DirectoryStore)
//! implementations for mantagw: a Manta HTTP client and a local
//! filesystem store that emulates Manta directory semantics.

pub mod providers;
#[cfg(feature = "manta")]
pub mod transport;

#[cfg(feature = "local")]
pub use providers::LocalDirectoryStore;
#[cfg(feature = "manta")]
pub use providers::manta::{MantaClient, MantaClientConfig, RsaSigner, Signer};
