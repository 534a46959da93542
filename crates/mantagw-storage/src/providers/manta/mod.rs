//! Manta HTTP directory store.

pub mod auth;
pub mod client;
mod error;

pub use auth::{RsaSigner, Signer};
pub use client::{MantaClient, MantaClientConfig};
