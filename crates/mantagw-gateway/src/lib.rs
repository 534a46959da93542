//! # mantagw-gateway
//!
//! Object-storage gateway layer. [`StorageGateway`] implements every
//! capability trait in [`mantagw_core::traits::gateway`] by translating
//! bucket and object calls into directory-store calls under `/stor`.

pub mod anonymous;
pub mod bucket;
pub mod endpoint;
pub mod gateway;
pub mod object;
pub mod policy;
pub mod unsupported;

pub use endpoint::parse_gateway_endpoint;
pub use gateway::StorageGateway;
