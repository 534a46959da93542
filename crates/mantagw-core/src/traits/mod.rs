//! Core traits defined in `mantagw-core` and implemented by other crates.

pub mod directory;
pub mod gateway;

pub use directory::{
    ByteStream, DirectoryEntry, DirectoryStore, EntryType, PutObjectRequest, RemoteObject,
};
pub use gateway::{
    AnonymousOperations, BucketOperations, GatewayLayer, HealOperations, MultipartOperations,
    ObjectOperations, ObjectReader, ObjectWriter, PolicyOperations,
};
