//! Object-layer type definitions shared by the gateway and its callers.

pub mod bucket;
pub mod heal;
pub mod multipart;
pub mod object;
pub mod policy;

pub use bucket::{BucketInfo, StorageInfo};
pub use heal::HealObjectResult;
pub use multipart::{
    CompletePart, ListMultipartsInfo, ListPartsInfo, MultipartInfo, PartInfo,
};
pub use object::{ListObjectsInfo, ListObjectsV2Info, ObjectInfo, ObjectMetadata};
pub use policy::{BucketAccessPolicy, PolicyStatement};
