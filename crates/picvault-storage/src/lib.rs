//! Object-storage collaborator.
//!
//! The serving path never streams objects through this crate: it asks for a
//! time-limited presigned GET URL and fetches that itself. The upload path
//! stores bytes verbatim. Backends implement the narrow [`Storage`] trait;
//! [`MemoryStorage`] exists for tests and fakes.

pub mod memory;
pub mod s3;
mod traits;

pub use memory::MemoryStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
