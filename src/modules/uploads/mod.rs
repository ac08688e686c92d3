//! Local upload storage
//!
//! Writes uploaded order attachments to a directory on the local filesystem.

mod local_storage;

pub use local_storage::LocalUploadStorage;
