//! Domain building blocks shared by the record-store and HTTP layers.
//!
//! Nothing in here touches the database; the blob store backends are the
//! only modules that perform I/O.

pub mod blob;
pub mod error;
pub mod hashing;
pub mod types;
pub mod upload;
pub mod validation;
