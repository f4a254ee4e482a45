//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument and run one parameterized
//! statement each.

pub mod admin_repo;
pub mod content_repo;
pub mod lead_repo;
pub mod news_repo;
pub mod session_repo;

pub use admin_repo::AdminRepo;
pub use content_repo::ContentRepo;
pub use lead_repo::LeadRepo;
pub use news_repo::NewsRepo;
pub use session_repo::SessionRepo;
