//! Request extractors.
//!
//! - [`auth::AdminAuth`] -- Requires a bearer token naming a live admin session.

pub mod auth;
