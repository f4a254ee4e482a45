pub mod auth;
pub mod content;
pub mod leads;
pub mod news;
pub mod uploads;
