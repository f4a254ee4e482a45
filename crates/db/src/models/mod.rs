pub mod admin;
pub mod content;
pub mod lead;
pub mod news;
pub mod session;
