pub mod habit;
pub mod mood;
pub mod sleep;
pub mod user;
