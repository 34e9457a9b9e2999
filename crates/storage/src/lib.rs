pub mod catalog;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use catalog::Catalog;
pub use repository::submissions::SubmissionStore;
