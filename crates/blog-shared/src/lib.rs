//! # Blog Shared
//!
//! Wire types of the blog posts API: JSON request/response bodies and
//! problem-details errors.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
