//! Middleware modules.

pub mod authorization;
pub mod cors;
pub mod error;
