//! Page-local state

pub mod upload;
