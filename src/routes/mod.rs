//! HTML and utility route handlers

pub mod health;
pub mod proposals;
