//! Command implementations.

pub mod admin;
pub mod chat;
pub mod config;
