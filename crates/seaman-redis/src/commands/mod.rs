//! Command implementations

pub mod catalog;
pub mod config;
pub mod redis;
pub mod services;
