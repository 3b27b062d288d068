//! Shared configuration and error handling for Campus
//!
//! This crate provides common functionality used across the Campus workspace:
//! - Configuration management following 12-factor principles
//! - Error types and handling

pub mod config;
pub mod error;

pub use config::{Config, LogFormat, OutputFormat};
pub use error::{Error, Result};
