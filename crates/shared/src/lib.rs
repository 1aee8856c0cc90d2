//! Shared errors and configuration for Shabd.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application-wide error type with stable codes
//! - Configuration management

pub mod config;
pub mod error;

pub use self::config::{AppConfig, LabelsConfig};
pub use self::error::{AppError, AppResult};
