//! Core types and the bulk-import parser for linkdex.
//!
//! This crate provides:
//! - Catalog record types and the static seed dataset
//! - The synchronous bulk-import parsing pipeline
//! - Configuration structures
//! - Admin password verification

pub mod auth;
pub mod config;
pub mod import;
pub mod model;

pub use config::{AppConfig, ConfigError};
pub use model::{Category, NewWebsite, Website, WebsiteUpdate};
