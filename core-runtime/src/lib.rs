//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the music store services:
//! - Logging and tracing infrastructure
//! - Configuration management (environment-derived, built once at startup)
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that the library and service
//! crates depend on. It establishes the logging conventions and the explicit
//! configuration structs that are passed to every component needing them.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{DatabaseSettings, ServerConfig};
pub use error::{Error, Result};
