//! # Music Store Library
//!
//! Owns the Chinook-style catalog database and provides repository patterns
//! for data access.
//!
//! ## Overview
//!
//! This crate manages:
//! - Connection pooling over MySQL (or SQLite for tests)
//! - Table creation for the seven catalog tables
//! - Repository traits for artists, albums, genres, media types, tracks and
//!   playlists
//! - Payload validation for create and update requests
//! - Seeding every table with sample data

pub mod db;
pub mod error;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod seed;

pub use db::{create_pool, create_schema, create_test_pool};
pub use error::{LibraryError, Result};
pub use seed::{seed, SeedConfig, SeedMode, SeedReport};
pub use sqlx::AnyPool;
