// src/storage/mod.rs
// This module handles the database file: its schema and the one-off seeding of it.

pub mod db;
pub mod schema;

// Re-export the main structs for easier access.
pub use self::db::{DatabaseManager, FrontMode};
