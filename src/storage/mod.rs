//! Local `SQLite` persistence.

pub mod database;
pub mod migrations;

pub use database::Database;
