//! Database module
//!
//! This module handles database connections and repositories. The schema
//! itself is managed outside this crate.

pub mod connection;
pub mod repositories;

pub use connection::*;
