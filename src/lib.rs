//! racereg - Race Registration Backend
//!
//! This library provides the core functionality for race registration:
//! distributing participants into startblocks by their declared goal and
//! handing out start numbers for the start number sheets.
//!
//! # Architecture
//!
//! - **Distribution**: goal classification and the block distributor (pure)
//! - **Documents**: start number policy, assignment and sheet layout
//! - **Services**: trait seams over participant and startblock persistence
//! - **Repositories**: Database access
//! - **Models**: Domain models

pub mod config;
pub mod constants;
pub mod db;
pub mod distribution;
pub mod documents;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::Config;
pub use distribution::{distribute, Distribution};
pub use error::{AppError, AppResult};
