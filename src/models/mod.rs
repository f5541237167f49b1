//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod ambition;
pub mod participant;
pub mod startblock;

pub use ambition::*;
pub use participant::*;
pub use startblock::*;
