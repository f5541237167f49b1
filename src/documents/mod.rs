//! Start number documents
//!
//! Turns a roster into numbered start sheets. Drawing and barcode images are
//! collaborators behind traits; this module only decides what goes where.

pub mod roster;
pub mod sheet;
pub mod start_numbers;
pub mod surface;

pub use roster::Roster;
pub use sheet::StartNumberSheet;
pub use start_numbers::{StartNumberAssignment, StartNumberPolicy};
pub use surface::{BarcodeGenerator, DocumentSurface, ImageSource, TextAlign, TextStyle};
