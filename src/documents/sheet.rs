//! Start number sheet
//!
//! One page per participant: start number, name, startblock, the event
//! logos, a checkmark for confirmed registrations and the start number as a
//! barcode, printed several times so it scans from any angle.

use std::path::PathBuf;

use crate::{
    constants::sheet_layout::{
        BARCODE_POSITIONS, BARCODE_WIDTH, BLOCK_NAME_Y, CHECKMARK_LINE_WIDTH, CHECKMARK_PATH,
        DECORATIONS, FIRSTNAME_Y, LASTNAME_Y, NAME_FONT_SIZE, START_NUMBER_FONT_SIZE,
        START_NUMBER_Y,
    },
    error::AppResult,
    services::{ParticipantSource, StartblockStore},
};

use super::{
    roster::Roster,
    start_numbers::{StartNumberAssignment, StartNumberPolicy},
    surface::{BarcodeGenerator, DocumentSurface, ImageSource, TextStyle},
};

/// Start number sheet assembly
pub struct StartNumberSheet;

impl StartNumberSheet {
    /// Load the roster and draw every participant's page.
    ///
    /// Returns the number of pages written. Loading failures surface before
    /// anything is drawn.
    pub async fn fill_document(
        source: &dyn ParticipantSource,
        store: &dyn StartblockStore,
        policy: &StartNumberPolicy,
        surface: &mut dyn DocumentSurface,
        barcodes: &dyn BarcodeGenerator,
    ) -> AppResult<usize> {
        let roster = Roster::load(source, store).await?;
        let assignments = roster.assignments(policy)?;
        Self::render(&assignments, surface, barcodes)
    }

    /// Draw one page per assignment and end the document.
    pub fn render(
        assignments: &[StartNumberAssignment<'_>],
        surface: &mut dyn DocumentSurface,
        barcodes: &dyn BarcodeGenerator,
    ) -> AppResult<usize> {
        let decorations: Vec<_> = DECORATIONS
            .iter()
            .map(|(path, x, y, width)| (ImageSource::File(PathBuf::from(*path)), *x, *y, *width))
            .collect();

        for assignment in assignments {
            Self::render_page(assignment, &decorations, surface, barcodes)?;
        }
        surface.end()?;

        tracing::info!(pages = assignments.len(), "Start number sheet rendered");
        Ok(assignments.len())
    }

    fn render_page(
        assignment: &StartNumberAssignment<'_>,
        decorations: &[(ImageSource, f64, f64, f64)],
        surface: &mut dyn DocumentSurface,
        barcodes: &dyn BarcodeGenerator,
    ) -> AppResult<()> {
        let participant = assignment.participant;
        let number = assignment.start_number.to_string();

        surface.add_page()?;
        surface.text(&number, 0.0, START_NUMBER_Y, TextStyle::centered(START_NUMBER_FONT_SIZE))?;

        let name_style = TextStyle::centered(NAME_FONT_SIZE);
        surface.text(&participant.firstname, 0.0, FIRSTNAME_Y, name_style)?;
        surface.text(&participant.lastname, 0.0, LASTNAME_Y, name_style)?;
        if let Some(block) = assignment.block {
            surface.text(&block.name, 0.0, BLOCK_NAME_Y, name_style)?;
        }

        for (image, x, y, width) in decorations {
            surface.image(image, *x, *y, *width)?;
        }

        if participant.confirmed {
            surface.stroke_path(CHECKMARK_PATH, CHECKMARK_LINE_WIDTH)?;
        }

        let barcode = ImageSource::Png(barcodes.render(&number)?);
        for (x, y) in BARCODE_POSITIONS {
            surface.image(&barcode, x, y, BARCODE_WIDTH)?;
        }

        Ok(())
    }
}
