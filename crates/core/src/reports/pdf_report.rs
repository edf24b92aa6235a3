//! PDF rendering of a distribution result.
//!
//! Landscape letter pages with the report title, then a receiver perspective
//! table and a contributor perspective table. Rows that do not fit continue on
//! a new page; every table row carries a formatted amount cell.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use crate::distribution::{contributor_view, DistributionResult};
use crate::errors::{Error, Result};

use super::report_model::ReportConfig;

const PAGE_WIDTH: f32 = 279.4;
const PAGE_HEIGHT: f32 = 215.9;
const MARGIN: f32 = 15.0;
const ROW_HEIGHT: f32 = 7.0;
const TITLE_SIZE: f32 = 18.0;
const HEADING_SIZE: f32 = 14.0;
const CELL_SIZE: f32 = 10.0;

const RECEIVER_COLUMNS: [f32; 4] = [MARGIN, 80.0, 145.0, 210.0];
const CONTRIBUTOR_COLUMNS: [f32; 3] = [MARGIN, 90.0, 210.0];

/// Keeps track of the current page and write position.
struct PageCursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl PageCursor {
    fn new(title: &str) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Page 1");
        let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
        let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN,
            pages: 1,
        })
    }

    /// Moves down by `height`, starting a new page when the bottom margin
    /// would be crossed.
    fn advance(&mut self, height: f32) {
        if self.y - height < MARGIN {
            self.pages += 1;
            let (page, layer) = self.doc.add_page(
                Mm(PAGE_WIDTH),
                Mm(PAGE_HEIGHT),
                format!("Page {}", self.pages),
            );
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.y -= height;
    }

    fn text(&self, text: &str, size: f32, x: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn heading(&mut self, text: &str, size: f32) {
        self.advance(size * 0.6);
        self.text(text, size, MARGIN, true);
        self.advance(ROW_HEIGHT * 0.5);
    }

    fn row(&mut self, cells: &[String], columns: &[f32], bold: bool) {
        self.advance(ROW_HEIGHT);
        for (cell, x) in cells.iter().zip(columns) {
            self.text(cell, CELL_SIZE, *x, bold);
        }
    }

    fn finish(self) -> Result<Vec<u8>> {
        let mut writer = BufWriter::new(Vec::new());
        self.doc.save(&mut writer)?;
        writer
            .into_inner()
            .map_err(|e| Error::Report(e.to_string()))
    }
}

/// Renders the two-table report as PDF bytes.
pub fn write_pdf_report(result: &DistributionResult, config: &ReportConfig) -> Result<Vec<u8>> {
    let mut cursor = PageCursor::new(&config.title)?;
    cursor.heading(&config.title, TITLE_SIZE);

    cursor.heading("Receiver's Perspective", HEADING_SIZE);
    cursor.row(
        &[
            "Receiver Group".to_string(),
            "Receiver Member".to_string(),
            "Contributor".to_string(),
            config.amount_header(),
        ],
        &RECEIVER_COLUMNS,
        true,
    );
    for (group, receiver, detail) in result.entries() {
        cursor.row(
            &[
                group.to_string(),
                receiver.to_string(),
                detail.contributor.clone(),
                config.format_amount(detail.amount),
            ],
            &RECEIVER_COLUMNS,
            false,
        );
    }

    cursor.advance(ROW_HEIGHT);
    cursor.heading("Contributor's Perspective", HEADING_SIZE);
    cursor.row(
        &[
            "Contributor".to_string(),
            "Receiver Group / Member".to_string(),
            config.amount_header(),
        ],
        &CONTRIBUTOR_COLUMNS,
        true,
    );
    for summary in contributor_view(result) {
        for entry in &summary.contributions {
            cursor.row(
                &[
                    summary.contributor.clone(),
                    entry.receiver_label(),
                    config.format_amount(entry.amount),
                ],
                &CONTRIBUTOR_COLUMNS,
                false,
            );
        }
    }

    cursor.finish()
}
