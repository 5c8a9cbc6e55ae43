//! Spreadsheet rendering of output rows

use crate::error::{PipelineError, Result};
use crate::types::OutputRow;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatPattern, Workbook, XlsxError};
use std::path::Path;
use tracing::info;

const HEADERS: [&str; 3] = ["Email Address", "Company Name", "Website"];

const HEADER_FILL: u32 = 0x00C0_C0C0;
const VALID_FILL: u32 = 0x00CC_FFCC;
const INVALID_FILL: u32 = 0x00FF_8080;

/// Cell formats for the header and the two validity states
struct Styles {
    header: Format,
    valid: Format,
    invalid: Format,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Format::new()
                .set_bold()
                .set_font_size(12)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_pattern(FormatPattern::Solid)
                .set_align(FormatAlign::Center),
            valid: fill(VALID_FILL),
            invalid: fill(INVALID_FILL),
        }
    }

    const fn for_row(&self, row: &OutputRow) -> &Format {
        if row.is_valid() {
            &self.valid
        } else {
            &self.invalid
        }
    }
}

fn fill(rgb: u32) -> Format {
    Format::new()
        .set_background_color(Color::RGB(rgb))
        .set_pattern(FormatPattern::Solid)
}

fn xlsx_error(e: &XlsxError) -> PipelineError {
    PipelineError::Write(e.to_string())
}

/// Build an in-memory workbook with a header row and one line per row.
///
/// The address cell carries the validity color; enrichment cells stay
/// blank for invalid rows.
pub fn build_workbook(rows: &[OutputRow], sheet_name: &str) -> Result<Workbook> {
    let styles = Styles::new();
    let mut workbook = Workbook::new();

    {
        let sheet = workbook.add_worksheet();
        sheet.set_name(sheet_name).map_err(|e| xlsx_error(&e))?;

        for (col, title) in (0u16..).zip(HEADERS) {
            sheet
                .write_string_with_format(0, col, title, &styles.header)
                .map_err(|e| xlsx_error(&e))?;
        }

        for (row_num, row) in (1u32..).zip(rows) {
            sheet
                .write_string_with_format(row_num, 0, &row.address, styles.for_row(row))
                .map_err(|e| xlsx_error(&e))?;

            if let Some(fields) = &row.enrichment {
                sheet
                    .write_string(row_num, 1, &fields.company_name)
                    .map_err(|e| xlsx_error(&e))?;
                sheet
                    .write_string(row_num, 2, &fields.website)
                    .map_err(|e| xlsx_error(&e))?;
            }
        }

        sheet.autofit();
    }

    Ok(workbook)
}

/// Build the workbook and save it to `path`.
pub fn write_workbook(rows: &[OutputRow], sheet_name: &str, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(rows, sheet_name)?;
    workbook.save(path).map_err(|e| xlsx_error(&e))?;

    info!("Excel file created: {}", path.display());
    Ok(())
}
