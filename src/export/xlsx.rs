// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{COLUMNS, OrderRecord, get_headers, record_to_row};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, XlsxError};

/// Name of the single worksheet.
pub(crate) const SHEET_NAME: &str = "Kitchen Order List";

/// XLSX in memory: one sheet, header row, fixed column widths, text cells.
pub(crate) fn build_xlsx(records: &[OrderRecord]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F7D32))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let widths = COLUMNS.iter().map(|(_, w)| *w);
    for (col, (header, width)) in get_headers().into_iter().zip(widths).enumerate() {
        let col = col as u16;
        worksheet
            .write_string_with_format(0, col, header, &header_format)
            .map_err(to_export_error)?;
        worksheet
            .set_column_width(col, width)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Righe: sempre testo (telefoni e numeri ordine restano come sono)
    // ---------------------------
    let cell_format = Format::new().set_border(FormatBorder::Thin);

    for (i, rec) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in record_to_row(rec).iter().enumerate() {
            worksheet
                .write_string_with_format(row, col as u16, *value, &cell_format)
                .map_err(to_export_error)?;
        }
    }

    workbook.save_to_buffer().map_err(to_export_error)
}

fn to_export_error(e: XlsxError) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}
