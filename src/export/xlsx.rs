use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{date_serial, time_serial};
use crate::export::model::report_headers;
use crate::export::notify_export_success;
use crate::models::TimeEntry;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with styling, real date/time cells and auto column widths.
pub(crate) fn export_xlsx(
    entries: &[TimeEntry],
    path: &Path,
    total_overtime: f64,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Header
    // ---------------------------
    let headers = report_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Rows
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, e) in entries.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };

        let date_format = banded(bg).set_num_format("yyyy-mm-dd");
        let time_format = banded(bg).set_num_format("hh:mm");
        let hours_format = banded(bg).set_num_format("0.00").set_align(FormatAlign::Right);

        worksheet
            .write_with_format(row, 0, date_serial(e.date), &date_format)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 1, time_serial(e.clock_in), &time_format)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 2, time_serial(e.clock_out), &time_format)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 3, e.hours_worked, &hours_format)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 4, e.overtime_hours, &hours_format)
            .map_err(to_export_error)?;

        // widths tracked from the displayed string forms
        let cells = [
            e.day_key(),
            e.clock_in_str(),
            e.clock_out_str(),
            format!("{:.2}", e.hours_worked),
            format!("{:.2}", e.overtime_hours),
        ];
        for (col, cell) in cells.iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(cell.as_str()));
        }
    }

    // ---------------------------
    // Footer: total overtime
    // ---------------------------
    let footer_row = (entries.len() + 1) as u32;

    let footer_label = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF0F0F0))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let footer_value = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF0F0F0))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
        .set_num_format("0.00")
        .set_align(FormatAlign::Right);

    worksheet
        .write_with_format(footer_row, 0, "Total Overtime", &footer_label)
        .map_err(to_export_error)?;
    for col in 1..=3u16 {
        worksheet
            .write_with_format(footer_row, col, "", &footer_label)
            .map_err(to_export_error)?;
    }
    worksheet
        .write_with_format(footer_row, 4, total_overtime, &footer_value)
        .map_err(to_export_error)?;

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn banded(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))
}
