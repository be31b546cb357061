use crate::errors::{AppError, AppResult};
use crate::export::model::{entry_to_report_row, report_footer, report_headers};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::TimeEntry;
use crate::ui::messages::info;
use std::path::Path;

/// Render the entry collection as a printable PDF report: title, generation
/// timestamp, one row per entry and a total-overtime footer.
pub(crate) fn export_pdf(
    entries: &[TimeEntry],
    path: &Path,
    title: &str,
    total_overtime: f64,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = report_headers();
    let rows: Vec<Vec<String>> = entries.iter().map(entry_to_report_row).collect();
    let footer = report_footer(total_overtime);

    let generated = format!(
        "Generated on: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    );

    let mut pdf = PdfManager::new();
    pdf.write_report(title, &generated, &headers, &rows, &footer);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
