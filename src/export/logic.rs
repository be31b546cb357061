use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::store::{EntryStore, FileStore};
use crate::ui::messages::warning;
use crate::utils::date::{month_name, parse_period};

use chrono::NaiveDate;
use std::path::Path;

/// High-level export flow shared by all formats.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the saved entries.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or an expression such as:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `start:end` combinations of the above
    pub fn export(
        store_file: &FileStore,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };

        let entries = EntryStore::load(store_file);
        let selection = EntryStore::from_entries(
            entries
                .entries()
                .iter()
                .filter(|e| match bounds {
                    Some((start, end)) => e.date >= start && e.date <= end,
                    None => true,
                })
                .cloned()
                .collect(),
        );

        if selection.is_empty() {
            warning("No entries found for the selected range. Nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&flat_records(&selection), path)?,
            ExportFormat::Json => export_json(&flat_records(&selection), path)?,
            ExportFormat::Xlsx => {
                export_xlsx(selection.entries(), path, selection.total_overtime())?
            }
            ExportFormat::Pdf => {
                let title = build_report_title(&cfg.report_title, range);
                export_pdf(
                    selection.entries(),
                    path,
                    &title,
                    selection.total_overtime(),
                )?
            }
        }

        Ok(())
    }
}

fn flat_records(selection: &EntryStore) -> Vec<EntryExport> {
    selection
        .entries()
        .iter()
        .map(EntryExport::from_entry)
        .collect()
}

/// Report title reflecting the selected period.
fn build_report_title(base: &str, range: &Option<String>) -> String {
    let Some(r) = range else {
        return base.to_string();
    };

    if r.eq_ignore_ascii_case("all") {
        return base.to_string();
    }

    if let Some((start, end)) = r.split_once(':') {
        return format!("{} - from {} to {}", base, start.trim(), end.trim());
    }

    match r.len() {
        // YYYY
        4 => format!("{} - year {}", base, r),

        // YYYY-MM
        7 => {
            let month: u32 = r[5..7].parse().unwrap_or(0);
            format!("{} - {} {}", base, month_name(month), &r[0..4])
        }

        // YYYY-MM-DD
        10 => format!("{} - {}", base, r),

        _ => base.to_string(),
    }
}
