use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::round2;
use crate::errors::AppResult;
use crate::store::{EntryStore, FileStore};
use crate::ui::messages::info;
use crate::utils::date::parse_period;
use crate::utils::formatting::format_hours;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let store_file = FileStore::new(&cfg.store);
        let entries = EntryStore::load(&store_file);

        let bounds = match period {
            Some(p) => Some(parse_period(p)?),
            None => None,
        };

        // totals are computed over the selection, not the whole store
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
            match period {
                Some(p) => info(format!("No entries for period {}.", p)),
                None => info("No entries saved yet."),
            }
            return Ok(());
        }

        let overtime = selection.total_overtime();
        let regular = selection.total_regular_hours();
        let worked = round2(regular + overtime);

        let mut table = Table::new(vec!["Date", "Clock-in", "Clock-out", "Hours", "Overtime"]);
        for e in selection.entries() {
            table.add_row(vec![
                e.day_key(),
                e.clock_in_str(),
                e.clock_out_str(),
                format_hours(e.hours_worked),
                if e.overtime_hours > 0.0 {
                    format_hours(e.overtime_hours)
                } else {
                    "-".to_string()
                },
            ]);
        }

        table.set_footer(vec![
            "Total".to_string(),
            String::new(),
            String::new(),
            format_hours(worked),
            format_hours(overtime),
        ]);

        println!("\n{}", table.render());
        println!(
            "Entries: {} | Regular hours: {} | Overtime hours: {}",
            selection.len(),
            format_hours(regular),
            format_hours(overtime)
        );
    }

    Ok(())
}
