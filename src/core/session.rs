//! Session controller: mediates between the selected date, the form state
//! for that date, and the entry store.
//!
//! Every UI-ish reaction is an explicit transition (`on_date_selected`,
//! `on_field_edited`, `on_save`, `on_delete`); derived hours are recomputed
//! synchronously inside the transition, never by hidden scheduling.

use crate::config::Config;
use crate::core::calculator::hours::worked_hours;
use crate::core::calculator::overtime::overtime_hours;
use crate::errors::{AppError, AppResult};
use crate::models::TimeEntry;
use crate::store::EntryStore;
use crate::utils::date::day_key;
use crate::utils::time::parse_time;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The selected day has a saved entry.
    ViewingExisting,
    /// The selected day has no saved entry; the form holds a synthesized
    /// draft with default times.
    ViewingDraft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    ClockIn,
    ClockOut,
}

/// Draft defaults and overtime threshold, taken from the configuration.
#[derive(Debug, Clone)]
pub struct SessionDefaults {
    pub clock_in: String,
    pub clock_out: String,
    pub threshold: f64,
}

impl SessionDefaults {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            clock_in: cfg.default_clock_in.clone(),
            clock_out: cfg.default_clock_out.clone(),
            threshold: cfg.daily_threshold,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    date: NaiveDate,
    clock_in: String,
    clock_out: String,
    hours_worked: f64,
    overtime_hours: f64,
    state: SessionState,
    threshold: f64,
}

impl Session {
    /// Transition on date selection: load the saved entry for that day if
    /// one exists, otherwise synthesize a draft with default times. Either
    /// way the derived hours are populated immediately.
    pub fn on_date_selected(
        store: &EntryStore,
        date: NaiveDate,
        defaults: &SessionDefaults,
    ) -> Self {
        let mut session = match store.find_by_day(&day_key(date)) {
            Some(entry) => Self {
                date,
                clock_in: entry.clock_in_str(),
                clock_out: entry.clock_out_str(),
                hours_worked: entry.hours_worked,
                overtime_hours: entry.overtime_hours,
                state: SessionState::ViewingExisting,
                threshold: defaults.threshold,
            },
            None => Self {
                date,
                clock_in: defaults.clock_in.clone(),
                clock_out: defaults.clock_out.clone(),
                hours_worked: 0.0,
                overtime_hours: 0.0,
                state: SessionState::ViewingDraft,
                threshold: defaults.threshold,
            },
        };

        session.recompute();
        session
    }

    /// Transition on a time-field edit. An invalid value is kept as the raw
    /// field text but suppresses recomputation: the previous derived values
    /// remain until both fields parse again.
    pub fn on_field_edited(&mut self, field: TimeField, value: &str) {
        match field {
            TimeField::ClockIn => self.clock_in = value.to_string(),
            TimeField::ClockOut => self.clock_out = value.to_string(),
        }

        self.recompute();
    }

    /// Transition on save: upsert the current draft/entry into the store.
    /// Requires both time fields to parse.
    pub fn on_save(&mut self, store: &mut EntryStore) -> AppResult<TimeEntry> {
        let entry = self.entry()?;
        store.upsert(entry.clone());
        self.state = SessionState::ViewingExisting;
        Ok(entry)
    }

    /// Transition on delete: remove the saved entry for the selected day and
    /// reset to a default draft. Only meaningful in `ViewingExisting`;
    /// deleting a draft is a no-op. Returns whether an entry was removed.
    pub fn on_delete(&mut self, store: &mut EntryStore, defaults: &SessionDefaults) -> bool {
        if self.state != SessionState::ViewingExisting {
            return false;
        }

        let removed = store.remove(&day_key(self.date));

        self.clock_in = defaults.clock_in.clone();
        self.clock_out = defaults.clock_out.clone();
        self.state = SessionState::ViewingDraft;
        self.recompute();

        removed
    }

    /// The current form content as a saved-shape entry, with derived fields
    /// recomputed from scratch.
    pub fn entry(&self) -> AppResult<TimeEntry> {
        let clock_in = parse_time(&self.clock_in)
            .ok_or_else(|| AppError::InvalidTime(self.clock_in.clone()))?;
        let clock_out = parse_time(&self.clock_out)
            .ok_or_else(|| AppError::InvalidTime(self.clock_out.clone()))?;

        Ok(TimeEntry::new(self.date, clock_in, clock_out, self.threshold))
    }

    fn recompute(&mut self) {
        let (Some(clock_in), Some(clock_out)) =
            (parse_time(&self.clock_in), parse_time(&self.clock_out))
        else {
            return;
        };

        self.hours_worked = worked_hours(self.date, clock_in, clock_out);
        self.overtime_hours = overtime_hours(self.hours_worked, self.threshold);
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn clock_in(&self) -> &str {
        &self.clock_in
    }

    pub fn clock_out(&self) -> &str {
        &self.clock_out
    }

    pub fn hours_worked(&self) -> f64 {
        self.hours_worked
    }

    pub fn overtime_hours(&self) -> f64 {
        self.overtime_hours
    }
}
