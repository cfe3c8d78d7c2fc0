//! Booking widget configuration.
//!
//! Blocked dates and the time-slot list are data, not literals in the UI.
//! The frontend embeds a JSON document and parses it into [`BookingConfig`];
//! anything missing from the document falls back to the defaults below.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Errors raised while loading or checking a [`BookingConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid booking configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("At least one time slot must be configured")]
    NoTimeSlots,
    #[error("Time slot '{0}' is listed more than once")]
    DuplicateTimeSlot(String),
    #[error("Blocked date '{0}' is not in YEAR-MONTH-DAY format")]
    MalformedBlockedDate(String),
}

/// Which day (if any) is selected when the booking page first renders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InitialSelection {
    /// First blocked day of the month, scanning upward from the 1st
    #[default]
    FirstBlocked,
    /// First day that is neither blocked nor in the past
    FirstAvailable,
    /// Start with nothing selected
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Unavailable days as "YEAR-MONTH-DAY" (1-indexed, no zero padding)
    pub blocked_dates: Vec<String>,
    /// Slot labels in display order
    pub time_slots: Vec<String>,
    pub initial_selection: InitialSelection,
    /// Reject malformed blocked-date entries instead of ignoring them
    pub strict_blocked_dates: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            blocked_dates: [
                "2025-4-1", "2025-4-2", "2025-4-3", "2025-4-11", "2025-4-19", "2025-4-16",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            time_slots: [
                "8:00 am", "8:30 am", "9:00 am", "9:30 am",
                "10:00 am", "10:30 am", "11:00 am", "11:30 am",
                "12:00 pm", "12:30 pm", "1:00 pm", "1:30 pm",
                "2:00 pm", "2:30 pm", "3:00 pm", "3:30 pm",
                "4:00 pm", "4:30 pm",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            initial_selection: InitialSelection::default(),
            strict_blocked_dates: false,
        }
    }
}

impl BookingConfig {
    /// Parse and check a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BookingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check slot labels and, depending on strictness, blocked-date entries.
    ///
    /// In permissive mode malformed blocked dates are only logged; they stay in
    /// the set and simply never match a calendar day.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_slots.is_empty() {
            return Err(ConfigError::NoTimeSlots);
        }

        let mut seen = HashSet::new();
        for slot in &self.time_slots {
            if !seen.insert(slot.as_str()) {
                return Err(ConfigError::DuplicateTimeSlot(slot.clone()));
            }
        }

        for entry in &self.blocked_dates {
            if !is_well_formed_blocked_date(entry) {
                if self.strict_blocked_dates {
                    return Err(ConfigError::MalformedBlockedDate(entry.clone()));
                }
                log::warn!("⚠️ CONFIG: blocked date '{}' is malformed and will never match", entry);
            }
        }

        Ok(())
    }
}

/// True for "YEAR-MONTH-DAY" strings that name a real calendar date and use
/// the unpadded form the calendar engine produces.
pub fn is_well_formed_blocked_date(entry: &str) -> bool {
    let parts: Vec<&str> = entry.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return false;
    };

    let (Ok(y), Ok(m), Ok(d)) = (year.parse::<i32>(), month.parse::<u32>(), day.parse::<u32>()) else {
        return false;
    };

    // "2025-04-01" parses but would never match "2025-4-1"
    if m.to_string() != *month || d.to_string() != *day {
        return false;
    }

    chrono::NaiveDate::from_ymd_opt(y, m, d).is_some()
}
