//! Calendar and blocked-date engine.
//!
//! Everything here is a pure function of the displayed month, the current
//! date and the blocked-date set. The UI only renders what this module
//! computes; it never decides on its own whether a day can be clicked.

use crate::config::InitialSelection;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Rendering class for a calendar cell, in priority order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// The day currently chosen for the booking
    Selected,
    /// Pre-blocked, never clickable
    Blocked,
    Weekend,
    Weekday,
}

/// A single day of the displayed month with its derived flags
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    pub day: u32,
    pub weekday: Weekday,
    pub is_weekend: bool,
    pub is_blocked: bool,
    pub is_past: bool,
    pub is_selected: bool,
}

impl CalendarDay {
    pub fn day_type(&self) -> CalendarDayType {
        if self.is_selected {
            CalendarDayType::Selected
        } else if self.is_blocked {
            CalendarDayType::Blocked
        } else if self.is_weekend {
            CalendarDayType::Weekend
        } else {
            CalendarDayType::Weekday
        }
    }

    /// Whether a click on this cell may change the selection
    pub fn is_clickable(&self) -> bool {
        !self.is_blocked && !self.is_past
    }
}

/// One month of the calendar as seen from a fixed "today"
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMonthView {
    year: i32,
    /// 1-12
    month: u32,
    today: NaiveDate,
    blocked: HashSet<String>,
}

impl CalendarMonthView {
    /// Build the view for an explicit month. Returns `None` for a month
    /// outside 1-12.
    pub fn new<S: AsRef<str>>(year: i32, month: u32, today: NaiveDate, blocked_dates: &[S]) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self {
            year,
            month,
            today,
            blocked: blocked_dates.iter().map(|s| s.as_ref().to_string()).collect(),
        })
    }

    /// The view for the month that contains `today`
    pub fn for_today<S: AsRef<str>>(today: NaiveDate, blocked_dates: &[S]) -> Self {
        Self {
            year: today.year(),
            month: today.month(),
            today,
            blocked: blocked_dates.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }

    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Weekday of the 1st, used to pad the first grid row
    pub fn first_weekday(&self) -> Weekday {
        self.date(1).map(|d| d.weekday()).unwrap_or(Weekday::Mon)
    }

    pub fn contains(&self, day: u32) -> bool {
        day >= 1 && day <= self.days_in_month()
    }

    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Key used to look a day up in the blocked set, e.g. "2025-4-1"
    pub fn blocked_key(&self, day: u32) -> String {
        format!("{}-{}-{}", self.year, self.month, day)
    }

    /// Exact string match against the configured blocked dates
    pub fn is_blocked(&self, day: u32) -> bool {
        self.blocked.contains(&self.blocked_key(day))
    }

    pub fn is_weekend(&self, day: u32) -> bool {
        matches!(self.date(day).map(|d| d.weekday()), Some(Weekday::Sat | Weekday::Sun))
    }

    /// Strictly before today; today itself is never past
    pub fn is_past(&self, day: u32) -> bool {
        self.date(day).is_some_and(|d| d < self.today)
    }

    /// A user click on `day` may select it
    pub fn is_selectable(&self, day: u32) -> bool {
        self.contains(day) && !self.is_blocked(day) && !self.is_past(day)
    }

    /// Derive every day of the month, flagging `selected` if present
    pub fn days(&self, selected: Option<u32>) -> Vec<CalendarDay> {
        (1..=self.days_in_month())
            .filter_map(|day| {
                let date = self.date(day)?;
                Some(CalendarDay {
                    day,
                    weekday: date.weekday(),
                    is_weekend: self.is_weekend(day),
                    is_blocked: self.is_blocked(day),
                    is_past: self.is_past(day),
                    is_selected: selected == Some(day),
                })
            })
            .collect()
    }

    /// The day selected on first render, scanning upward from the 1st.
    ///
    /// `FirstBlocked` deliberately picks a day the user could not click.
    pub fn initial_selection(&self, policy: InitialSelection) -> Option<u32> {
        let mut days = 1..=self.days_in_month();
        match policy {
            InitialSelection::FirstBlocked => days.find(|&day| self.is_blocked(day)),
            InitialSelection::FirstAvailable => days.find(|&day| self.is_selectable(day)),
            InitialSelection::None => None,
        }
    }
}

/// Get days in a month, accounting for leap years
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) { 29 } else { 28 }
        }
        _ => 0,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("Unknown")
}
