//! Booking page state and its transitions.
//!
//! [`BookingState`] is an immutable record. Every user action maps to one
//! method that returns the next state, so a render never observes a
//! half-applied update.

use crate::calendar::CalendarMonthView;
use crate::config::{BookingConfig, InitialSelection};
use crate::form::{BookingField, ContactField, ContactForm, ValidationErrors};
use crate::sink::{BookingConfirmation, ConfirmationSink};
use crate::slots::TimeSlots;
use chrono::NaiveDate;

pub const NAME_REQUIRED: &str = "Name is required";
pub const DATE_REQUIRED: &str = "Please select a date";
pub const TIME_REQUIRED: &str = "Please select a time";

/// Read-only inputs shared by every transition: the displayed month and the
/// configured slots.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingContext {
    pub calendar: CalendarMonthView,
    pub slots: TimeSlots,
    pub initial_selection: InitialSelection,
}

impl BookingContext {
    /// Context for the month containing `today`
    pub fn from_config(config: &BookingConfig, today: NaiveDate) -> Self {
        Self {
            calendar: CalendarMonthView::for_today(today, &config.blocked_dates),
            slots: TimeSlots::new(config.time_slots.iter().cloned()),
            initial_selection: config.initial_selection,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingPhase {
    #[default]
    Editing,
    /// Validation in progress; never outlives a single submit call
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Confirmed(BookingConfirmation),
    Rejected(ValidationErrors),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingState {
    pub selected_date: Option<u32>,
    pub selected_time: Option<String>,
    pub form: ContactForm,
    pub errors: ValidationErrors,
    pub phase: BookingPhase,
}

impl BookingState {
    /// State on first render, with the configured initial day selection
    pub fn initial(ctx: &BookingContext) -> Self {
        let selected_date = ctx.calendar.initial_selection(ctx.initial_selection);
        if let Some(day) = selected_date {
            log::debug!(
                "📅 BOOKING: initial selection {} {} ({:?})",
                ctx.calendar.month_name(),
                day,
                ctx.initial_selection
            );
        }
        Self {
            selected_date,
            ..Self::default()
        }
    }

    /// Select a day of the displayed month.
    ///
    /// Blocked, past and out-of-range days leave the state unchanged.
    /// Any accepted click clears the selected time.
    pub fn select_day(&self, ctx: &BookingContext, day: u32) -> Self {
        if !ctx.calendar.is_selectable(day) {
            log::debug!("📅 BOOKING: ignoring click on unavailable day {}", day);
            return self.clone();
        }
        Self {
            selected_date: Some(day),
            selected_time: None,
            ..self.clone()
        }
    }

    /// Select one of the configured time slots; unknown labels are ignored
    pub fn select_time(&self, ctx: &BookingContext, label: &str) -> Self {
        if !ctx.slots.contains(label) {
            log::warn!("📅 BOOKING: ignoring unknown time slot '{}'", label);
            return self.clone();
        }
        Self {
            selected_time: Some(label.to_string()),
            ..self.clone()
        }
    }

    /// Replace one contact field and drop that field's error only
    pub fn update_field(&self, field: ContactField, value: impl Into<String>) -> Self {
        Self {
            form: self.form.with(field, value),
            errors: self.errors.without(field),
            ..self.clone()
        }
    }

    /// Errors the current state would produce on submit
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if !self.form.has_name() {
            errors.insert(ContactField::Name, NAME_REQUIRED);
        }
        if self.selected_date.is_none() {
            errors.insert(BookingField::Date, DATE_REQUIRED);
        }
        if self.selected_time.is_none() {
            errors.insert(BookingField::Time, TIME_REQUIRED);
        }
        errors
    }

    /// Validate and, when clean, report the booking to `sink`.
    ///
    /// Both outcomes return to `Editing`. On rejection the error map is
    /// replaced wholesale; on confirmation it is cleared.
    pub fn submit<S: ConfirmationSink + ?Sized>(&self, ctx: &BookingContext, sink: &S) -> (Self, SubmitOutcome) {
        let submitting = Self {
            phase: BookingPhase::Submitting,
            ..self.clone()
        };

        let errors = submitting.validate();
        let (date, time) = match (submitting.selected_date, submitting.selected_time.clone()) {
            (Some(date), Some(time)) if errors.is_empty() => (date, time),
            _ => {
                log::info!("📅 BOOKING: submit rejected with {} validation error(s)", errors.len());
                let next = Self {
                    errors: errors.clone(),
                    phase: BookingPhase::Editing,
                    ..submitting
                };
                return (next, SubmitOutcome::Rejected(errors));
            }
        };

        let confirmation = BookingConfirmation {
            year: ctx.calendar.year(),
            month: ctx.calendar.month(),
            date,
            time,
            contact: submitting.form.clone(),
        };
        sink.booking_confirmed(&confirmation);
        let next = Self {
            errors: ValidationErrors::new(),
            phase: BookingPhase::Editing,
            ..submitting
        };
        (next, SubmitOutcome::Confirmed(confirmation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn april_context(today: NaiveDate) -> BookingContext {
        let config = BookingConfig::default();
        BookingContext {
            calendar: CalendarMonthView::new(2025, 4, today, &config.blocked_dates).unwrap(),
            slots: TimeSlots::new(config.time_slots),
            initial_selection: InitialSelection::FirstBlocked,
        }
    }

    #[test]
    fn test_april_2025_initial_state() {
        let ctx = april_context(ymd(2025, 3, 20));
        let state = BookingState::initial(&ctx);

        assert_eq!(state.selected_date, Some(1));
        assert_eq!(state.selected_time, None);
        assert_eq!(state.phase, BookingPhase::Editing);
        assert!(state.errors.is_empty());

        let blocked: Vec<u32> = ctx.calendar.days(state.selected_date)
            .into_iter()
            .filter(|d| d.is_blocked)
            .map(|d| d.day)
            .collect();
        assert_eq!(blocked, vec![1, 2, 3, 11, 16, 19]);
    }

    #[test]
    fn test_from_config_tracks_today() {
        let ctx = BookingContext::from_config(&BookingConfig::default(), ymd(2025, 4, 5));
        assert_eq!((ctx.calendar.year(), ctx.calendar.month()), (2025, 4));
        assert_eq!(ctx.slots.len(), 18);
        assert_eq!(BookingState::initial(&ctx).selected_date, Some(1));

        let ctx = BookingContext::from_config(&BookingConfig::default(), ymd(2026, 10, 18));
        assert_eq!(BookingState::initial(&ctx).selected_date, None);
    }

    #[test]
    fn test_first_available_policy_skips_blocked_days() {
        let ctx = BookingContext {
            initial_selection: InitialSelection::FirstAvailable,
            ..april_context(ymd(2025, 3, 20))
        };
        assert_eq!(BookingState::initial(&ctx).selected_date, Some(4));
    }

    #[test]
    fn test_clicking_blocked_day_never_changes_selection() {
        let ctx = april_context(ymd(2025, 3, 20));
        let state = BookingState::initial(&ctx)
            .select_day(&ctx, 7)
            .select_time(&ctx, "10:00 am");

        for day in [1, 2, 3, 11, 16, 19] {
            let next = state.select_day(&ctx, day);
            assert_eq!(next, state, "blocked day {} changed the state", day);
        }
    }

    #[test]
    fn test_clicking_past_or_missing_day_is_a_noop() {
        let ctx = april_context(ymd(2025, 4, 10));
        let state = BookingState::default();
        assert_eq!(state.select_day(&ctx, 9), state);
        assert_eq!(state.select_day(&ctx, 0), state);
        assert_eq!(state.select_day(&ctx, 31), state);
        assert_eq!(state.select_day(&ctx, 10).selected_date, Some(10));
    }

    #[test]
    fn test_changing_date_resets_time() {
        let ctx = april_context(ymd(2025, 3, 20));
        let state = BookingState::initial(&ctx)
            .select_day(&ctx, 7)
            .select_time(&ctx, "2:30 pm");
        assert_eq!(state.selected_time.as_deref(), Some("2:30 pm"));

        let moved = state.select_day(&ctx, 8);
        assert_eq!(moved.selected_date, Some(8));
        assert_eq!(moved.selected_time, None);

        // Re-selecting the same day also clears the time
        let same = state.select_day(&ctx, 7);
        assert_eq!(same.selected_time, None);
    }

    #[test]
    fn test_any_configured_slot_can_be_selected() {
        let ctx = april_context(ymd(2025, 3, 20));
        let state = BookingState::default();
        for label in ctx.slots.labels() {
            assert_eq!(state.select_time(&ctx, label).selected_time.as_deref(), Some(label.as_str()));
        }
        assert_eq!(state.select_time(&ctx, "6:00 pm"), state);
    }

    #[test]
    fn test_submit_with_nothing_filled_yields_three_errors() {
        let ctx = april_context(ymd(2025, 3, 20));
        let sink = RecordingSink::new();
        let state = BookingState::default().update_field(ContactField::Name, "   ");

        let (next, outcome) = state.submit(&ctx, &sink);

        assert_eq!(next.errors.len(), 3);
        assert_eq!(next.errors.get(ContactField::Name), Some(NAME_REQUIRED));
        assert_eq!(next.errors.get(BookingField::Date), Some(DATE_REQUIRED));
        assert_eq!(next.errors.get(BookingField::Time), Some(TIME_REQUIRED));
        assert_eq!(outcome, SubmitOutcome::Rejected(next.errors.clone()));
        assert_eq!(next.phase, BookingPhase::Editing);
        assert!(sink.confirmations().is_empty());
    }

    #[test]
    fn test_failed_submit_replaces_errors_wholesale() {
        let ctx = april_context(ymd(2025, 3, 20));
        let sink = RecordingSink::new();
        let (state, _) = BookingState::default().submit(&ctx, &sink);
        assert_eq!(state.errors.len(), 3);

        let state = state
            .select_day(&ctx, 7)
            .select_time(&ctx, "9:00 am");
        let (state, _) = state.submit(&ctx, &sink);

        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors.get(ContactField::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_valid_submit_confirms_exactly_once() {
        let ctx = april_context(ymd(2025, 3, 20));
        let sink = RecordingSink::new();
        let state = BookingState::initial(&ctx)
            .select_day(&ctx, 7)
            .select_time(&ctx, "11:30 am")
            .update_field(ContactField::Name, "Jane Doe");

        let (next, outcome) = state.submit(&ctx, &sink);

        let expected = BookingConfirmation {
            year: 2025,
            month: 4,
            date: 7,
            time: "11:30 am".to_string(),
            contact: ContactForm {
                name: "Jane Doe".to_string(),
                email: String::new(),
                address: String::new(),
                phone: String::new(),
                notes: String::new(),
            },
        };
        assert_eq!(outcome, SubmitOutcome::Confirmed(expected.clone()));
        assert_eq!(sink.confirmations(), vec![expected]);
        assert!(next.errors.is_empty());
        assert_eq!(next.phase, BookingPhase::Editing);
        assert_eq!(next.selected_date, Some(7));
    }

    #[test]
    fn test_successful_submit_clears_stale_errors() {
        let ctx = april_context(ymd(2025, 3, 20));
        let sink = RecordingSink::new();
        let (state, _) = BookingState::default()
            .update_field(ContactField::Name, "Jane Doe")
            .submit(&ctx, &sink);
        assert_eq!(state.errors.get(BookingField::Date), Some(DATE_REQUIRED));

        let (state, outcome) = state
            .select_day(&ctx, 7)
            .select_time(&ctx, "9:00 am")
            .submit(&ctx, &sink);

        assert!(matches!(outcome, SubmitOutcome::Confirmed(_)));
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_auto_selected_blocked_day_can_be_submitted() {
        let ctx = april_context(ymd(2025, 3, 20));
        let sink = RecordingSink::new();
        let state = BookingState::initial(&ctx)
            .select_time(&ctx, "8:00 am")
            .update_field(ContactField::Name, "Jane Doe");

        let (_, outcome) = state.submit(&ctx, &sink);
        assert!(matches!(outcome, SubmitOutcome::Confirmed(c) if c.date == 1));
    }

    #[test]
    fn test_editing_clears_only_that_fields_error() {
        let ctx = april_context(ymd(2025, 3, 20));
        let sink = RecordingSink::new();
        let (state, _) = BookingState::default().submit(&ctx, &sink);

        let state = state.update_field(ContactField::Email, "jane@example.com");
        assert_eq!(state.errors.get(ContactField::Name), Some(NAME_REQUIRED));
        assert_eq!(state.errors.len(), 3);

        let state = state.update_field(ContactField::Name, "J");
        assert_eq!(state.errors.get(ContactField::Name), None);
        assert_eq!(state.errors.get(BookingField::Date), Some(DATE_REQUIRED));
        assert_eq!(state.form.email, "jane@example.com");
        assert_eq!(state.form.name, "J");
    }

    #[test]
    fn test_selecting_date_or_time_keeps_existing_errors() {
        let ctx = april_context(ymd(2025, 3, 20));
        let sink = RecordingSink::new();
        let (state, _) = BookingState::default().submit(&ctx, &sink);

        let state = state.select_day(&ctx, 7).select_time(&ctx, "9:00 am");
        assert_eq!(state.errors.len(), 3);
    }
}
