//! Overdue classification for task listing rows.

use crate::deadline::{
    DeadlineConfig,
    domain::{DeadlineVerdict, ViewContext, parse_deadline},
};
use chrono::{Days, NaiveDate};
use mockable::Clock;
use tracing::debug;

/// Classifies deadline text relative to today.
///
/// Classification is gated on the view: only listings filtered to a status
/// still awaiting action mark rows as overdue.
#[derive(Debug, Clone, Default)]
pub struct DeadlineClassifier {
    config: DeadlineConfig,
}

impl DeadlineClassifier {
    /// Creates a classifier with the given configuration.
    #[must_use]
    pub const fn new(config: DeadlineConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &DeadlineConfig {
        &self.config
    }

    /// Resolves today's calendar date from `clock`'s local time.
    #[must_use]
    pub fn today(clock: &impl Clock) -> NaiveDate {
        clock.local().date_naive()
    }

    /// Returns `true` when `view` is the task list filtered to an active
    /// status.
    #[must_use]
    pub fn is_classification_active(&self, view: &ViewContext) -> bool {
        view.path() == self.config.task_list_path
            && view
                .status_filter()
                .is_some_and(|status| self.config.is_active_status(status))
    }

    /// Parses deadline text into a calendar date.
    ///
    /// See [`parse_deadline`] for the accepted formats.
    #[must_use]
    pub fn parse_deadline(&self, text: &str) -> Option<NaiveDate> {
        parse_deadline(text)
    }

    /// Returns `true` when `active` holds and the deadline is strictly before
    /// `today`.
    ///
    /// Unparseable text is never overdue.
    #[must_use]
    pub fn is_overdue(&self, deadline_text: &str, today: NaiveDate, active: bool) -> bool {
        if !active {
            return false;
        }
        let Some(deadline) = self.parse_deadline(deadline_text) else {
            debug!(deadline_text, "deadline text not recognised, treating as on time");
            return false;
        };
        deadline < today
    }

    /// Classifies a row's deadline within `view`.
    #[must_use]
    pub fn classify(
        &self,
        deadline_text: &str,
        today: NaiveDate,
        view: &ViewContext,
    ) -> DeadlineVerdict {
        let active = self.is_classification_active(view);
        DeadlineVerdict::from(self.is_overdue(deadline_text, today, active))
    }

    /// Returns `true` when a task in `status` is due exactly
    /// `reminder_lead_days` after `today`.
    #[must_use]
    pub fn needs_reminder(&self, deadline: NaiveDate, status: &str, today: NaiveDate) -> bool {
        if !self.config.is_active_status(status) {
            return false;
        }
        today
            .checked_add_days(Days::new(u64::from(self.config.reminder_lead_days)))
            .is_some_and(|due| due == deadline)
    }
}
