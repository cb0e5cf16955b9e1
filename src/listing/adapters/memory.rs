//! In-memory row that records applied effects.

use crate::{listing::ports::RowEffects, workflow::domain::TaskStatus};

/// Visual marker applied to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowStyle {
    /// Light green background with a green left border.
    AssignedToViewer,
    /// Overdue styling.
    Overdue,
}

/// Row state kept in memory instead of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedRow {
    declared: Vec<String>,
    options: Vec<String>,
    disabled_reason: Option<String>,
    styles: Vec<RowStyle>,
    overdue_marked: bool,
}

impl RecordedRow {
    /// Creates a row whose status control offers `options`.
    #[must_use]
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let declared: Vec<String> = options.into_iter().map(Into::into).collect();
        Self {
            options: declared.clone(),
            declared,
            ..Self::default()
        }
    }

    /// Creates a row offering every status.
    #[must_use]
    pub fn with_all_statuses() -> Self {
        Self::new(TaskStatus::ALL.map(TaskStatus::as_str))
    }

    /// Returns the options left on the status control.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns the annotation of a disabled control.
    #[must_use]
    pub fn disabled_reason(&self) -> Option<&str> {
        self.disabled_reason.as_deref()
    }

    /// Returns `true` when the status control was disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled_reason.is_some()
    }

    /// Returns the styles applied to the row, in application order.
    #[must_use]
    pub fn styles(&self) -> &[RowStyle] {
        &self.styles
    }

    /// Returns how many overdue markers the row carries.
    #[must_use]
    pub fn overdue_marker_count(&self) -> usize {
        self.count_style(RowStyle::Overdue)
    }

    /// Returns `true` when the assigned-to-viewer highlight is present.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.count_style(RowStyle::AssignedToViewer) > 0
    }

    fn count_style(&self, style: RowStyle) -> usize {
        self.styles.iter().filter(|applied| **applied == style).count()
    }
}

impl RowEffects for RecordedRow {
    fn declared_options(&self) -> Vec<String> {
        self.declared.clone()
    }

    fn disable_status_control(&mut self, reason: &str) {
        self.disabled_reason = Some(reason.to_owned());
    }

    fn retain_status_options(&mut self, allowed: &[TaskStatus]) {
        self.options
            .retain(|value| allowed.iter().any(|status| status.as_str() == value));
    }

    fn mark_overdue(&mut self) {
        if self.overdue_marked {
            return;
        }
        self.overdue_marked = true;
        self.styles.retain(|style| *style != RowStyle::AssignedToViewer);
        self.styles.push(RowStyle::Overdue);
    }

    fn highlight_assigned(&mut self) {
        if self.overdue_marked || self.is_highlighted() {
            return;
        }
        self.styles.push(RowStyle::AssignedToViewer);
    }
}
