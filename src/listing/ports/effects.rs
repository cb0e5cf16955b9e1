//! Port through which row decisions reach the page.

use crate::workflow::domain::TaskStatus;

/// Presentation effects a renderer applies to one listing row.
///
/// Implementations own the row's markup; the render pass only decides which
/// effects apply.
pub trait RowEffects {
    /// Returns the option values the status control was rendered with.
    ///
    /// Earlier render passes must not change this set; pruning only affects
    /// what the control currently offers.
    fn declared_options(&self) -> Vec<String>;

    /// Makes the status control non-interactive and annotates it.
    fn disable_status_control(&mut self, reason: &str);

    /// Removes every status option not in `allowed`.
    fn retain_status_options(&mut self, allowed: &[TaskStatus]);

    /// Marks the row as overdue.
    ///
    /// Must be idempotent: marking an already-marked row changes nothing.
    /// Overdue styling replaces the assigned-to-viewer highlight.
    fn mark_overdue(&mut self);

    /// Highlights the row as assigned to the viewer.
    fn highlight_assigned(&mut self);
}
