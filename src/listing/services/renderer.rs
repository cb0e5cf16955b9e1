//! Render pass over a task listing.

use crate::{
    deadline::services::DeadlineClassifier,
    listing::{
        domain::{RenderContext, RenderSummary, RowDecision, TaskRow},
        ports::RowEffects,
    },
    workflow::{domain::StatusSchema, services::WorkflowPolicy},
};
use tracing::{debug, warn};

/// Evaluates listing rows and applies the resulting decisions.
#[derive(Debug, Clone, Default)]
pub struct ListingRenderer {
    policy: WorkflowPolicy,
    classifier: DeadlineClassifier,
}

impl ListingRenderer {
    /// Creates a renderer using `classifier` for deadlines.
    #[must_use]
    pub const fn new(classifier: DeadlineClassifier) -> Self {
        Self {
            policy: WorkflowPolicy::new(),
            classifier,
        }
    }

    /// Returns the workflow policy.
    #[must_use]
    pub const fn policy(&self) -> &WorkflowPolicy {
        &self.policy
    }

    /// Returns the deadline classifier.
    #[must_use]
    pub const fn classifier(&self) -> &DeadlineClassifier {
        &self.classifier
    }

    /// Decides what to apply to `row`.
    ///
    /// Returns `None` for rows without a status control.
    #[must_use]
    pub fn evaluate_row(&self, row: &TaskRow, context: &RenderContext) -> Option<RowDecision> {
        let status = row.status()?;
        let workflow = self
            .policy
            .evaluate(status, context.viewer(), row.assignee(), row.assigner());
        let deadline =
            self.classifier
                .classify(row.deadline_text(), context.today(), context.view());
        Some(RowDecision::new(
            workflow,
            deadline,
            row.assignee() == context.viewer(),
        ))
    }

    /// Applies `decision` to a row.
    pub fn apply(&self, decision: &RowDecision, effects: &mut impl RowEffects) {
        if decision.highlight_assigned() {
            effects.highlight_assigned();
        }
        if let Some(reason) = decision.workflow().reason() {
            effects.disable_status_control(reason);
        }
        effects.retain_status_options(decision.workflow().allowed_next_statuses());
        if decision.deadline().is_overdue() {
            effects.mark_overdue();
        }
    }

    /// Evaluates and applies every row of a listing.
    ///
    /// Rows are independent; the order they arrive in does not affect the
    /// outcome.
    pub fn render<'r, E>(
        &self,
        rows: impl IntoIterator<Item = (&'r TaskRow, &'r mut E)>,
        context: &RenderContext,
    ) -> RenderSummary
    where
        E: RowEffects + 'r,
    {
        let mut summary = RenderSummary::default();
        for (row, effects) in rows {
            let Some(decision) = self.evaluate_row(row, context) else {
                debug!(assignee = %row.assignee(), "row has no status control, skipping");
                summary.skipped += 1;
                continue;
            };
            if summary.schema.is_none() {
                summary.schema = detect_schema(&*effects);
            }
            self.apply(&decision, effects);
            summary.processed += 1;
            if decision.deadline().is_overdue() {
                summary.overdue += 1;
            }
        }
        debug!(
            processed = summary.processed,
            skipped = summary.skipped,
            overdue = summary.overdue,
            "listing render pass finished"
        );
        summary
    }
}

fn detect_schema(effects: &impl RowEffects) -> Option<StatusSchema> {
    let schema = StatusSchema::detect(effects.declared_options())?;
    if schema.needs_migration() {
        warn!("status control lacks BLOCKED; deployment still uses the legacy status table");
    }
    Some(schema)
}
