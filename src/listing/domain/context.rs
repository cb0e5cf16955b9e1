//! Values fixed for the duration of one render pass.

use crate::{
    deadline::{domain::ViewContext, services::DeadlineClassifier},
    workflow::domain::UserIdentity,
};
use chrono::NaiveDate;
use mockable::Clock;

/// Viewer, today and view shared by every row of a render pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    viewer: UserIdentity,
    today: NaiveDate,
    view: ViewContext,
}

impl RenderContext {
    /// Creates a context from explicit values.
    #[must_use]
    pub const fn new(viewer: UserIdentity, today: NaiveDate, view: ViewContext) -> Self {
        Self {
            viewer,
            today,
            view,
        }
    }

    /// Creates a context whose `today` is read from `clock`.
    #[must_use]
    pub fn from_clock(viewer: UserIdentity, view: ViewContext, clock: &impl Clock) -> Self {
        Self::new(viewer, DeadlineClassifier::today(clock), view)
    }

    /// Returns the viewing user.
    #[must_use]
    pub const fn viewer(&self) -> &UserIdentity {
        &self.viewer
    }

    /// Returns today's date.
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Returns the listing view.
    #[must_use]
    pub const fn view(&self) -> &ViewContext {
        &self.view
    }
}
