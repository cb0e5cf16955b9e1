//! Configuration for deadline classification.
//!
//! Defaults describe the admin task listing: the changelist lives at
//! `/admin/tasks/task/` and is filtered through the `status__exact` query
//! parameter.

use serde::Deserialize;
use thiserror::Error;

/// Errors returned while loading a [`DeadlineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document is not valid JSON for this schema.
    #[error("invalid deadline configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The task list path is empty.
    #[error("task list path must not be empty")]
    EmptyTaskListPath,

    /// The status filter parameter name is empty.
    #[error("status filter parameter must not be empty")]
    EmptyFilterParameter,
}

/// Deadline classification settings.
///
/// # Examples
///
/// ```
/// use taskflow::deadline::DeadlineConfig;
///
/// let config = DeadlineConfig::default();
/// assert_eq!(config.status_filter_param, "status__exact");
///
/// let loaded = DeadlineConfig::from_json(r#"{"reminder_lead_days": 2}"#)?;
/// assert_eq!(loaded.reminder_lead_days, 2);
/// assert_eq!(loaded.task_list_path, "/admin/tasks/task/");
/// # Ok::<(), taskflow::deadline::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeadlineConfig {
    /// Route path of the task listing.
    pub task_list_path: String,
    /// Query parameter carrying the status filter.
    pub status_filter_param: String,
    /// Status filter values for which overdue marking applies.
    pub active_statuses: Vec<String>,
    /// How many days ahead of the deadline a reminder is due.
    pub reminder_lead_days: u32,
}

impl Default for DeadlineConfig {
    fn default() -> Self {
        Self {
            task_list_path: "/admin/tasks/task/".to_owned(),
            status_filter_param: "status__exact".to_owned(),
            active_statuses: vec!["PENDING".to_owned(), "IN_PROGRESS".to_owned()],
            reminder_lead_days: 1,
        }
    }
}

impl DeadlineConfig {
    /// Loads a configuration from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and the
    /// `Empty*` variants when a required string is blank.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that required strings are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTaskListPath`] or
    /// [`ConfigError::EmptyFilterParameter`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.task_list_path.trim().is_empty() {
            return Err(ConfigError::EmptyTaskListPath);
        }
        if self.status_filter_param.trim().is_empty() {
            return Err(ConfigError::EmptyFilterParameter);
        }
        Ok(())
    }

    /// Returns `true` when `status` is one of the active statuses.
    #[must_use]
    pub fn is_active_status(&self, status: &str) -> bool {
        self.active_statuses.iter().any(|active| active == status)
    }
}
