//! Tests for overdue classification and reminder selection.

use crate::deadline::{
    DeadlineConfig,
    domain::{DeadlineVerdict, ViewContext},
    services::DeadlineClassifier,
};
use chrono::{Local, NaiveDate, TimeZone};
use mockable::MockClock;
use rstest::{fixture, rstest};

#[fixture]
fn classifier() -> DeadlineClassifier {
    DeadlineClassifier::default()
}

#[fixture]
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
}

fn pending_view() -> ViewContext {
    ViewContext::new("/admin/tasks/task/", Some("PENDING".to_owned()))
}

#[rstest]
#[case("2000-01-01", true)]
#[case("2024-05-31", true)]
#[case("31/05/2024", true)]
#[case("May 31, 2024", true)]
#[case("2024-06-01", false)]
#[case("2024-06-02", false)]
#[case("2999-01-01", false)]
#[case("not a date", false)]
#[case("", false)]
fn is_overdue_compares_calendar_dates(
    classifier: DeadlineClassifier,
    today: NaiveDate,
    #[case] deadline: &str,
    #[case] expected: bool,
) {
    assert_eq!(classifier.is_overdue(deadline, today, true), expected);
}

#[rstest]
#[case("2000-01-01")]
#[case("2024-05-31")]
fn inactive_classification_is_never_overdue(
    classifier: DeadlineClassifier,
    today: NaiveDate,
    #[case] deadline: &str,
) {
    assert!(!classifier.is_overdue(deadline, today, false));
}

#[rstest]
fn same_day_deadline_with_late_time_is_not_overdue(
    classifier: DeadlineClassifier,
    today: NaiveDate,
) {
    assert!(!classifier.is_overdue("2024-06-01 00:00", today, true));
    assert!(!classifier.is_overdue("2024-06-01T23:59:59Z", today, true));
}

#[rstest]
#[case("/admin/tasks/task/", Some("PENDING"), true)]
#[case("/admin/tasks/task/", Some("IN_PROGRESS"), true)]
#[case("/admin/tasks/task/", Some("REVIEW"), false)]
#[case("/admin/tasks/task/", Some("COMPLETED"), false)]
#[case("/admin/tasks/task/", Some("BLOCKED"), false)]
#[case("/admin/tasks/task/", Some("pending"), false)]
#[case("/admin/tasks/task/", None, false)]
#[case("/admin/users/customuser/", Some("PENDING"), false)]
#[case("/admin/tasks/task", Some("PENDING"), false)]
fn classification_is_active_only_on_filtered_task_list(
    classifier: DeadlineClassifier,
    #[case] path: &str,
    #[case] filter: Option<&str>,
    #[case] expected: bool,
) {
    let view = ViewContext::new(path, filter.map(str::to_owned));
    assert_eq!(classifier.is_classification_active(&view), expected);
}

#[rstest]
fn classify_applies_view_gate(classifier: DeadlineClassifier, today: NaiveDate) {
    let review_view = ViewContext::new("/admin/tasks/task/", Some("REVIEW".to_owned()));

    assert_eq!(
        classifier.classify("2000-01-01", today, &pending_view()),
        DeadlineVerdict::OVERDUE
    );
    assert_eq!(
        classifier.classify("2000-01-01", today, &review_view),
        DeadlineVerdict::ON_TIME
    );
    assert!(!classifier.classify("2999-01-01", today, &pending_view()).is_overdue());
}

#[rstest]
fn custom_active_statuses_change_the_gate() {
    let classifier = DeadlineClassifier::new(DeadlineConfig {
        active_statuses: vec!["REVIEW".to_owned()],
        ..DeadlineConfig::default()
    });
    let review_view = ViewContext::new("/admin/tasks/task/", Some("REVIEW".to_owned()));

    assert!(classifier.is_classification_active(&review_view));
    assert!(!classifier.is_classification_active(&pending_view()));
}

#[rstest]
fn today_truncates_clock_time_to_local_date() {
    let noon = Local
        .with_ymd_and_hms(2024, 6, 1, 12, 30, 0)
        .single()
        .expect("unambiguous local time");
    let mut clock = MockClock::new();
    clock.expect_local().times(1).return_const(noon);
    clock.expect_utc().never();

    assert_eq!(
        DeadlineClassifier::today(&clock),
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    );
}

#[rstest]
#[case("2024-06-02", "PENDING", true)]
#[case("2024-06-02", "IN_PROGRESS", true)]
#[case("2024-06-02", "REVIEW", false)]
#[case("2024-06-02", "COMPLETED", false)]
#[case("2024-06-01", "PENDING", false)]
#[case("2024-06-03", "PENDING", false)]
#[case("2024-05-31", "PENDING", false)]
fn reminders_target_active_tasks_due_tomorrow(
    classifier: DeadlineClassifier,
    today: NaiveDate,
    #[case] deadline: &str,
    #[case] status: &str,
    #[case] expected: bool,
) {
    let due = classifier.parse_deadline(deadline).expect("valid deadline");
    assert_eq!(classifier.needs_reminder(due, status, today), expected);
}

#[rstest]
fn reminder_lead_days_are_configurable(today: NaiveDate) {
    let classifier = DeadlineClassifier::new(DeadlineConfig {
        reminder_lead_days: 3,
        ..DeadlineConfig::default()
    });
    let in_three_days = NaiveDate::from_ymd_opt(2024, 6, 4).expect("valid date");
    let tomorrow = NaiveDate::from_ymd_opt(2024, 6, 2).expect("valid date");

    assert!(classifier.needs_reminder(in_three_days, "PENDING", today));
    assert!(!classifier.needs_reminder(tomorrow, "PENDING", today));
}
