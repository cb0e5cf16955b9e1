//! Then steps for status workflow BDD scenarios.

use super::world::StatusWorkflowWorld;
use rstest_bdd_macros::then;
use taskflow::workflow::domain::{TaskStatus, WorkflowDecision};

fn last_decision(world: &StatusWorkflowWorld) -> Result<&WorkflowDecision, eyre::Report> {
    world
        .last_decision
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing decision in scenario world"))
}

#[then("the status control is editable")]
fn control_is_editable(world: &StatusWorkflowWorld) -> Result<(), eyre::Report> {
    let decision = last_decision(world)?;
    if !decision.is_editable() {
        return Err(eyre::eyre!(
            "expected editable control, denied with {:?}",
            decision.reason()
        ));
    }
    Ok(())
}

#[then(r#"the status control is read-only with reason "{reason}""#)]
fn control_is_read_only(world: &StatusWorkflowWorld, reason: String) -> Result<(), eyre::Report> {
    let decision = last_decision(world)?;
    if decision.reason() != Some(reason.as_str()) {
        return Err(eyre::eyre!(
            "expected read-only reason '{reason}', found {:?}",
            decision.reason()
        ));
    }
    Ok(())
}

#[then(r#"the status control offers "{statuses}""#)]
fn control_offers(world: &StatusWorkflowWorld, statuses: String) -> Result<(), eyre::Report> {
    let expected = statuses
        .split(',')
        .map(TaskStatus::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let decision = last_decision(world)?;
    if decision.allowed_next_statuses() != expected.as_slice() {
        return Err(eyre::eyre!(
            "expected options {expected:?}, found {:?}",
            decision.allowed_next_statuses()
        ));
    }
    Ok(())
}

#[then(r#"the submission is accepted as "{status}""#)]
fn submission_accepted(world: &StatusWorkflowWorld, status: String) -> Result<(), eyre::Report> {
    let result = world
        .last_submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;
    let accepted = result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected rejection: {err}"))?;
    if accepted.as_str() != status {
        return Err(eyre::eyre!("expected {status}, accepted {accepted}"));
    }
    Ok(())
}

#[then(r#"the submission is rejected with "{message}""#)]
fn submission_rejected(world: &StatusWorkflowWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;
    match result {
        Err(err) if err.to_string() == message => Ok(()),
        other => Err(eyre::eyre!("expected rejection '{message}', got {other:?}")),
    }
}
