//! When steps for status workflow BDD scenarios.

use super::world::StatusWorkflowWorld;
use rstest_bdd_macros::when;

#[when("the status control is evaluated")]
fn evaluate_status_control(world: &mut StatusWorkflowWorld) -> Result<(), eyre::Report> {
    let (task, viewer) = world.task_and_viewer()?;
    let decision = world
        .policy
        .evaluate(&task.status, viewer, &task.assignee, &task.assigner);
    world.last_decision = Some(decision);
    Ok(())
}

#[when(r#"the viewer submits "{requested}""#)]
fn submit_status(world: &mut StatusWorkflowWorld, requested: String) -> Result<(), eyre::Report> {
    let (task, viewer) = world.task_and_viewer()?;
    let result = world.policy.authorize_submission(
        &task.status,
        &requested,
        viewer,
        &task.assignee,
        &task.assigner,
    );
    world.last_submission = Some(result);
    Ok(())
}
