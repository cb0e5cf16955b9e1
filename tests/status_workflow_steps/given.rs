//! Given steps for status workflow BDD scenarios.

use super::world::{PendingTask, StatusWorkflowWorld};
use rstest_bdd_macros::given;
use taskflow::workflow::domain::UserIdentity;

#[given(r#"a "{status}" task assigned to "{assignee}" by "{assigner}""#)]
fn task_with_participants(
    world: &mut StatusWorkflowWorld,
    status: String,
    assignee: String,
    assigner: String,
) {
    world.task = Some(PendingTask {
        status,
        assignee: UserIdentity::new(assignee),
        assigner: UserIdentity::new(assigner),
    });
}

#[given(r#"the viewer is "{viewer}""#)]
fn viewer_is(world: &mut StatusWorkflowWorld, viewer: String) {
    world.viewer = Some(UserIdentity::new(viewer));
}
