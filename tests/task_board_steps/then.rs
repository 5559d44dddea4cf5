//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, split_names};
use rstest_bdd_macros::then;
use taskboard::task::{domain::TaskDomainError, services::TaskSessionError};

#[then("the last action succeeds")]
fn last_action_succeeds(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing action result"))?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected success, got {err}"));
    }
    Ok(())
}

#[then("the last action fails with a not found error")]
fn last_action_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing action result"))?;
    if !matches!(
        result,
        Err(TaskSessionError::Domain(TaskDomainError::NotFound(_)))
    ) {
        return Err(eyre::eyre!("expected NotFound error, got {result:?}"));
    }
    Ok(())
}

#[then("the board holds {count:usize} tasks")]
fn board_holds(world: &BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let actual = world.session.all_tasks().len();
    eyre::ensure!(actual == count, "expected {count} tasks, found {actual}");
    Ok(())
}

#[then(r#"the visible list is "{names}""#)]
fn visible_list_is(world: &mut BoardWorld, names: String) -> Result<(), eyre::Report> {
    let expected = split_names(&names);
    let actual = world.visible_names();
    eyre::ensure!(
        actual == expected,
        "expected visible list {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then("the form is submittable")]
fn form_is_submittable(world: &BoardWorld) -> Result<(), eyre::Report> {
    let form = world
        .form
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing form"))?;
    eyre::ensure!(form.is_submittable(), "expected a submittable form");
    Ok(())
}

#[then("the form is not submittable")]
fn form_is_not_submittable(world: &BoardWorld) -> Result<(), eyre::Report> {
    let form = world
        .form
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing form"))?;
    eyre::ensure!(!form.is_submittable(), "expected an unsubmittable form");
    Ok(())
}
