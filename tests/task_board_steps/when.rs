//! When steps for task board BDD scenarios.

use super::world::BoardWorld;
use rstest_bdd_macros::when;
use taskboard::task::{
    domain::{NewTaskData, TaskId, TaskPatch},
    form::FieldInput,
    store::TaskAction,
};

#[when(r#"the user creates a task named "{name}""#)]
fn create_task(world: &mut BoardWorld, name: String) {
    let result = world
        .session
        .dispatch(TaskAction::create(NewTaskData::new(name)));
    world.last_result = Some(result);
}

#[when(r#"the user renames task {id:u64} to "{name}""#)]
fn rename_task(world: &mut BoardWorld, id: u64, name: String) {
    let result = world.session.dispatch(TaskAction::update(
        TaskId::new(id),
        TaskPatch::new().with_name(name),
    ));
    world.last_result = Some(result);
}

#[when("the user marks task {id:u64} as completed")]
fn complete_task(world: &mut BoardWorld, id: u64) {
    let result = world.session.dispatch(TaskAction::update(
        TaskId::new(id),
        TaskPatch::new().with_status(true),
    ));
    world.last_result = Some(result);
}

#[when("the user deletes task {id:u64}")]
fn delete_task(world: &mut BoardWorld, id: u64) {
    let result = world.session.dispatch(TaskAction::delete(TaskId::new(id)));
    world.last_result = Some(result);
}

#[when("the user advances the sort mode")]
fn advance_sort(world: &mut BoardWorld) {
    world.query.advance_sort();
}

#[when(r#"the user searches for "{text}""#)]
fn search_for(world: &mut BoardWorld, text: String) {
    world.query.set_search_text(text);
}

#[when("the user filters for completed tasks")]
fn filter_completed(world: &mut BoardWorld) {
    world.query.toggle_status_filter();
}

#[when("the description is set to {length:usize} characters")]
fn set_description(world: &mut BoardWorld, length: usize) -> Result<(), eyre::Report> {
    let form = world
        .form
        .take()
        .ok_or_else(|| eyre::eyre!("missing form in scenario world"))?;
    world.form = Some(form.on_field_change(FieldInput::Desc("x".repeat(length))));
    Ok(())
}
