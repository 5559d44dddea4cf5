//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, split_names};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::task::{domain::NewTaskData, form::FieldInput, store::TaskAction};

#[given("an empty task board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.session.all_tasks().is_empty(),
        "fresh world should start empty"
    );
    Ok(())
}

#[given(r#"a task board with tasks "{names}""#)]
fn board_with_tasks(world: &mut BoardWorld, names: String) -> Result<(), eyre::Report> {
    for name in split_names(&names) {
        world
            .session
            .dispatch(TaskAction::create(NewTaskData::new(name)))
            .wrap_err("seed task for scenario")?;
    }
    Ok(())
}

#[given(r#"a create form named "{name}""#)]
fn create_form_named(world: &mut BoardWorld, name: String) {
    let form = world
        .session
        .create_form()
        .on_field_change(FieldInput::Name(name));
    world.form = Some(form);
}
