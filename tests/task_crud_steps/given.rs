//! Given steps for task CRUD BDD scenarios.

use super::world::TaskBoardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an empty task board")]
fn empty_task_board(world: &mut TaskBoardWorld) -> Result<(), eyre::Report> {
    world
        .repository
        .clear()
        .wrap_err("clear in-memory task store")?;
    world.current_task_id = None;
    Ok(())
}
