//! Then steps for task CRUD BDD scenarios.

use super::world::{TaskBoardWorld, run_async};
use rstest_bdd_macros::then;
use taskboard::task::ports::TaskRepository;

#[then("the response status is {status:u16}")]
fn response_status_is(world: &TaskBoardWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world
        .last_status
        .ok_or_else(|| eyre::eyre!("no response recorded"))?;
    eyre::ensure!(
        actual.as_u16() == status,
        "expected status {status}, got {actual} with body {:?}",
        world.last_body
    );
    Ok(())
}

#[then("the task is incomplete with an empty description")]
fn task_is_incomplete(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let task = &world.last_body()?["data"];
    eyre::ensure!(task["completed"] == false, "expected completed:false in {task}");
    eyre::ensure!(task["description"] == "", "expected empty description in {task}");
    Ok(())
}

#[then(r#"the task is completed with title "{title}""#)]
fn task_is_completed_with_title(world: &TaskBoardWorld, title: String) -> Result<(), eyre::Report> {
    let task = &world.last_body()?["data"];
    eyre::ensure!(task["completed"] == true, "expected completed:true in {task}");
    eyre::ensure!(task["title"] == title.as_str(), "expected title {title} in {task}");
    Ok(())
}

#[then(r#"the error message is "{message}""#)]
fn error_message_is(world: &TaskBoardWorld, message: String) -> Result<(), eyre::Report> {
    let body = world.last_body()?;
    eyre::ensure!(body["success"] == false, "expected failure envelope, got {body}");
    eyre::ensure!(
        body["message"] == message.as_str(),
        "expected message {message:?}, got {body}"
    );
    Ok(())
}

#[then("the response reports failure")]
fn response_reports_failure(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let body = world.last_body()?;
    eyre::ensure!(body["success"] == false, "expected failure envelope, got {body}");
    eyre::ensure!(body["message"].is_string(), "failure should carry a message: {body}");
    Ok(())
}

#[then("the task board is empty")]
fn task_board_is_empty(world: &TaskBoardWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.repository.find_all())?;
    eyre::ensure!(tasks.is_empty(), "expected no stored tasks, found {}", tasks.len());
    Ok(())
}
