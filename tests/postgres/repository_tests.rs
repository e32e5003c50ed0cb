//! `PostgreSQL` repository contract tests.

use super::helpers::{TickingClock, execute_in_schema, setup_repository, test_database_url};
use chrono::{TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::rstest;
use taskboard::task::{
    domain::{PersistedTaskData, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn save_then_find_round_trips_all_fields() -> Result<(), eyre::Report> {
    let Some(url) = test_database_url("save_then_find_round_trips_all_fields") else {
        return Ok(());
    };
    let (_schema, repo) = setup_repository(url).await?;
    let clock = TickingClock::default();
    let task = Task::new("Round trip", Some("stored in postgres"), &clock)?;

    let saved = repo.save(&task).await?;
    let found = repo.find_by_id(task.id()).await?;

    eyre::ensure!(saved == task, "save should return the stored task");
    eyre::ensure!(found.as_ref() == Some(&task), "lookup mismatch: {found:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sub_microsecond_precision_is_truncated_on_store() -> Result<(), eyre::Report> {
    let Some(url) = test_database_url("sub_microsecond_precision_is_truncated_on_store") else {
        return Ok(());
    };
    let (_schema, repo) = setup_repository(url).await?;
    let created_at = Utc
        .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .ok_or_else(|| eyre::eyre!("invalid timestamp"))?
        + TimeDelta::nanoseconds(1_234_567);
    let task = Task::from_persisted(PersistedTaskData {
        id: TaskId::new(),
        title: "Precise".to_owned(),
        description: String::new(),
        completed: false,
        created_at,
        updated_at: created_at,
    })?;

    let saved = repo.save(&task).await?;

    eyre::ensure!(
        saved.created_at() == created_at - TimeDelta::nanoseconds(567),
        "expected microsecond truncation, got {}",
        saved.created_at()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_identifier_is_rejected() -> Result<(), eyre::Report> {
    let Some(url) = test_database_url("duplicate_identifier_is_rejected") else {
        return Ok(());
    };
    let (_schema, repo) = setup_repository(url).await?;
    let task = Task::new("Only once", None, &TickingClock::default())?;
    repo.save(&task).await?;

    let result = repo.save(&task).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()),
        "expected DuplicateTask, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_all_orders_newest_first() -> Result<(), eyre::Report> {
    let Some(url) = test_database_url("find_all_orders_newest_first") else {
        return Ok(());
    };
    let (_schema, repo) = setup_repository(url).await?;
    let clock = TickingClock::default();
    let first = Task::new("first", None, &clock)?;
    let second = Task::new("second", None, &clock)?;
    let third = Task::new("third", None, &clock)?;
    for task in [&second, &third, &first] {
        repo.save(task).await?;
    }

    let ids: Vec<TaskId> = repo.find_all().await?.iter().map(Task::id).collect();

    eyre::ensure!(
        ids == vec![third.id(), second.id(), first.id()],
        "unexpected order: {ids:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_mutable_fields_only() -> Result<(), eyre::Report> {
    let Some(url) = test_database_url("update_overwrites_mutable_fields_only") else {
        return Ok(());
    };
    let (_schema, repo) = setup_repository(url).await?;
    let clock = TickingClock::default();
    let mut task = Task::new("Before", Some("old"), &clock)?;
    repo.save(&task).await?;

    task.update_title("After", &clock)?;
    task.update_description("", &clock)?;
    task.mark_completed(&clock);
    let updated = repo.update(&task).await?;

    eyre::ensure!(updated == task, "update should return the stored task");
    eyre::ensure!(updated.updated_at() > updated.created_at(), "updatedAt must advance");
    let found = repo.find_by_id(task.id()).await?;
    eyre::ensure!(found == Some(task), "stored row should match: {found:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_is_not_found() -> Result<(), eyre::Report> {
    let Some(url) = test_database_url("update_missing_task_is_not_found") else {
        return Ok(());
    };
    let (_schema, repo) = setup_repository(url).await?;
    let task = Task::new("Never saved", None, &TickingClock::default())?;

    let result = repo.update(&task).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::NotFound(id)) if id == task.id()),
        "expected NotFound, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_and_exists_agree() -> Result<(), eyre::Report> {
    let Some(url) = test_database_url("delete_and_exists_agree") else {
        return Ok(());
    };
    let (_schema, repo) = setup_repository(url).await?;
    let task = Task::new("Disposable", None, &TickingClock::default())?;
    repo.save(&task).await?;

    eyre::ensure!(repo.exists(task.id()).await?, "saved task should exist");
    eyre::ensure!(repo.delete(task.id()).await?, "first delete removes the row");
    eyre::ensure!(!repo.delete(task.id()).await?, "second delete removes nothing");
    eyre::ensure!(!repo.exists(task.id()).await?, "deleted task should not exist");
    eyre::ensure!(
        repo.find_by_id(task.id()).await?.is_none(),
        "deleted task should not be found"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupt_rows_surface_as_persistence_errors() -> Result<(), eyre::Report> {
    let Some(url) = test_database_url("corrupt_rows_surface_as_persistence_errors") else {
        return Ok(());
    };
    let (schema, repo) = setup_repository(url).await?;
    let now = TickingClock::default().utc();
    let id = TaskId::new();
    let overlong = "d".repeat(1001);
    execute_in_schema(
        &schema,
        &format!(
            "ALTER TABLE tasks ALTER COLUMN description TYPE TEXT; \
             INSERT INTO tasks (id, title, description, completed, created_at, updated_at) \
             VALUES ('{id}', 'Corrupt', '{overlong}', FALSE, '{now}', '{now}')",
            now = now.to_rfc3339(),
        ),
    )?;

    let result = repo.find_by_id(id).await;

    eyre::ensure!(
        matches!(result, Err(TaskRepositoryError::Persistence(_))),
        "expected Persistence error, got {result:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn ensure_schema_is_idempotent() -> Result<(), eyre::Report> {
    let Some(url) = test_database_url("ensure_schema_is_idempotent") else {
        return Ok(());
    };
    let (_schema, repo) = setup_repository(url).await?;
    let task = Task::new("Survives", None, &TickingClock::default())?;
    repo.save(&task).await?;

    repo.ensure_schema().await?;

    eyre::ensure!(repo.exists(task.id()).await?, "existing rows must survive");
    Ok(())
}
