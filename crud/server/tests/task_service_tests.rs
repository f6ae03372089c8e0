use crud_server::resource::{ResourceService, ResourceServiceError};
use crud_server::task::{TaskPayload, TaskResource};
use sea_orm::DatabaseConnection;

mod common;

pub struct TestContext {
    pub db: DatabaseConnection,
}

async fn setup() -> anyhow::Result<TestContext> {
    let db = common::setup_db().await?;
    Ok(TestContext { db })
}

fn payload(title: &str, description: &str, done: bool) -> TaskPayload {
    TaskPayload {
        title: title.to_string(),
        description: description.to_string(),
        done,
    }
}

#[tokio::test]
async fn can_create_task_with_generated_id() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ResourceService::<TaskResource>::new(&state.db);

    let first = service
        .create(payload("first", "the first task", false))
        .await
        .expect("Failed to create task");
    let second = service
        .create(payload("second", "the second task", true))
        .await
        .expect("Failed to create task");

    assert_eq!(first.title, "first");
    assert_eq!(first.description, "the first task");
    assert!(!first.done);
    assert!(second.id > first.id);

    let fetched = service.get(first.id).await.expect("Failed to get task");
    assert_eq!(fetched, first);
}

#[tokio::test]
async fn can_list_tasks_in_id_order() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ResourceService::<TaskResource>::new(&state.db);

    assert!(service.list().await.unwrap().is_empty());

    let a = service.create(payload("a", "", false)).await.unwrap();
    let b = service.create(payload("b", "", false)).await.unwrap();

    let tasks = service.list().await.expect("Failed to list tasks");
    assert_eq!(tasks, vec![a, b]);
}

#[tokio::test]
async fn can_report_missing_task() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ResourceService::<TaskResource>::new(&state.db);

    let result = service.get(42).await;

    assert!(matches!(
        result,
        Err(ResourceServiceError::NotFound {
            resource: "Task",
            id: 42
        })
    ));
}

#[tokio::test]
async fn can_replace_all_fields_on_update() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ResourceService::<TaskResource>::new(&state.db);
    let created = service.create(payload("old", "old text", false)).await.unwrap();

    let updated = service
        .update(created.id, payload("new", "new text", true))
        .await
        .expect("Failed to update task");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "new");
    assert_eq!(service.get(created.id).await.unwrap(), updated);
}

#[tokio::test]
async fn can_ignore_update_of_missing_task() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ResourceService::<TaskResource>::new(&state.db);

    let echoed = service
        .update(7, payload("ghost", "never stored", true))
        .await
        .expect("Updating a missing task should not fail");

    assert_eq!(echoed.id, 7);
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn can_delete_task_once() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ResourceService::<TaskResource>::new(&state.db);
    let created = service.create(payload("doomed", "", false)).await.unwrap();

    assert_eq!(service.delete(created.id).await.unwrap(), 1);
    assert_eq!(service.delete(created.id).await.unwrap(), 0);
    assert!(service.get(created.id).await.is_err());
}

#[tokio::test]
async fn can_count_title_length_in_characters() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ResourceService::<TaskResource>::new(&state.db);

    // 32 characters but 64 bytes.
    let accepted = "é".repeat(32);
    service
        .create(payload(&accepted, "", false))
        .await
        .expect("32 characters should be accepted");

    let rejected = "é".repeat(33);
    let result = service.create(payload(&rejected, "", false)).await;
    assert!(matches!(result, Err(ResourceServiceError::Validation(_))));
    assert_eq!(service.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn can_reject_long_description_before_updating() {
    let state = setup().await.expect("Failed to setup test context");
    let service = ResourceService::<TaskResource>::new(&state.db);
    let created = service.create(payload("keep", "keep me", false)).await.unwrap();

    let result = service
        .update(created.id, payload("keep", &"x".repeat(129), false))
        .await;

    assert!(matches!(result, Err(ResourceServiceError::Validation(_))));
    assert_eq!(service.get(created.id).await.unwrap(), created);
}
