use crate::entities::task;
use crate::resource::Resource;
use garde::Validate;
use sea_orm::ActiveValue::{NotSet, Set};
use serde::Deserialize;

/// Body of POST and PUT on `/tasks`. The id is always assigned by the database.
#[derive(Debug, Deserialize, Validate)]
pub struct TaskPayload {
    #[garde(length(chars, max = 32))]
    pub title: String,
    #[garde(length(chars, max = 128))]
    pub description: String,
    #[garde(skip)]
    pub done: bool,
}

pub struct TaskResource;

impl Resource for TaskResource {
    type Entity = task::Entity;
    type Model = task::Model;
    type ActiveModel = task::ActiveModel;
    type Column = task::Column;
    type Payload = TaskPayload;

    const PATH: &'static str = "tasks";
    const LABEL: &'static str = "Task";
    const ID_COLUMN: task::Column = task::Column::Id;

    fn into_active_model(payload: TaskPayload, id: Option<i32>) -> task::ActiveModel {
        task::ActiveModel {
            id: id.map_or(NotSet, Set),
            title: Set(payload.title),
            description: Set(payload.description),
            done: Set(payload.done),
        }
    }
}
