use crate::entities::user;
use crate::resource::Resource;
use garde::Validate;
use sea_orm::ActiveValue::Set;
use serde::Deserialize;

#[derive(Deserialize, Validate)]
pub struct UserPayload {
    /// Chosen by the client. On update the path id wins.
    #[garde(skip)]
    pub id: i32,
    #[garde(length(chars, max = 32))]
    pub name: String,
    #[garde(length(chars, max = 32))]
    pub surname: String,
    #[garde(length(chars, max = 32))]
    pub email: String,
    #[garde(length(chars, max = 32))]
    pub password: String,
}

pub struct UserResource;

impl Resource for UserResource {
    type Entity = user::Entity;
    type Model = user::Model;
    type ActiveModel = user::ActiveModel;
    type Column = user::Column;
    type Payload = UserPayload;

    const PATH: &'static str = "users";
    const LABEL: &'static str = "User";
    const ID_COLUMN: user::Column = user::Column::Id;

    fn into_active_model(payload: UserPayload, id: Option<i32>) -> user::ActiveModel {
        user::ActiveModel {
            id: Set(id.unwrap_or(payload.id)),
            name: Set(payload.name),
            surname: Set(payload.surname),
            email: Set(payload.email),
            password: Set(payload.password),
        }
    }
}
