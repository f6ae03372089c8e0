use crate::entities::good;
use crate::resource::Resource;
use garde::Validate;
use sea_orm::ActiveValue::Set;
use serde::Deserialize;

#[derive(Debug, Deserialize, Validate)]
pub struct GoodPayload {
    #[garde(skip)]
    pub id: i32,
    #[garde(length(chars, max = 32))]
    pub name: String,
    #[garde(length(chars, max = 128))]
    pub description: String,
    #[garde(skip)]
    pub price: i32,
}

pub struct GoodResource;

impl Resource for GoodResource {
    type Entity = good::Entity;
    type Model = good::Model;
    type ActiveModel = good::ActiveModel;
    type Column = good::Column;
    type Payload = GoodPayload;

    const PATH: &'static str = "goods";
    const LABEL: &'static str = "Good";
    const ID_COLUMN: good::Column = good::Column::Id;

    fn into_active_model(payload: GoodPayload, id: Option<i32>) -> good::ActiveModel {
        good::ActiveModel {
            id: Set(id.unwrap_or(payload.id)),
            name: Set(payload.name),
            description: Set(payload.description),
            price: Set(payload.price),
        }
    }
}
