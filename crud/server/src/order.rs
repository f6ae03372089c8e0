use crate::entities::order;
use crate::resource::Resource;
use garde::Validate;
use sea_orm::ActiveValue::Set;
use serde::Deserialize;

#[derive(Debug, Deserialize, Validate)]
pub struct OrderPayload {
    #[garde(skip)]
    pub id: i32,
    #[garde(skip)]
    pub id_user: i32,
    #[garde(skip)]
    pub id_good: i32,
    #[garde(length(chars, max = 32))]
    pub data_order: String,
    #[garde(skip)]
    pub status: bool,
}

pub struct OrderResource;

impl Resource for OrderResource {
    type Entity = order::Entity;
    type Model = order::Model;
    type ActiveModel = order::ActiveModel;
    type Column = order::Column;
    type Payload = OrderPayload;

    const PATH: &'static str = "orders";
    const LABEL: &'static str = "Order";
    const ID_COLUMN: order::Column = order::Column::Id;

    fn into_active_model(payload: OrderPayload, id: Option<i32>) -> order::ActiveModel {
        order::ActiveModel {
            id: Set(id.unwrap_or(payload.id)),
            id_user: Set(payload.id_user),
            id_good: Set(payload.id_good),
            data_order: Set(payload.data_order),
            status: Set(payload.status),
        }
    }
}
