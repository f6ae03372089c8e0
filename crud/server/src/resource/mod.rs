use garde::Validate;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, ModelTrait, QueryFilter, QueryOrder, SqlErr, TryIntoModel,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

pub mod api;

/// A table exposed as a CRUD resource.
///
/// Implementors tie a sea-orm entity to the JSON payload clients send for it,
/// the route segment it is served under, and the column used as its lookup key.
/// Everything else (the service and the HTTP handlers) is written once against
/// this trait.
pub trait Resource: Send + Sync + 'static {
    type Entity: EntityTrait<
            Model = Self::Model,
            ActiveModel = Self::ActiveModel,
            Column = Self::Column,
        >;
    type Model: ModelTrait<Entity = Self::Entity>
        + FromQueryResult
        + IntoActiveModel<Self::ActiveModel>
        + Serialize
        + Send
        + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + TryIntoModel<Self::Model>
        + Send;
    type Column: ColumnTrait;
    /// Body accepted by create and update.
    type Payload: DeserializeOwned + Validate<Context = ()> + Send + 'static;

    /// Route segment, e.g. `tasks` for `/tasks/{id}`.
    const PATH: &'static str;
    /// Human readable singular name, used in messages.
    const LABEL: &'static str;
    const ID_COLUMN: Self::Column;

    /// Builds a fully set active model from a payload.
    ///
    /// `id` is the path id on update. On create it is `None` and the
    /// implementor either takes the id from the payload or leaves it to the
    /// database.
    fn into_active_model(payload: Self::Payload, id: Option<i32>) -> Self::ActiveModel;
}

/// Error type for ResourceService operations.
#[derive(Debug, thiserror::Error)]
pub enum ResourceServiceError {
    /// The payload failed field validation.
    #[error("Invalid payload: {0}")]
    Validation(#[from] garde::Report),
    /// No row exists with the requested id.
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: i32 },
    /// A unique or foreign key constraint rejected the write.
    #[error("Constraint violation: {0}")]
    Conflict(String),
    /// Represents any other database error.
    #[error("Database error: {0}")]
    Database(#[source] DbErr),
}

impl From<DbErr> for ResourceServiceError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message))
            | Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                ResourceServiceError::Conflict(message)
            }
            _ => ResourceServiceError::Database(err),
        }
    }
}

pub struct ResourceService<'a, R> {
    db: &'a DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'a, R: Resource> ResourceService<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        ResourceService {
            db,
            resource: PhantomData,
        }
    }

    /// Retrieves every row of the resource, ordered by id.
    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub async fn list(&self) -> Result<Vec<R::Model>, ResourceServiceError> {
        let models = R::Entity::find()
            .order_by_asc(R::ID_COLUMN)
            .all(self.db)
            .await?;
        Ok(models)
    }

    /// Retrieves a single row by its id.
    ///
    /// # Returns
    ///
    /// The model, or `ResourceServiceError::NotFound` when no row has that id.
    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub async fn get(&self, id: i32) -> Result<R::Model, ResourceServiceError> {
        R::Entity::find()
            .filter(R::ID_COLUMN.eq(id))
            .one(self.db)
            .await?
            .ok_or(ResourceServiceError::NotFound {
                resource: R::LABEL,
                id,
            })
    }

    /// Validates the payload and inserts it as a new row.
    ///
    /// # Returns
    ///
    /// The row as stored, including its id. A duplicate id or a dangling
    /// reference yields `ResourceServiceError::Conflict`.
    #[tracing::instrument(skip(self, payload), fields(resource = R::PATH))]
    pub async fn create(&self, payload: R::Payload) -> Result<R::Model, ResourceServiceError> {
        payload.validate()?;
        let active_model = R::into_active_model(payload, None);
        let created = active_model.insert(self.db).await?;
        Ok(created)
    }

    /// Validates the payload and overwrites every column of the row with `id`.
    ///
    /// Updating an id that does not exist is not an error: nothing is
    /// written and the replacement record is returned as if it had been.
    #[tracing::instrument(skip(self, payload), fields(resource = R::PATH))]
    pub async fn update(
        &self,
        id: i32,
        payload: R::Payload,
    ) -> Result<R::Model, ResourceServiceError> {
        payload.validate()?;
        let active_model = R::into_active_model(payload, Some(id));
        let result = R::Entity::update_many()
            .set(active_model.clone())
            .filter(R::ID_COLUMN.eq(id))
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            tracing::debug!("No {} with ID {} to update", R::LABEL, id);
        }
        Ok(active_model.try_into_model()?)
    }

    /// Deletes the row with `id`, if any.
    ///
    /// # Returns
    ///
    /// The number of rows removed, zero or one.
    #[tracing::instrument(skip(self), fields(resource = R::PATH))]
    pub async fn delete(&self, id: i32) -> Result<u64, ResourceServiceError> {
        let result = R::Entity::delete_many()
            .filter(R::ID_COLUMN.eq(id))
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            tracing::debug!("No {} with ID {} to delete", R::LABEL, id);
        }
        Ok(result.rows_affected)
    }
}
