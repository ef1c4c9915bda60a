use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, Order, PaginatorTrait, PrimaryKeyTrait, QueryOrder, Select,
};

use super::base_traits::{HasCreatedAtColumn, TimestampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

/// Shared persistence operations for entities keyed by an `i32` id.
///
/// Implementors only provide construction and the connection; everything else
/// comes from the default methods.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    <Self::Entity as EntityTrait>::Model:
        FromQueryResult + IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + TimestampedActiveModel
        + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<i32> + Send + Sync,
    Self::Entity: HasCreatedAtColumn,
{
    type Entity: EntityTrait + Send + Sync;

    /// Singular name used in not-found errors.
    const LABEL: &'static str;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    async fn create(
        &self,
        data: impl IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Send,
    ) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        let now = Utc::now().fixed_offset();
        let mut active = data.into_active_model();
        active.set_created_at(now);
        active.set_updated_at(now);
        active.insert(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn find_by_id(&self, id: i64) -> DaoResult<<Self::Entity as EntityTrait>::Model> {
        self.find_optional(id).await?.ok_or(DaoLayerError::NotFound {
            entity: Self::LABEL,
            id,
        })
    }

    /// Ids outside the `i32` key range match no row and skip the query.
    async fn find_optional(
        &self,
        id: i64,
    ) -> DaoResult<Option<<Self::Entity as EntityTrait>::Model>> {
        let Some(key) = row_key(id) else {
            return Ok(None);
        };
        Self::Entity::find_by_id(key)
            .one(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    /// Every row matching `apply`, oldest first unless `order` says otherwise.
    async fn find_all(
        &self,
        order: Option<(<Self::Entity as EntityTrait>::Column, Order)>,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<Vec<<Self::Entity as EntityTrait>::Model>> {
        let filtered = apply(Self::Entity::find());
        let ordered = match order {
            Some((column, order)) => filtered.order_by(column, order),
            None => filtered.order_by_asc(Self::Entity::created_at_column()),
        };
        ordered.all(self.db()).await.map_err(DaoLayerError::Db)
    }

    async fn count(
        &self,
        apply: impl FnOnce(Select<Self::Entity>) -> Select<Self::Entity> + Send,
    ) -> DaoResult<u64> {
        apply(Self::Entity::find())
            .count(self.db())
            .await
            .map_err(DaoLayerError::Db)
    }

    async fn update<F>(&self, id: i64, apply: F) -> DaoResult<<Self::Entity as EntityTrait>::Model>
    where
        F: FnOnce(&mut <Self::Entity as EntityTrait>::ActiveModel) + Send,
    {
        let model = self.find_by_id(id).await?;

        let mut active = model.into_active_model();
        apply(&mut active);
        active.set_updated_at(Utc::now().fixed_offset());

        active.update(self.db()).await.map_err(DaoLayerError::Db)
    }

    /// Deletes by primary key and reports how many rows went away. Zero is not
    /// an error.
    async fn delete(&self, id: i64) -> DaoResult<u64> {
        let Some(key) = row_key(id) else {
            return Ok(0);
        };
        let result = Self::Entity::delete_by_id(key)
            .exec(self.db())
            .await
            .map_err(DaoLayerError::Db)?;

        Ok(result.rows_affected)
    }
}

/// Narrows a request id to the `i32` primary key. `None` means no row can
/// carry this id.
pub fn row_key(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
