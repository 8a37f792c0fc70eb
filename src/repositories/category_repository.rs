use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::db::instrumented;
use crate::dto::CategoryInput;
use crate::entities::category::{self, ActiveModel as CategoryActiveModel, Model as CategoryModel};
use crate::entities::product;
use crate::errors::ServiceError;
use crate::repositories::{row_updated, Repository};

use super::BaseRepository;

/// Repository for category operations
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All categories, oldest id first
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<CategoryModel>, ServiceError> {
        let rows = instrumented(
            "category.list",
            category::Entity::find()
                .order_by_asc(category::Column::Id)
                .all(self.base.get_db()),
        )
        .await?;
        debug!(count = rows.len(), "Listed categories");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Option<CategoryModel>, ServiceError> {
        instrumented(
            "category.get",
            category::Entity::find_by_id(id).one(self.base.get_db()),
        )
        .await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CategoryInput) -> Result<CategoryModel, ServiceError> {
        let active = CategoryActiveModel {
            name: Set(input.name),
            description: Set(input.description),
            image_url: Set(input.image_url),
            ..Default::default()
        };

        let created = instrumented("category.create", active.insert(self.base.get_db())).await?;
        info!(category_id = created.id, "Category created");
        Ok(created)
    }

    /// Replaces every field of the category; `None` when it does not exist.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i32,
        input: CategoryInput,
    ) -> Result<Option<CategoryModel>, ServiceError> {
        let db = self.base.get_db();
        let Some(existing) = self.get(id).await? else {
            debug!(category_id = id, "Category not found for update");
            return Ok(None);
        };

        let mut active: CategoryActiveModel = existing.into();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.image_url = Set(input.image_url);

        let updated = row_updated(instrumented("category.update", active.update(db)).await)?;
        match &updated {
            Some(_) => info!(category_id = id, "Category updated"),
            None => debug!(category_id = id, "Category removed before update"),
        }
        Ok(updated)
    }

    /// Removes the category together with its products and returns its prior state.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<Option<CategoryModel>, ServiceError> {
        let db = self.base.get_db();

        let deleted = instrumented("category.delete", async {
            let txn = db.begin().await?;

            let Some(existing) = category::Entity::find_by_id(id).one(&txn).await? else {
                txn.rollback().await?;
                return Ok::<_, DbErr>(None);
            };

            let removed_products = product::Entity::delete_many()
                .filter(product::Column::CategoryId.eq(id))
                .exec(&txn)
                .await?
                .rows_affected;

            existing.clone().delete(&txn).await?;
            txn.commit().await?;

            debug!(category_id = id, removed_products, "Category products removed");
            Ok::<_, DbErr>(Some(existing))
        })
        .await?;

        if deleted.is_some() {
            info!(category_id = id, "Category deleted");
        }
        Ok(deleted)
    }
}
