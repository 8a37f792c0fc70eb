use chrono::{DateTime, Duration, SubsecRound, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::db::instrumented;
use crate::dto::ProductInput;
use crate::entities::product::{self, ActiveModel as ProductActiveModel, Model as ProductModel};
use crate::errors::ServiceError;
use crate::repositories::{row_updated, Repository};

use super::BaseRepository;

/// Current time at the microsecond precision every supported backend stores.
fn now_micros() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// A modification time strictly after `previous`, even when the clock has not advanced.
pub(crate) fn next_modification_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = now_micros();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Copies every client-controlled field onto the active model, defaults applied.
fn apply_input(active: &mut ProductActiveModel, input: &ProductInput) {
    active.name = Set(input.name.clone());
    active.brand = Set(input.brand.clone());
    active.description = Set(input.description.clone());
    active.price = Set(input.price());
    active.discount_rate = Set(input.discount_rate());
    active.final_price = Set(input.final_price());
    active.stock = Set(input.stock());
    active.unit = Set(input.unit());
    active.barcode = Set(input.barcode.clone());
    active.expiration_date = Set(input.expiration_date);
    active.is_active = Set(input.is_active());
    active.is_featured = Set(input.is_featured());
    active.image_url = Set(input.image_url.clone());
    active.category_id = Set(input.category_id);
}

/// Repository for product operations
#[derive(Debug, Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All products, oldest id first
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ProductModel>, ServiceError> {
        let rows = instrumented(
            "product.list",
            product::Entity::find()
                .order_by_asc(product::Column::Id)
                .all(self.base.get_db()),
        )
        .await?;
        debug!(count = rows.len(), "Listed products");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Option<ProductModel>, ServiceError> {
        instrumented(
            "product.get",
            product::Entity::find_by_id(id).one(self.base.get_db()),
        )
        .await
    }

    #[instrument(skip(self, input), fields(name = %input.name, category_id = ?input.category_id))]
    pub async fn create(&self, input: ProductInput) -> Result<ProductModel, ServiceError> {
        let now = now_micros();
        let mut active = ProductActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_input(&mut active, &input);

        let created = instrumented("product.create", active.insert(self.base.get_db())).await?;
        info!(product_id = created.id, "Product created");
        Ok(created)
    }

    /// Replaces every client-controlled field; `created_at` is kept and
    /// `updated_at` moves strictly forward. `None` when the product does not exist.
    #[instrument(skip(self, input))]
    pub async fn update(
        &self,
        id: i32,
        input: ProductInput,
    ) -> Result<Option<ProductModel>, ServiceError> {
        let Some(existing) = self.get(id).await? else {
            debug!(product_id = id, "Product not found for update");
            return Ok(None);
        };

        let updated_at = next_modification_time(existing.updated_at);
        let mut active: ProductActiveModel = existing.into();
        apply_input(&mut active, &input);
        active.updated_at = Set(updated_at);

        let updated =
            row_updated(instrumented("product.update", active.update(self.base.get_db())).await)?;
        match &updated {
            Some(_) => info!(product_id = id, "Product updated"),
            None => debug!(product_id = id, "Product removed before update"),
        }
        Ok(updated)
    }

    /// Removes the product and returns its prior state.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<Option<ProductModel>, ServiceError> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        instrumented(
            "product.delete",
            existing.clone().delete(self.base.get_db()),
        )
        .await?;
        info!(product_id = id, "Product deleted");
        Ok(Some(existing))
    }
}
