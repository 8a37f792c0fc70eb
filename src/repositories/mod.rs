use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

use crate::errors::ServiceError;

pub mod category_repository;
pub mod product_repository;

pub use category_repository::CategoryRepository;
pub use product_repository::ProductRepository;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Folds an update that found no row into `None`. The row can disappear
/// between the lookup and the write when a delete races the update.
pub(crate) fn row_updated<M>(result: Result<M, ServiceError>) -> Result<Option<M>, ServiceError> {
    match result {
        Ok(model) => Ok(Some(model)),
        Err(ServiceError::DatabaseError(DbErr::RecordNotUpdated))
        | Err(ServiceError::DatabaseError(DbErr::RecordNotFound(_))) => Ok(None),
        Err(e) => Err(e),
    }
}
