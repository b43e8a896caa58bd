use crate::domain::category::entity::Category;
use crate::domain::category::value_objects::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a transient category and return it with a
    /// storage-assigned id. Inserting an already-identified category is
    /// a `Conflict`.
    async fn insert(&self, category: Category) -> DomainResult<Category>;
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
