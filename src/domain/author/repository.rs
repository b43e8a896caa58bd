use crate::domain::author::entity::Author;
use crate::domain::author::value_objects::AuthorId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Insert a transient author and return it with a storage-assigned
    /// id. Inserting an already-identified author is a `Conflict`.
    async fn insert(&self, author: Author) -> DomainResult<Author>;
    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>>;
    async fn list(&self) -> DomainResult<Vec<Author>>;
}
