use crate::domain::article::entity::{Article, ArticleUpdate, ArticleWithRelations};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::author::AuthorId;
use crate::domain::category::CategoryId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert a transient article and return it with a storage-assigned
    /// id. Inserting an article whose id is already assigned is a
    /// `Conflict`.
    async fn insert(&self, article: Article) -> DomainResult<Article>;
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Eager load the article together with its author and category.
    async fn find_with_relations(
        &self,
        id: ArticleId,
    ) -> DomainResult<Option<ArticleWithRelations>>;
    async fn list(&self, include_unpublished: bool) -> DomainResult<Vec<Article>>;
    async fn list_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>>;
    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Article>>;
}
