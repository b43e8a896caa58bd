use crate::{
    application::{
        dto::{ArticleDetailDto, ArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleId, ArticleReadRepository},
        author::AuthorId,
        category::CategoryId,
    },
};
use std::sync::Arc;
use uuid::Uuid;

pub struct ListArticlesQuery {
    pub include_unpublished: bool,
}

pub struct ArticleQueryService {
    read_repo: Arc<dyn ArticleReadRepository>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>) -> Self {
        Self { read_repo }
    }

    /// Reload an article by identity with its author and category
    /// eager-loaded.
    pub async fn get_article_by_id(&self, id: Uuid) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(id)?;
        let detail = self
            .read_repo
            .find_with_relations(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(detail.into())
    }

    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list(query.include_unpublished).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_author(&self, author_id: Uuid) -> ApplicationResult<Vec<ArticleDto>> {
        let author_id = AuthorId::new(author_id)?;
        let records = self.read_repo.list_by_author(author_id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    pub async fn list_by_category(&self, category_id: Uuid) -> ApplicationResult<Vec<ArticleDto>> {
        let category_id = CategoryId::new(category_id)?;
        let records = self.read_repo.list_by_category(category_id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
