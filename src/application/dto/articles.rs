use crate::application::dto::{AuthorDto, CategoryDto};
use crate::domain::article::{Article, ArticleWithRelations};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: Uuid,
    pub category_id: Uuid,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            created_at: article.created_at,
            modified_at: article.modified_at,
            published_at: article.published_at,
            author_id: article.author_id.into(),
            category_id: article.category_id.into(),
        }
    }
}

/// Eager-loaded article view with its author and category inlined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetailDto {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub author: AuthorDto,
    pub category: CategoryDto,
}

impl From<ArticleWithRelations> for ArticleDetailDto {
    fn from(detail: ArticleWithRelations) -> Self {
        Self {
            id: detail.article.id.into(),
            title: detail.article.title.into_inner(),
            content: detail.article.content.into_inner(),
            created_at: detail.article.created_at,
            modified_at: detail.article.modified_at,
            published_at: detail.article.published_at,
            author: detail.author.into(),
            category: detail.category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleContent, ArticleTitle};
    use crate::domain::author::AuthorId;
    use crate::domain::category::CategoryId;

    #[test]
    fn article_dto_serializes_with_nullable_timestamps() {
        let article = Article::draft(
            ArticleTitle::new("Hello world").unwrap(),
            ArticleContent::new("This is my first article!").unwrap(),
            AuthorId::new(Uuid::new_v4()).unwrap(),
            CategoryId::new(Uuid::new_v4()).unwrap(),
            Utc::now(),
        );
        let dto = ArticleDto::from(article);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["title"], "Hello world");
        assert!(json["published_at"].is_null());
        assert!(json["modified_at"].is_null());
    }
}
