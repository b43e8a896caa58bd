use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle, ArticleUpdate,
    ArticleWithRelations, ArticleWriteRepository,
};
use crate::domain::author::{Author, AuthorId, PersonName};
use crate::domain::category::{Category, CategoryId, CategoryName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::{map_sqlx, parse_uuid};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

const ARTICLE_COLUMNS: &str =
    "id, title, content, created_at, modified_at, published_at, author_id, category_id";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    modified_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
    author_id: String,
    category_id: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(parse_uuid(&row.id)?)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            created_at: row.created_at,
            modified_at: row.modified_at,
            published_at: row.published_at,
            author_id: AuthorId::new(parse_uuid(&row.author_id)?)?,
            category_id: CategoryId::new(parse_uuid(&row.category_id)?)?,
        })
    }
}

/// One joined row for the eager-loaded article view.
#[derive(Debug, FromRow)]
struct ArticleDetailRow {
    id: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    modified_at: Option<DateTime<Utc>>,
    published_at: Option<DateTime<Utc>>,
    author_id: String,
    category_id: String,
    author_first_name: String,
    author_last_name: String,
    category_name: String,
    category_description: String,
}

impl TryFrom<ArticleDetailRow> for ArticleWithRelations {
    type Error = DomainError;

    fn try_from(row: ArticleDetailRow) -> Result<Self, Self::Error> {
        let author_id = AuthorId::new(parse_uuid(&row.author_id)?)?;
        let category_id = CategoryId::new(parse_uuid(&row.category_id)?)?;

        let article = Article {
            id: ArticleId::new(parse_uuid(&row.id)?)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content)?,
            created_at: row.created_at,
            modified_at: row.modified_at,
            published_at: row.published_at,
            author_id,
            category_id,
        };
        let author = Author {
            id: author_id,
            name: PersonName::new(row.author_first_name, row.author_last_name)?,
        };
        let category = Category {
            id: category_id,
            name: CategoryName::new(row.category_name)?,
            description: row.category_description,
        };

        Ok(ArticleWithRelations {
            article,
            author,
            category,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: Article) -> DomainResult<Article> {
        if !article.id.is_empty() {
            return Err(DomainError::Conflict(
                "article already has an assigned id".into(),
            ));
        }

        // The adapter owns id assignment; entities arrive transient.
        let id = Uuid::new_v4();

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (id, title, content, created_at, modified_at, published_at, author_id, category_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING id, title, content, created_at, modified_at, published_at, author_id, category_id",
        )
        .bind(id.to_string())
        .bind(article.title.as_str())
        .bind(article.content.as_str())
        .bind(article.created_at)
        .bind(article.modified_at)
        .bind(article.published_at)
        .bind(Uuid::from(article.author_id).to_string())
        .bind(Uuid::from(article.category_id).to_string())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            publish_state,
            modified_at,
        } = update;

        // published_at may be set to NULL, so it cannot go through
        // COALESCE like the other columns.
        let row = match publish_state {
            Some(state) => {
                sqlx::query_as::<_, ArticleRow>(
                    "UPDATE articles SET title = COALESCE(?, title), content = COALESCE(?, content), \
                     modified_at = COALESCE(?, modified_at), published_at = ? WHERE id = ? \
                     RETURNING id, title, content, created_at, modified_at, published_at, author_id, category_id",
                )
                .bind(title.as_ref().map(|t| t.as_str()))
                .bind(content.as_ref().map(|c| c.as_str()))
                .bind(modified_at)
                .bind(state.published_at)
                .bind(Uuid::from(id).to_string())
                .fetch_optional(&*self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ArticleRow>(
                    "UPDATE articles SET title = COALESCE(?, title), content = COALESCE(?, content), \
                     modified_at = COALESCE(?, modified_at) WHERE id = ? \
                     RETURNING id, title, content, created_at, modified_at, published_at, author_id, category_id",
                )
                .bind(title.as_ref().map(|t| t.as_str()))
                .bind(content.as_ref().map(|c| c.as_str()))
                .bind(modified_at)
                .bind(Uuid::from(id).to_string())
                .fetch_optional(&*self.pool)
                .await
            }
        }
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(Uuid::from(id).to_string())
            .execute(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?"
        ))
        .bind(Uuid::from(id).to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_with_relations(
        &self,
        id: ArticleId,
    ) -> DomainResult<Option<ArticleWithRelations>> {
        let row = sqlx::query_as::<_, ArticleDetailRow>(
            "SELECT a.id, a.title, a.content, a.created_at, a.modified_at, a.published_at, \
             a.author_id, a.category_id, \
             au.first_name AS author_first_name, au.last_name AS author_last_name, \
             c.name AS category_name, c.description AS category_description \
             FROM articles a \
             JOIN authors au ON au.id = a.author_id \
             JOIN categories c ON c.id = a.category_id \
             WHERE a.id = ?",
        )
        .bind(Uuid::from(id).to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(ArticleWithRelations::try_from).transpose()
    }

    async fn list(&self, include_unpublished: bool) -> DomainResult<Vec<Article>> {
        let sql = if include_unpublished {
            format!("SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY created_at DESC")
        } else {
            format!(
                "SELECT {ARTICLE_COLUMNS} FROM articles WHERE published_at IS NOT NULL \
                 ORDER BY created_at DESC"
            )
        };

        let rows = sqlx::query_as::<_, ArticleRow>(&sql)
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE author_id = ? ORDER BY created_at DESC"
        ))
        .bind(Uuid::from(author_id).to_string())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE category_id = ? ORDER BY created_at DESC"
        ))
        .bind(Uuid::from(category_id).to_string())
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
