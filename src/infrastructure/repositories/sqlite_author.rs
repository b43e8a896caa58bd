use crate::domain::author::{Author, AuthorId, AuthorRepository, PersonName};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::{map_sqlx, parse_uuid};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct SqliteAuthorRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteAuthorRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AuthorRow {
    id: String,
    first_name: String,
    last_name: String,
}

impl TryFrom<AuthorRow> for Author {
    type Error = DomainError;

    fn try_from(row: AuthorRow) -> Result<Self, Self::Error> {
        Ok(Author {
            id: AuthorId::new(parse_uuid(&row.id)?)?,
            name: PersonName::new(row.first_name, row.last_name)?,
        })
    }
}

#[async_trait]
impl AuthorRepository for SqliteAuthorRepository {
    async fn insert(&self, author: Author) -> DomainResult<Author> {
        if !author.id.is_empty() {
            return Err(DomainError::Conflict(
                "author already has an assigned id".into(),
            ));
        }

        let id = Uuid::new_v4();

        let row = sqlx::query_as::<_, AuthorRow>(
            "INSERT INTO authors (id, first_name, last_name) VALUES (?, ?, ?) \
             RETURNING id, first_name, last_name",
        )
        .bind(id.to_string())
        .bind(author.name.first())
        .bind(author.name.last())
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Author::try_from(row)
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, first_name, last_name FROM authors WHERE id = ?",
        )
        .bind(Uuid::from(id).to_string())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Author::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, first_name, last_name FROM authors ORDER BY last_name, first_name",
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Author::try_from).collect()
    }
}
