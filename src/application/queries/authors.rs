use crate::{
    application::{
        dto::AuthorDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::author::{AuthorId, AuthorRepository},
};
use std::sync::Arc;
use uuid::Uuid;

pub struct AuthorQueryService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorQueryService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_author_by_id(&self, id: Uuid) -> ApplicationResult<AuthorDto> {
        let id = AuthorId::new(id)?;
        let author = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author not found"))?;
        Ok(author.into())
    }

    pub async fn list_authors(&self) -> ApplicationResult<Vec<AuthorDto>> {
        let records = self.repo.list().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
