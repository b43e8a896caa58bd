use crate::{
    application::{dto::AuthorDto, error::ApplicationResult},
    domain::author::{Author, AuthorRepository, PersonName},
};
use std::sync::Arc;

pub struct CreateAuthorCommand {
    pub first_name: String,
    pub last_name: String,
}

pub struct AuthorCommandService {
    repo: Arc<dyn AuthorRepository>,
}

impl AuthorCommandService {
    pub fn new(repo: Arc<dyn AuthorRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_author(&self, command: CreateAuthorCommand) -> ApplicationResult<AuthorDto> {
        let name = PersonName::new(command.first_name, command.last_name)?;
        let created = self.repo.insert(Author::new(name)).await?;
        Ok(created.into())
    }
}
