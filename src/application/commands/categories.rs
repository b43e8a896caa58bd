use crate::{
    application::{dto::CategoryDto, error::ApplicationResult},
    domain::category::{Category, CategoryName, CategoryRepository},
};
use std::sync::Arc;

pub struct CreateCategoryCommand {
    pub name: String,
    pub description: String,
}

pub struct CategoryCommandService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryCommandService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let name = CategoryName::new(command.name)?;
        let created = self
            .repo
            .insert(Category::new(name, command.description))
            .await?;
        Ok(created.into())
    }
}
