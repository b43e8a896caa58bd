// src/application/commands/articles.rs
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{
            Article, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle,
            ArticleUpdate, ArticleWriteRepository,
        },
        author::{Author, AuthorId, AuthorRepository, PersonName},
        category::{Category, CategoryId, CategoryName, CategoryRepository},
    },
};
use std::sync::Arc;
use uuid::Uuid;

/// How the command names the article's author: an existing row by id,
/// or values to insert first.
pub enum AuthorSpec {
    Existing(Uuid),
    New { first_name: String, last_name: String },
}

pub enum CategorySpec {
    Existing(Uuid),
    New { name: String, description: String },
}

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub publish: bool,
    pub author: AuthorSpec,
    pub category: CategorySpec,
}

impl CreateArticleCommand {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            publish: false,
            author: AuthorSpec::New {
                first_name: String::new(),
                last_name: String::new(),
            },
            category: CategorySpec::New {
                name: String::new(),
                description: String::new(),
            },
        }
    }

    pub fn publish(mut self) -> Self {
        self.publish = true;
        self
    }

    pub fn with_author(mut self, id: Uuid) -> Self {
        self.author = AuthorSpec::Existing(id);
        self
    }

    pub fn with_new_author(
        mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        self.author = AuthorSpec::New {
            first_name: first_name.into(),
            last_name: last_name.into(),
        };
        self
    }

    pub fn with_category(mut self, id: Uuid) -> Self {
        self.category = CategorySpec::Existing(id);
        self
    }

    pub fn with_new_category(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.category = CategorySpec::New {
            name: name.into(),
            description: description.into(),
        };
        self
    }
}

pub struct UpdateArticleCommand {
    pub id: Uuid,
    pub title: Option<String>,
    pub content: Option<String>,
}

pub struct SetPublishStateCommand {
    pub id: Uuid,
    pub publish: bool,
}

pub struct DeleteArticleCommand {
    pub id: Uuid,
}

pub struct ArticleCommandService {
    write_repo: Arc<dyn ArticleWriteRepository>,
    read_repo: Arc<dyn ArticleReadRepository>,
    author_repo: Arc<dyn AuthorRepository>,
    category_repo: Arc<dyn CategoryRepository>,
    clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            author_repo,
            category_repo,
            clock,
        }
    }

    /// Insert an article graph: resolve or insert the author and the
    /// category first, then insert the article referencing both.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(command.title)?;
        let content = ArticleContent::new(command.content)?;
        let now = self.clock.now();

        let author_id = self.resolve_author(command.author).await?;
        let category_id = self.resolve_category(command.category).await?;

        let mut article = Article::draft(title, content, author_id, category_id, now);
        if command.publish {
            article.publish(now);
        }

        let created = self.write_repo.insert(article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }

    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let title = match command.title {
            Some(value) => Some(ArticleTitle::new(value)?),
            None => None,
        };
        let content = match command.content {
            Some(value) => Some(ArticleContent::new(value)?),
            None => None,
        };

        if title.is_none() && content.is_none() {
            return Ok(article.into());
        }

        let mut update = ArticleUpdate::new(id).with_modified_at(self.clock.now());
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }

        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    pub async fn set_publish_state(
        &self,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        if article.is_published() == command.publish {
            return Ok(article.into());
        }

        if command.publish {
            article.publish(self.clock.now());
        } else {
            article.unpublish();
        }

        let update = ArticleUpdate::new(id).with_publish_state(article.published_at);
        let updated = self.write_repo.update(update).await?;
        Ok(updated.into())
    }

    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::new(command.id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }

    async fn resolve_author(&self, spec: AuthorSpec) -> ApplicationResult<AuthorId> {
        match spec {
            AuthorSpec::Existing(id) => {
                let id = AuthorId::new(id)?;
                self.author_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("author not found"))?;
                Ok(id)
            }
            AuthorSpec::New {
                first_name,
                last_name,
            } => {
                let author = Author::new(PersonName::new(first_name, last_name)?);
                let created = self.author_repo.insert(author).await?;
                Ok(created.id)
            }
        }
    }

    async fn resolve_category(&self, spec: CategorySpec) -> ApplicationResult<CategoryId> {
        match spec {
            CategorySpec::Existing(id) => {
                let id = CategoryId::new(id)?;
                self.category_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("category not found"))?;
                Ok(id)
            }
            CategorySpec::New { name, description } => {
                let category = Category::new(CategoryName::new(name)?, description);
                let created = self.category_repo.insert(category).await?;
                Ok(created.id)
            }
        }
    }
}
