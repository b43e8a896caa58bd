// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleContent, ArticleId, ArticleTitle};
use crate::domain::author::{Author, AuthorId};
use crate::domain::category::{Category, CategoryId};
use chrono::{DateTime, Utc};

/// Mutable value holder for a blog article. Single-threaded use only;
/// the id stays at the empty sentinel until the storage adapter assigns
/// one on insert.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: AuthorId,
    pub category_id: CategoryId,
}

impl Article {
    pub fn draft(
        title: ArticleTitle,
        content: ArticleContent,
        author_id: AuthorId,
        category_id: CategoryId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ArticleId::empty(),
            title,
            content,
            created_at: now,
            modified_at: None,
            published_at: None,
            author_id,
            category_id,
        }
    }

    pub fn is_published(&self) -> bool {
        self.published_at.is_some()
    }

    pub fn publish(&mut self, now: DateTime<Utc>) {
        self.published_at = Some(now);
    }

    pub fn unpublish(&mut self) {
        self.published_at = None;
    }

    /// Replace title and content, stamping the modification time.
    pub fn set_content(
        &mut self,
        title: ArticleTitle,
        content: ArticleContent,
        now: DateTime<Utc>,
    ) {
        self.title = title;
        self.content = content;
        self.modified_at = Some(now);
    }
}

/// Eager-loaded read model: an article together with the author and
/// category rows it references.
#[derive(Debug, Clone)]
pub struct ArticleWithRelations {
    pub article: Article,
    pub author: Author,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct PublishStateUpdate {
    pub published_at: Option<DateTime<Utc>>,
}

/// Builder-style partial update applied by the write repository.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub publish_state: Option<PublishStateUpdate>,
    pub modified_at: Option<DateTime<Utc>>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            content: None,
            publish_state: None,
            modified_at: None,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_publish_state(mut self, published_at: Option<DateTime<Utc>>) -> Self {
        self.publish_state = Some(PublishStateUpdate { published_at });
        self
    }

    pub fn with_modified_at(mut self, modified_at: DateTime<Utc>) -> Self {
        self.modified_at = Some(modified_at);
        self
    }
}
