// tests/support/mocks/repos.rs
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use imprint_core::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleUpdate, ArticleWithRelations,
    ArticleWriteRepository,
};
use imprint_core::domain::author::{Author, AuthorId, AuthorRepository};
use imprint_core::domain::category::{Category, CategoryId, CategoryRepository};
use imprint_core::domain::errors::{DomainError, DomainResult};

type AuthorStore = Arc<Mutex<HashMap<Uuid, Author>>>;
type CategoryStore = Arc<Mutex<HashMap<Uuid, Category>>>;
type ArticleStore = Arc<Mutex<HashMap<Uuid, Article>>>;

/// In-memory stand-ins for the SQLite repositories, sharing state so
/// the eager-loaded article view can resolve its relations.
pub struct InMemoryBlog {
    pub articles: ArticleStore,
    pub authors: AuthorStore,
    pub categories: CategoryStore,
}

impl Default for InMemoryBlog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBlog {
    pub fn new() -> Self {
        Self {
            articles: Arc::new(Mutex::new(HashMap::new())),
            authors: Arc::new(Mutex::new(HashMap::new())),
            categories: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn article_repo(&self) -> Arc<InMemoryArticleRepository> {
        Arc::new(InMemoryArticleRepository {
            articles: Arc::clone(&self.articles),
            authors: Arc::clone(&self.authors),
            categories: Arc::clone(&self.categories),
        })
    }

    pub fn author_repo(&self) -> Arc<InMemoryAuthorRepository> {
        Arc::new(InMemoryAuthorRepository {
            store: Arc::clone(&self.authors),
        })
    }

    pub fn category_repo(&self) -> Arc<InMemoryCategoryRepository> {
        Arc::new(InMemoryCategoryRepository {
            store: Arc::clone(&self.categories),
        })
    }
}

pub struct InMemoryAuthorRepository {
    store: AuthorStore,
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn insert(&self, mut author: Author) -> DomainResult<Author> {
        if !author.id.is_empty() {
            return Err(DomainError::Conflict(
                "author already has an assigned id".into(),
            ));
        }
        let id = Uuid::new_v4();
        author.id = AuthorId::new(id)?;
        self.store.lock().unwrap().insert(id, author.clone());
        Ok(author)
    }

    async fn find_by_id(&self, id: AuthorId) -> DomainResult<Option<Author>> {
        Ok(self.store.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Author>> {
        Ok(self.store.lock().unwrap().values().cloned().collect())
    }
}

pub struct InMemoryCategoryRepository {
    store: CategoryStore,
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn insert(&self, mut category: Category) -> DomainResult<Category> {
        if !category.id.is_empty() {
            return Err(DomainError::Conflict(
                "category already has an assigned id".into(),
            ));
        }
        let id = Uuid::new_v4();
        category.id = CategoryId::new(id)?;
        self.store.lock().unwrap().insert(id, category.clone());
        Ok(category)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.store.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.store.lock().unwrap().values().cloned().collect())
    }
}

pub struct InMemoryArticleRepository {
    articles: ArticleStore,
    authors: AuthorStore,
    categories: CategoryStore,
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, mut article: Article) -> DomainResult<Article> {
        if !article.id.is_empty() {
            return Err(DomainError::Conflict(
                "article already has an assigned id".into(),
            ));
        }
        if !self
            .authors
            .lock()
            .unwrap()
            .contains_key(&Uuid::from(article.author_id))
        {
            return Err(DomainError::NotFound("referenced record not found".into()));
        }
        if !self
            .categories
            .lock()
            .unwrap()
            .contains_key(&Uuid::from(article.category_id))
        {
            return Err(DomainError::NotFound("referenced record not found".into()));
        }
        let id = Uuid::new_v4();
        article.id = ArticleId::new(id)?;
        self.articles.lock().unwrap().insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .get_mut(&Uuid::from(update.id))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(modified_at) = update.modified_at {
            article.modified_at = Some(modified_at);
        }
        if let Some(state) = update.publish_state {
            article.published_at = state.published_at;
        }
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.articles
            .lock()
            .unwrap()
            .remove(&Uuid::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.articles.lock().unwrap().get(&Uuid::from(id)).cloned())
    }

    async fn find_with_relations(
        &self,
        id: ArticleId,
    ) -> DomainResult<Option<ArticleWithRelations>> {
        let Some(article) = self.articles.lock().unwrap().get(&Uuid::from(id)).cloned() else {
            return Ok(None);
        };
        let author = self
            .authors
            .lock()
            .unwrap()
            .get(&Uuid::from(article.author_id))
            .cloned()
            .ok_or_else(|| DomainError::Persistence("dangling author reference".into()))?;
        let category = self
            .categories
            .lock()
            .unwrap()
            .get(&Uuid::from(article.category_id))
            .cloned()
            .ok_or_else(|| DomainError::Persistence("dangling category reference".into()))?;

        Ok(Some(ArticleWithRelations {
            article,
            author,
            category,
        }))
    }

    async fn list(&self, include_unpublished: bool) -> DomainResult<Vec<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles
            .values()
            .filter(|a| include_unpublished || a.is_published())
            .cloned()
            .collect())
    }

    async fn list_by_author(&self, author_id: AuthorId) -> DomainResult<Vec<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles
            .values()
            .filter(|a| a.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn list_by_category(&self, category_id: CategoryId) -> DomainResult<Vec<Article>> {
        let articles = self.articles.lock().unwrap();
        Ok(articles
            .values()
            .filter(|a| a.category_id == category_id)
            .cloned()
            .collect())
    }
}
