// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, authors::AuthorCommandService,
            categories::CategoryCommandService,
        },
        ports::time::Clock,
        queries::{
            articles::ArticleQueryService, authors::AuthorQueryService,
            categories::CategoryQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
        category::CategoryRepository,
    },
};

/// Constructor-wired aggregate of the command and query services.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub author_commands: Arc<AuthorCommandService>,
    pub author_queries: Arc<AuthorQueryService>,
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&author_repo),
            Arc::clone(&category_repo),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let author_commands = Arc::new(AuthorCommandService::new(Arc::clone(&author_repo)));
        let author_queries = Arc::new(AuthorQueryService::new(Arc::clone(&author_repo)));
        let category_commands = Arc::new(CategoryCommandService::new(Arc::clone(&category_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));

        Self {
            article_commands,
            article_queries,
            author_commands,
            author_queries,
            category_commands,
            category_queries,
        }
    }
}
