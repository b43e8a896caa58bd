// tests/article_commands.rs
mod support;

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use imprint_core::application::commands::articles::{
    ArticleCommandService, CreateArticleCommand, DeleteArticleCommand, SetPublishStateCommand,
    UpdateArticleCommand,
};
use imprint_core::application::error::ApplicationError;
use imprint_core::domain::article::{ArticleId, ArticleReadRepository, ArticleWriteRepository};
use imprint_core::domain::errors::DomainError;

use support::mocks::{FixedClock, InMemoryBlog};

fn service(blog: &InMemoryBlog) -> ArticleCommandService {
    let article_repo = blog.article_repo();
    ArticleCommandService::new(
        article_repo.clone(),
        article_repo,
        blog.author_repo(),
        blog.category_repo(),
        Arc::new(FixedClock(Utc::now())),
    )
}

#[tokio::test]
async fn create_article_inserts_the_whole_graph() {
    let blog = InMemoryBlog::new();
    let service = service(&blog);

    let command = CreateArticleCommand::new("Hello world", "This is my first article!")
        .with_new_author("John", "Doe")
        .with_new_category("Nature", "Fluffy articles about nature.");
    let created = service.create_article(command).await.unwrap();

    assert!(!created.id.is_nil());
    assert_eq!(created.title, "Hello world");
    assert!(created.published_at.is_none());
    assert_eq!(blog.authors.lock().unwrap().len(), 1);
    assert_eq!(blog.categories.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn create_article_with_publish_stamps_publication() {
    let blog = InMemoryBlog::new();
    let service = service(&blog);

    let command = CreateArticleCommand::new("Hello world", "content")
        .publish()
        .with_new_author("John", "Doe")
        .with_new_category("Nature", "desc");
    let created = service.create_article(command).await.unwrap();

    assert!(created.published_at.is_some());
    assert!(created.modified_at.is_none());
}

#[tokio::test]
async fn create_article_rejects_unknown_author_id() {
    let blog = InMemoryBlog::new();
    let service = service(&blog);

    let command = CreateArticleCommand::new("Hello world", "content")
        .with_author(Uuid::new_v4())
        .with_new_category("Nature", "desc");
    let err = service.create_article(command).await.unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn inserting_an_identified_article_is_a_conflict() {
    let blog = InMemoryBlog::new();
    let service = service(&blog);

    let command = CreateArticleCommand::new("Hello world", "content")
        .with_new_author("John", "Doe")
        .with_new_category("Nature", "desc");
    let created = service.create_article(command).await.unwrap();

    let repo = blog.article_repo();
    let persisted = repo
        .find_by_id(ArticleId::new(created.id).unwrap())
        .await
        .unwrap()
        .unwrap();

    let err = repo.insert(persisted).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn update_article_changes_content_and_stamps_modification() {
    let blog = InMemoryBlog::new();
    let service = service(&blog);

    let command = CreateArticleCommand::new("Hello world", "content")
        .with_new_author("John", "Doe")
        .with_new_category("Nature", "desc");
    let created = service.create_article(command).await.unwrap();

    let updated = service
        .update_article(UpdateArticleCommand {
            id: created.id,
            title: Some("Hello again".into()),
            content: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.title, "Hello again");
    assert_eq!(updated.content, "content");
    assert!(updated.modified_at.is_some());
}

#[tokio::test]
async fn update_unknown_article_is_not_found() {
    let blog = InMemoryBlog::new();
    let service = service(&blog);

    let err = service
        .update_article(UpdateArticleCommand {
            id: Uuid::new_v4(),
            title: Some("title".into()),
            content: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn set_publish_state_toggles_publication() {
    let blog = InMemoryBlog::new();
    let service = service(&blog);

    let command = CreateArticleCommand::new("Hello world", "content")
        .with_new_author("John", "Doe")
        .with_new_category("Nature", "desc");
    let created = service.create_article(command).await.unwrap();

    let published = service
        .set_publish_state(SetPublishStateCommand {
            id: created.id,
            publish: true,
        })
        .await
        .unwrap();
    assert!(published.published_at.is_some());

    let unpublished = service
        .set_publish_state(SetPublishStateCommand {
            id: created.id,
            publish: false,
        })
        .await
        .unwrap();
    assert!(unpublished.published_at.is_none());
}

#[tokio::test]
async fn delete_unknown_article_is_not_found() {
    let blog = InMemoryBlog::new();
    let service = service(&blog);

    let err = service
        .delete_article(DeleteArticleCommand { id: Uuid::new_v4() })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}
