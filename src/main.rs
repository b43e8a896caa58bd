use anyhow::Result;
use imprint_core::application::commands::articles::CreateArticleCommand;
use imprint_core::application::services::ApplicationServices;
use imprint_core::config::AppConfig;
use imprint_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    author::AuthorRepository,
    category::CategoryRepository,
};
use imprint_core::infrastructure::{
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteAuthorRepository,
        SqliteCategoryRepository,
    },
    time::SystemClock,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Insert the demo article graph, reload it by identity with its
/// relations eager-loaded, and print the result.
async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(Arc::clone(&pool)));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(Arc::clone(&pool)));
    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(SqliteAuthorRepository::new(Arc::clone(&pool)));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));
    let clock = Arc::new(SystemClock);

    let services = ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        author_repo,
        category_repo,
        clock,
    );

    let command = CreateArticleCommand::new("Hello world", "This is my first article!")
        .publish()
        .with_new_author("John", "Doe")
        .with_new_category("Nature", "Fluffy articles about nature.");

    let created = services.article_commands.create_article(command).await?;
    let article = services.article_queries.get_article_by_id(created.id).await?;

    println!("{}", article.title);
    println!("Published by {}.", article.author.full_name);
    println!();
    println!("{}", article.content);
    if let Some(published_at) = article.published_at {
        println!("Published on {published_at}");
    }
    println!("Category: {}", article.category.name);

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
