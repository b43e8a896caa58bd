pub mod error;
pub mod sqlite_article;
pub mod sqlite_author;
pub mod sqlite_category;

pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_author::SqliteAuthorRepository;
pub use sqlite_category::SqliteCategoryRepository;
