pub mod articles;
pub mod authors;
pub mod categories;

pub use articles::{ArticleDetailDto, ArticleDto};
pub use authors::AuthorDto;
pub use categories::CategoryDto;
