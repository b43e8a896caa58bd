pub mod articles;
pub mod authors;
pub mod categories;
