pub mod article;
pub mod author;
pub mod category;
pub mod errors;
pub mod pricing;
