use crate::domain::category::value_objects::{CategoryId, CategoryName};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: String,
}

impl Category {
    /// New transient category; storage assigns the id on insert.
    pub fn new(name: CategoryName, description: impl Into<String>) -> Self {
        Self {
            id: CategoryId::empty(),
            name,
            description: description.into(),
        }
    }
}
