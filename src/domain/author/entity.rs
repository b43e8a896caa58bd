use crate::domain::author::value_objects::{AuthorId, PersonName};

#[derive(Debug, Clone)]
pub struct Author {
    pub id: AuthorId,
    pub name: PersonName,
}

impl Author {
    /// New transient author; storage assigns the id on insert.
    pub fn new(name: PersonName) -> Self {
        Self {
            id: AuthorId::empty(),
            name,
        }
    }
}
