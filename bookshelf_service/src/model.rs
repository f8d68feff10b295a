//! Response values returned by the catalog.

use async_graphql::SimpleObject;

use crate::author::repository::AuthorRecord;

/// A book author.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Author {
    pub name: String,
}

/// A book with its resolved author.
///
/// `author` is `None` when the referenced author does not exist.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Book {
    pub title: String,
    pub author: Option<Author>,
}

impl From<AuthorRecord> for Author {
    fn from(record: AuthorRecord) -> Self {
        Self { name: record.name }
    }
}
