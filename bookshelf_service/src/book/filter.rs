/// Optional constraints narrowing a book selection.
///
/// Empty author sets, empty search strings and a zero limit are normalized to
/// "not provided", so presence can be checked without inspecting the values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    author_ids: Option<Vec<i64>>,
    search: Option<String>,
    limit: Option<u32>,
}

impl BookFilter {
    pub fn new(author_ids: Option<Vec<i64>>, search: Option<String>, limit: Option<u32>) -> Self {
        Self {
            author_ids: author_ids.filter(|author_ids| !author_ids.is_empty()),
            search: search.filter(|search| !search.is_empty()),
            limit: limit.filter(|limit| *limit > 0),
        }
    }

    #[must_use]
    pub fn with_author_ids<I: IntoIterator<Item = i64>>(mut self, author_ids: I) -> Self {
        let author_ids: Vec<_> = author_ids.into_iter().collect();
        self.author_ids = Some(author_ids).filter(|author_ids| !author_ids.is_empty());
        self
    }

    #[must_use]
    pub fn with_search<S: Into<String>>(mut self, search: S) -> Self {
        self.search = Some(search.into()).filter(|search| !search.is_empty());
        self
    }

    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit).filter(|limit| *limit > 0);
        self
    }

    pub fn author_ids(&self) -> Option<&[i64]> {
        self.author_ids.as_deref()
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub const fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Number of conditions this filter contributes. The limit is a cap, not
    /// a condition.
    pub fn condition_count(&self) -> usize {
        usize::from(self.author_ids.is_some()) + usize::from(self.search.is_some())
    }

    /// Checks whether a book with the given title and author passes the
    /// author and search conditions.
    ///
    /// The search is a literal case-insensitive substring. `%` and `_` match
    /// themselves, as they do in the escaped SQL pattern.
    pub fn matches(&self, title: &str, author_id: i64) -> bool {
        self.author_ids
            .as_ref()
            .is_none_or(|author_ids| author_ids.contains(&author_id))
            && self.search.as_ref().is_none_or(|search| {
                title.to_lowercase().contains(&search.to_lowercase())
            })
    }
}
