//! Case-insensitive text filtering for the navigation dropdowns.

/// True when `haystack` contains `term`, ignoring case. A blank term matches everything.
#[must_use]
pub fn matches(haystack: &str, term: &str) -> bool {
    let term = term.trim();
    term.is_empty() || haystack.to_lowercase().contains(&term.to_lowercase())
}

/// Keeps the items whose key contains `term`.
pub fn filter_by<'a, T, F>(items: &'a [T], term: &str, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    items.iter().filter(|item| matches(key(*item), term)).collect()
}

/// The visible head of a longer result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    /// More results exist than are shown.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.total > self.items.len()
    }

    /// `"Showing first 50 of 120 results"` when truncated.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        self.is_truncated()
            .then(|| format!("Showing first {} of {} results", self.items.len(), self.total))
    }
}

/// Truncates `items` to `limit` entries, remembering how many there were.
///
/// A `limit` of zero means no limit.
#[must_use]
pub fn paginate<T>(mut items: Vec<T>, limit: usize) -> Page<T> {
    let total = items.len();
    if limit > 0 {
        items.truncate(limit);
    }
    Page { items, total }
}
