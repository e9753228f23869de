//! Visibility rules for book cards in the catalogue listing.

pub const FILTER_ALL: &str = "all";

/// A card matches when the term is a case-insensitive substring of its
/// title or author. An empty term matches every card.
pub fn matches_search(term: &str, title: &str, author: &str) -> bool {
    let term = term.to_lowercase();
    title.to_lowercase().contains(&term) || author.to_lowercase().contains(&term)
}

/// A card matches when the filter is `all` or equals its status exactly.
pub fn matches_filter(filter: &str, status: Option<&str>) -> bool {
    filter == FILTER_ALL || status == Some(filter)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_term_matches_everything() {
        assert!(matches_search("", "Dune", "Frank Herbert"));
        assert!(matches_search("", "", ""));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(matches_search("dUnE", "Dune", "Frank Herbert"));
        assert!(matches_search("HERB", "Dune", "Frank Herbert"));
        assert!(!matches_search("tolkien", "Dune", "Frank Herbert"));
    }

    #[test]
    fn test_search_matches_substring_only_within_a_field() {
        // the term must not match across the title/author boundary
        assert!(!matches_search("dunefrank", "Dune", "Frank Herbert"));
    }

    #[test]
    fn test_filter() {
        assert!(matches_filter("all", Some("borrowed")));
        assert!(matches_filter("all", None));
        assert!(matches_filter("borrowed", Some("borrowed")));
        assert!(!matches_filter("borrowed", Some("Borrowed")));
        assert!(!matches_filter("available", Some("borrowed")));
        assert!(!matches_filter("available", None));
    }
}
