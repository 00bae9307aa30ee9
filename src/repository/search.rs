//! Name search over the cached listing

use super::{normalize_key, NamedRef};

/// Queries shorter than this are ignored
pub const MIN_QUERY_LEN: usize = 2;
/// Maximum number of suggestions returned
pub const MAX_SEARCH_RESULTS: usize = 10;

/// What a caller should do for a search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan<'a> {
    /// Query too short to search
    TooShort,
    /// Names containing the query, in listing order
    Matches(Vec<&'a NamedRef>),
    /// Nothing in the listing matched; try the query as a direct lookup
    DirectLookup(String),
    /// Nothing matched and the query is too short for a direct lookup
    NoMatches,
}

/// Decide how to answer `query` from the name listing.
///
/// Debouncing the direct lookup is left to the caller.
///
/// # Examples
///
/// ```
/// use teamsprite::repository::{plan_search, NamedRef, SearchPlan};
///
/// let names = vec![NamedRef { name: "pikachu".into(), ref_url: String::new() }];
/// assert!(matches!(plan_search(&names, "PIKA"), SearchPlan::Matches(m) if m.len() == 1));
/// assert_eq!(plan_search(&names, "p"), SearchPlan::TooShort);
/// assert_eq!(plan_search(&names, "mew"), SearchPlan::DirectLookup("mew".into()));
/// ```
pub fn plan_search<'a>(names: &'a [NamedRef], query: &str) -> SearchPlan<'a> {
    let query = normalize_key(query);
    let len = query.chars().count();
    if len < MIN_QUERY_LEN {
        return SearchPlan::TooShort;
    }

    let matches: Vec<&NamedRef> =
        names.iter().filter(|n| n.name.contains(query.as_str())).take(MAX_SEARCH_RESULTS).collect();

    if !matches.is_empty() {
        SearchPlan::Matches(matches)
    } else if len > MIN_QUERY_LEN {
        SearchPlan::DirectLookup(query)
    } else {
        SearchPlan::NoMatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<NamedRef> {
        list.iter()
            .map(|n| NamedRef { name: n.to_string(), ref_url: format!("https://example.test/{}", n) })
            .collect()
    }

    #[test]
    fn test_short_query() {
        let list = names(&["pikachu"]);
        assert_eq!(plan_search(&list, ""), SearchPlan::TooShort);
        assert_eq!(plan_search(&list, " p "), SearchPlan::TooShort);
    }

    #[test]
    fn test_matches_are_limited_and_ordered() {
        let all: Vec<String> = (0..15).map(|i| format!("mon{}", i)).collect();
        let refs: Vec<&str> = all.iter().map(String::as_str).collect();
        let list = names(&refs);
        match plan_search(&list, "mon") {
            SearchPlan::Matches(found) => {
                assert_eq!(found.len(), MAX_SEARCH_RESULTS);
                assert_eq!(found[0].name, "mon0");
                assert_eq!(found[9].name, "mon9");
            }
            other => panic!("expected matches, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match_falls_back_to_direct_lookup() {
        let list = names(&["bulbasaur", "ivysaur"]);
        assert_eq!(plan_search(&list, "Pikachu"), SearchPlan::DirectLookup("pikachu".to_string()));
        assert_eq!(plan_search(&list, "zz"), SearchPlan::NoMatches);
    }
}
