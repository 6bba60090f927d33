//! Admin Search Bar
//!
//! The admin header has one search box. Its placeholder and form action
//! follow the list the admin is looking at.

use crate::dom;
use crate::error::ActionResult;

pub const INPUT_SELECTOR: &str = "#admins_search_panel";
pub const FORM_SELECTOR: &str = "#catcher_admins_search_panel";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchScope {
    Posts,
    Users,
    Categories,
}

impl SearchScope {
    pub fn for_path(path: &str) -> Option<Self> {
        match path {
            "/myadmin/posts/" | "/myadmin/search/post/" => Some(SearchScope::Posts),
            "/myadmin/users/" | "/myadmin/search/user/" => Some(SearchScope::Users),
            "/myadmin/categories/" | "/myadmin/search/cat/" => Some(SearchScope::Categories),
            _ => None,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SearchScope::Posts => "Поиск по статьям",
            SearchScope::Users => "Поиск пользователей",
            SearchScope::Categories => "Поиск по категориям",
        }
    }

    pub fn action(self) -> &'static str {
        match self {
            SearchScope::Posts => "/myadmin/search/post/",
            SearchScope::Users => "/myadmin/search/user/",
            SearchScope::Categories => "/myadmin/search/cat/",
        }
    }
}

/// Relabel the search bar for `path`. Returns the scope that was applied.
pub fn relabel(path: &str) -> ActionResult<Option<SearchScope>> {
    let Some(scope) = SearchScope::for_path(path) else {
        return Ok(None);
    };
    // Pages without the admin header simply have nothing to relabel
    if let Some(input) = dom::query_opt(INPUT_SELECTOR) {
        input.set_attribute("placeholder", scope.placeholder())?;
    }
    if let Some(form) = dom::query_opt(FORM_SELECTOR) {
        form.set_attribute("action", scope.action())?;
    }
    Ok(Some(scope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/myadmin/posts/", "Поиск по статьям", "/myadmin/search/post/")]
    #[case("/myadmin/search/post/", "Поиск по статьям", "/myadmin/search/post/")]
    #[case("/myadmin/users/", "Поиск пользователей", "/myadmin/search/user/")]
    #[case("/myadmin/search/user/", "Поиск пользователей", "/myadmin/search/user/")]
    #[case("/myadmin/categories/", "Поиск по категориям", "/myadmin/search/cat/")]
    #[case("/myadmin/search/cat/", "Поиск по категориям", "/myadmin/search/cat/")]
    fn test_scope_for_path(#[case] path: &str, #[case] placeholder: &str, #[case] action: &str) {
        let scope = SearchScope::for_path(path).unwrap();
        assert_eq!(scope.placeholder(), placeholder);
        assert_eq!(scope.action(), action);
    }

    #[rstest]
    #[case("/myadmin/")]
    #[case("/myadmin/questions/")]
    #[case("/myadmin/posts")]
    #[case("/")]
    fn test_other_paths_untouched(#[case] path: &str) {
        assert_eq!(SearchScope::for_path(path), None);
    }
}
