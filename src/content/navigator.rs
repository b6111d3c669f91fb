//! Previous/next lookup over a newest-first article list

use thiserror::Error;

use super::article::ArticleSummary;

/// Navigation lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("Article not found: {0}")]
    NotFound(String),
}

/// Position of an article and its navigable neighbours
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Navigation<'a> {
    /// Index of the matched article in the list
    pub index: usize,
    /// Chronologically older neighbour
    pub previous: Option<&'a ArticleSummary>,
    /// Chronologically newer neighbour
    pub next: Option<&'a ArticleSummary>,
}

impl Navigation<'_> {
    /// True when neither neighbour can be linked to
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none()
    }
}

/// Locate `target` (a decoded slug, or a title for legacy links) in `articles`
///
/// The list must already be ordered newest-first; it is never re-sorted.
/// Neighbours without a slug cannot be linked and are left out.
pub fn locate<'a>(
    articles: &'a [ArticleSummary],
    target: &str,
) -> Result<Navigation<'a>, NavError> {
    let index = articles
        .iter()
        .position(|a| a.slug.as_deref() == Some(target))
        .or_else(|| articles.iter().position(|a| a.title == target))
        .ok_or_else(|| NavError::NotFound(target.to_string()))?;

    let previous = articles
        .get(index + 1)
        .filter(|a| a.navigable_slug().is_some());
    let next = index
        .checked_sub(1)
        .and_then(|i| articles.get(i))
        .filter(|a| a.navigable_slug().is_some());

    Ok(Navigation {
        index,
        previous,
        next,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(slugs: &[Option<&str>]) -> Vec<ArticleSummary> {
        slugs
            .iter()
            .enumerate()
            .map(|(i, slug)| ArticleSummary::new(&i.to_string(), &format!("Title {}", i), *slug))
            .collect()
    }

    fn slug_of(article: Option<&ArticleSummary>) -> Option<&str> {
        article.and_then(|a| a.slug.as_deref())
    }

    #[test]
    fn test_locate_middle() {
        let articles = list(&[Some("a"), Some("b"), Some("c")]);
        let nav = locate(&articles, "b").unwrap();
        assert_eq!(nav.index, 1);
        assert_eq!(slug_of(nav.previous), Some("c"));
        assert_eq!(slug_of(nav.next), Some("a"));
    }

    #[test]
    fn test_locate_ends() {
        let articles = list(&[Some("a"), Some("b"), Some("c")]);

        let head = locate(&articles, "a").unwrap();
        assert_eq!(head.index, 0);
        assert!(head.next.is_none());
        assert_eq!(slug_of(head.previous), Some("b"));

        let tail = locate(&articles, "c").unwrap();
        assert_eq!(tail.index, 2);
        assert!(tail.previous.is_none());
        assert_eq!(slug_of(tail.next), Some("b"));
    }

    #[test]
    fn test_title_fallback() {
        let articles = vec![ArticleSummary::new("1", "X", None)];
        let nav = locate(&articles, "X").unwrap();
        assert_eq!(nav.index, 0);
        assert!(nav.is_empty());
    }

    #[test]
    fn test_slug_match_wins_over_earlier_title_match() {
        let articles = vec![
            ArticleSummary::new("1", "target", Some("first")),
            ArticleSummary::new("2", "Other", Some("target")),
        ];
        assert_eq!(locate(&articles, "target").unwrap().index, 1);
    }

    #[test]
    fn test_first_match_wins() {
        let articles = list(&[Some("dup"), Some("x"), Some("dup")]);
        assert_eq!(locate(&articles, "dup").unwrap().index, 0);
    }

    #[test]
    fn test_not_found() {
        let articles = list(&[Some("a"), Some("b")]);
        assert_eq!(
            locate(&articles, "zzz"),
            Err(NavError::NotFound("zzz".to_string()))
        );
        assert!(locate(&[], "a").is_err());
    }

    #[test]
    fn test_neighbours_without_slug_are_dropped() {
        let articles = list(&[None, Some("b"), Some("")]);
        let nav = locate(&articles, "b").unwrap();
        assert!(nav.previous.is_none());
        assert!(nav.next.is_none());
        assert!(nav.is_empty());
    }
}
