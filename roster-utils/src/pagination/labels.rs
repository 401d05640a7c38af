//! Page-number label sequences with ellipsis compression.

use std::fmt;

/// Maximum number of plain page numbers before compression kicks in.
const DEFAULT_MAX_VISIBLE: usize = 5;

/// One token of a pagination footer: a navigable page number or a
/// non-navigable elided-range marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    Ellipsis,
}

impl PageToken {
    /// The page number behind this token, if it is navigable.
    pub fn page(self) -> Option<usize> {
        match self {
            Self::Page(page) => Some(page),
            Self::Ellipsis => None,
        }
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("..."),
        }
    }
}

/// Build the label sequence for a pagination footer.
///
/// Short ranges are emitted whole; longer ranges keep the first and last
/// page visible and compress the gap around the current page. The result
/// never exceeds 7 tokens.
pub fn page_labels(current_page: usize, total_pages: usize) -> Vec<PageToken> {
    page_labels_with_max(current_page, total_pages, DEFAULT_MAX_VISIBLE)
}

fn page_labels_with_max(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Vec<PageToken> {
    let total_pages = total_pages.max(1);
    let mut tokens = Vec::new();

    if total_pages <= max_visible {
        tokens.extend((1..=total_pages).map(PageToken::Page));
        return tokens;
    }

    if current_page <= 3 {
        tokens.extend((1..=4).map(PageToken::Page));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    } else if current_page >= total_pages - 2 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        tokens.extend((total_pages - 3..=total_pages).map(PageToken::Page));
    } else {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
        tokens.extend((current_page - 1..=current_page + 1).map(PageToken::Page));
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(tokens: &[PageToken]) -> Vec<Option<usize>> {
        tokens.iter().map(|token| token.page()).collect()
    }

    #[test]
    fn short_ranges_have_no_ellipsis() {
        for total in 1..=5 {
            let tokens = page_labels(1, total);
            assert_eq!(tokens.len(), total);
            assert!(tokens.iter().all(|token| token.page().is_some()));
        }
    }

    #[test]
    fn head_of_long_range_compresses_the_tail() {
        let tokens = page_labels(1, 10);
        assert_eq!(
            pages(&tokens),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );

        // Same shape for pages 2 and 3.
        assert_eq!(page_labels(2, 10), tokens);
        assert_eq!(page_labels(3, 10), tokens);
    }

    #[test]
    fn middle_of_long_range_compresses_both_sides() {
        let tokens = page_labels(6, 10);
        assert_eq!(
            pages(&tokens),
            vec![Some(1), None, Some(5), Some(6), Some(7), None, Some(10)]
        );
    }

    #[test]
    fn tail_of_long_range_compresses_the_head() {
        let tokens = page_labels(10, 10);
        assert_eq!(
            pages(&tokens),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );

        assert_eq!(page_labels(8, 10), tokens);
        assert_eq!(page_labels(9, 10), tokens);
    }

    #[test]
    fn never_more_than_seven_tokens() {
        for total in 1..=40 {
            for current in 1..=total {
                let tokens = page_labels(current, total);
                assert!(tokens.len() <= 7, "{current}/{total} -> {tokens:?}");
            }
        }
    }

    #[test]
    fn ellipsis_renders_as_three_dots() {
        assert_eq!(PageToken::Ellipsis.to_string(), "...");
        assert_eq!(PageToken::Page(7).to_string(), "7");
    }
}
