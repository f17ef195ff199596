// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Transliterates to ASCII, lower-cases and joins words with `-`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(input: &str) -> String {
        DefaultSlugGenerator.slugify(input)
    }

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slug("My Blog"), "my-blog");
    }

    #[test]
    fn collapses_and_trims_separators() {
        assert_eq!(slug("  Hello,   World!!  "), "hello-world");
        assert_eq!(slug("--rust--and--axum--"), "rust-and-axum");
    }

    #[test]
    fn transliterates_non_ascii() {
        assert_eq!(slug("Café Crème"), "cafe-creme");
    }

    #[test]
    fn empty_and_symbol_only_input_yield_empty_slug() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("   "), "");
        assert_eq!(slug("!!! ??? ..."), "");
    }

    #[test]
    fn deterministic_and_whitespace_free() {
        for title in ["Tabs\tand\nnewlines", "Ünïcödé Title 2024", "a  b   c"] {
            let first = slug(title);
            assert_eq!(first, slug(title));
            assert!(!first.chars().any(char::is_whitespace), "{first:?}");
        }
    }
}
