//! Word tokenizer shared by every document in the similarity corpus.
//!
//! Rule: lowercase the whole text, then keep each match of `\b\w\w+\b`.
//! `\w` is Unicode-aware (letters, digits, underscore), so "python3" and
//! "snake_case" are single tokens, while "R", "C++" and "7" produce nothing.

use std::sync::OnceLock;

use regex::Regex;

const TOKEN_PATTERN: &str = r"\b\w\w+\b";

fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();
    TOKEN_REGEX.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("Invalid token regex"))
}

/// Splits `text` into lowercase tokens, in order of appearance, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    token_regex()
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Experienced in Python and Docker, built microservices."),
            vec!["experienced", "in", "python", "and", "docker", "built", "microservices"]
        );
    }

    #[test]
    fn test_drops_single_characters() {
        assert_eq!(tokenize("R or C is a b"), vec!["or", "is"]);
    }

    #[test]
    fn test_dotted_names_split() {
        assert_eq!(tokenize("Node.js"), vec!["node", "js"]);
        assert_eq!(tokenize("Scikit-Learn"), vec!["scikit", "learn"]);
    }

    #[test]
    fn test_digits_and_underscores_are_word_characters() {
        assert_eq!(tokenize("python3 snake_case 42 7"), vec!["python3", "snake_case", "42"]);
    }

    #[test]
    fn test_keeps_duplicates() {
        assert_eq!(tokenize("rust RUST Rust"), vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn test_degenerate_inputs_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
        assert!(tokenize("!!! ... ??? -- ++").is_empty());
        assert!(tokenize("a b c 1 2 3").is_empty());
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(tokenize("Café Müller"), vec!["café", "müller"]);
    }
}
