//! Tokenization helpers shared by the scoring factors.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z0-9]+").unwrap());

/// Corporate suffixes and glue words excluded from name matching.
const NAME_STOPWORDS: &[&str] = &[
    "inc", "llc", "ltd", "corp", "co", "the", "and", "of", "for",
];

/// Lowercased alphanumeric tokens of length ≥ 2, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .filter(|t| t.len() >= 2)
        .collect()
}

/// Unique tokens of a text.
pub fn token_set(text: &str) -> HashSet<String> {
    tokenize(text).into_iter().collect()
}

/// Business-name tokens with corporate suffixes filtered out.
pub fn name_tokens(name: &str) -> Vec<String> {
    tokenize(name)
        .into_iter()
        .filter(|t| !NAME_STOPWORDS.contains(&t.as_str()))
        .collect()
}

/// Adjacent token pairs ("exact phrases" of two words).
pub fn bigrams(text: &str) -> HashSet<(String, String)> {
    let tokens = tokenize(text);
    tokens
        .windows(2)
        .map(|w| (w[0].clone(), w[1].clone()))
        .collect()
}

/// Tokens of a website's host: scheme, `www.`, and path stripped,
/// host split on dots and hyphens.
pub fn domain_tokens(website: &str) -> Vec<String> {
    let trimmed = website.trim().to_lowercase();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(&trimmed);
    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    host.split(['.', '-'])
        .filter(|part| part.len() >= 2 && *part != "com" && *part != "net" && *part != "org")
        .map(|part| part.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_drops_punctuation_and_short_tokens() {
        let tokens = tokenize("Custom Computer-Programming, Services & A");
        assert_eq!(tokens, vec!["custom", "computer", "programming", "services"]);
    }

    #[test]
    fn name_tokens_drop_corporate_suffixes() {
        let tokens = name_tokens("Tech Solutions Inc");
        assert_eq!(tokens, vec!["tech", "solutions"]);
    }

    #[test]
    fn domain_tokens_strip_scheme_www_and_tld() {
        let tokens = domain_tokens("https://www.techsolutions-software.com/about");
        assert_eq!(tokens, vec!["techsolutions", "software"]);
    }

    #[test]
    fn domain_tokens_of_empty_website_are_empty() {
        assert!(domain_tokens("").is_empty());
    }
}
