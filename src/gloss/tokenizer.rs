//! Word-level tokenizer
//!
//! Segments text on Unicode word boundaries (UAX #29), then joins adjacent
//! segments that no whitespace or punctuation separates. "don't" and "3.14"
//! stay one unit, "Hello," splits into "Hello" and ",", and an unspaced
//! Japanese clause such as "私は学生です" is a single unit rather than one per
//! character. Surrounding punctuation is then stripped and units that become
//! empty are dropped.

use std::fmt;
use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

/// Non-ASCII punctuation that commonly brackets words in the supported languages
const EXTRA_PUNCTUATION: &[char] = &[
    '。', '、', '，', '．', '！', '？', '：', '；', '「', '」', '『', '』', '（', '）', '【',
    '】', '〈', '〉', '《', '》', '・', '…', '।', '॥', '“', '”', '‘', '’', '«', '»', '—', '–',
    '¡', '¿',
];

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

/// Segment made only of whitespace and punctuation
fn is_separator(segment: &str) -> bool {
    segment
        .chars()
        .all(|c| c.is_whitespace() || is_punctuation(c))
}

/// A non-empty word with surrounding punctuation removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a>(&'a str);

impl<'a> Token<'a> {
    /// Strip a raw segment; `None` if nothing remains
    pub fn new(segment: &'a str) -> Option<Self> {
        let stripped = segment.trim_matches(|c: char| c.is_whitespace() || is_punctuation(c));
        (!stripped.is_empty()).then_some(Token(stripped))
    }

    /// The stripped text
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Tokenizer over one input text; iterate it as many times as needed
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    text: &'a str,
}

impl<'a> Tokenizer<'a> {
    /// Tokenizer over `text`
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// A fresh lazy pass over the tokens
    pub fn tokens(&self) -> Tokens<'a> {
        Tokens {
            text: self.text,
            bounds: self.text.split_word_bound_indices(),
        }
    }
}

impl<'a> IntoIterator for Tokenizer<'a> {
    type Item = Token<'a>;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        self.tokens()
    }
}

/// Lazy token sequence produced by [`Tokenizer::tokens`]
pub struct Tokens<'a> {
    text: &'a str,
    bounds: UWordBoundIndices<'a>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let text = self.text;
        // byte range of the current run of non-separator segments
        let mut run: Option<(usize, usize)> = None;

        for (idx, segment) in self.bounds.by_ref() {
            if is_separator(segment) {
                let token = run
                    .take()
                    .and_then(|(start, end)| Token::new(&text[start..end]));
                if token.is_some() {
                    return token;
                }
                continue;
            }

            let end = idx + segment.len();
            run = Some(run.map_or((idx, end), |(start, _)| (start, end)));
        }

        run.and_then(|(start, end)| Token::new(&text[start..end]))
    }
}

/// Convenience for `Tokenizer::new(text).tokens()`
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokenizer::new(text).tokens()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        tokenize(text).map(|t| t.as_str()).collect()
    }

    #[test]
    fn test_punctuation_split_off() {
        assert_eq!(words("Hello, world!"), vec!["Hello", "world"]);
    }

    #[test]
    fn test_contractions_stay_whole() {
        assert_eq!(words("I don't know."), vec!["I", "don't", "know"]);
    }

    #[test]
    fn test_punctuation_only_units_dropped() {
        assert_eq!(words("... -- !? \"\""), Vec::<&str>::new());
        assert_eq!(words("wait ... what"), vec!["wait", "what"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("  \n\t ").count(), 0);
    }

    #[test]
    fn test_indic_danda_stripped() {
        assert_eq!(words("नमस्ते दुनिया।"), vec!["नमस्ते", "दुनिया"]);
    }

    #[test]
    fn test_unspaced_japanese_clause_is_one_token() {
        assert_eq!(words("私は学生です。"), vec!["私は学生です"]);
        assert_eq!(words("私は 学生です、よろしく。"), vec!["私は", "学生です", "よろしく"]);
    }

    #[test]
    fn test_numbers_and_hyphens() {
        assert_eq!(words("pi is 3.14"), vec!["pi", "is", "3.14"]);
        assert_eq!(words("well-known"), vec!["well", "known"]);
    }

    #[test]
    fn test_tokenizer_is_restartable() {
        let tokenizer = Tokenizer::new("one two, three");
        let first: Vec<_> = tokenizer.tokens().collect();
        let second: Vec<_> = tokenizer.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_token_new() {
        assert_eq!(Token::new("(quoted)").map(|t| t.as_str()), Some("quoted"));
        assert_eq!(Token::new("!!!"), None);
        assert_eq!(Token::new(" "), None);
    }
}
