//! Word-by-word gloss assembly

use tracing::debug;

use crate::core::models::{Gloss, GlossEntry, LanguagePair};
use crate::core::translator::Translator;
use crate::gloss::tokenizer::Tokenizer;
use crate::gloss::word::WordTranslator;

/// Builds an ordered gloss by translating every token of a sentence on its own
pub struct GlossAssembler<'t> {
    words: WordTranslator<'t>,
}

impl<'t> GlossAssembler<'t> {
    /// Create an assembler over `translator`
    pub fn new(translator: &'t dyn Translator) -> Self {
        Self {
            words: WordTranslator::new(translator),
        }
    }

    /// Translate tokens sequentially, in order of appearance
    pub async fn assemble(&self, text: &str, pair: LanguagePair) -> Gloss {
        let mut entries = Vec::new();

        for token in Tokenizer::new(text).tokens() {
            let translation = self.words.translate(token, pair).await;
            entries.push(GlossEntry {
                token: token.as_str().to_string(),
                translation,
            });
        }

        let gloss = Gloss::new(entries);
        debug!(
            "Glossed {} tokens ({} failed) for {}",
            gloss.len(),
            gloss.failure_count(),
            pair
        );
        gloss
    }

    /// `"<token> : <translation>"` lines joined by `\n`
    pub async fn explain(&self, text: &str, pair: LanguagePair) -> String {
        self.assemble(text, pair).await.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mock::{MockMode, MockTranslator};
    use crate::core::models::{Language, TRANSLATION_ERROR_MARKER};

    fn en_en() -> LanguagePair {
        LanguagePair::new(Language::English, Language::English)
    }

    #[tokio::test]
    async fn test_identity_gloss() {
        let mock = MockTranslator::new(MockMode::Identity);
        let out = GlossAssembler::new(&mock).explain("Hello, world!", en_en()).await;
        assert_eq!(out, "Hello : Hello\nworld : world");
    }

    #[tokio::test]
    async fn test_one_line_per_word() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let text = "the quick brown fox, jumps over the lazy dog.";
        let out = GlossAssembler::new(&mock).explain(text, en_en()).await;

        assert_eq!(out.lines().count(), 9);
        assert_eq!(mock.call_count(), 9);
    }

    #[tokio::test]
    async fn test_single_failure_is_isolated() {
        let mock = MockTranslator::failing_on(["brown"]);
        let gloss = GlossAssembler::new(&mock)
            .assemble("quick brown fox", en_en())
            .await;

        let lines: Vec<String> = gloss.entries().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "quick : quick_en".to_string(),
                format!("brown : {}", TRANSLATION_ERROR_MARKER),
                "fox : fox_en".to_string(),
            ]
        );
        assert_eq!(gloss.failure_count(), 1);
    }

    #[tokio::test]
    async fn test_all_failures_still_produce_every_line() {
        let mock = MockTranslator::new(MockMode::Error("offline".to_string()));
        let out = GlossAssembler::new(&mock).explain("a b c", en_en()).await;
        assert_eq!(
            out,
            "a : [Translation error]\nb : [Translation error]\nc : [Translation error]"
        );
    }

    #[tokio::test]
    async fn test_empty_text_yields_empty_string() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let out = GlossAssembler::new(&mock).explain("?!", en_en()).await;
        assert_eq!(out, "");
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_gloss_is_deterministic() {
        let mock = MockTranslator::new(MockMode::Suffix);
        let assembler = GlossAssembler::new(&mock);
        let pair = LanguagePair::new(Language::English, Language::Bengali);

        let first = assembler.explain("same input, same output", pair).await;
        let second = assembler.explain("same input, same output", pair).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_tokens_requested_in_order() {
        let mock = MockTranslator::new(MockMode::Identity);
        GlossAssembler::new(&mock)
            .assemble("one, two; three.", en_en())
            .await;
        assert_eq!(mock.requested_texts(), vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_unspaced_japanese_is_one_line_per_word() {
        let mock = MockTranslator::new(MockMode::Identity);
        let pair = LanguagePair::new(Language::Japanese, Language::English);
        let out = GlossAssembler::new(&mock).explain("私は学生です。", pair).await;

        assert_eq!(out, "私は学生です : 私は学生です");
        assert_eq!(mock.call_count(), 1);
    }
}
