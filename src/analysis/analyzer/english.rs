use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Word tokenizer, lowercasing, English stop words. The default analyzer for
/// seed text and for the memory store's text index.
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        Ok(Self::with_tokenizer(tokenizer))
    }

    fn with_tokenizer(tokenizer: Arc<RegexTokenizer>) -> Self {
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::default()))
            .with_name("english");

        Self { inner: analyzer }
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::with_tokenizer(Arc::new(RegexTokenizer::default()))
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_analyzer() {
        let analyzer = EnglishAnalyzer::new().unwrap();

        assert_eq!(
            analyzer
                .terms("This node document is a good example document about node")
                .unwrap(),
            vec!["node", "document", "good", "example", "document", "node"]
        );
    }

    #[test]
    fn test_numbers_survive() {
        let analyzer = EnglishAnalyzer::default();

        assert_eq!(
            analyzer.terms("University of Michigan 2005").unwrap(),
            vec!["university", "michigan", "2005"]
        );
    }

    #[test]
    fn test_english_analyzer_name() {
        assert_eq!(EnglishAnalyzer::default().name(), "english");
    }
}
