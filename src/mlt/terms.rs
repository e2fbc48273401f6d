//! Term extraction from a seed document.

use indexmap::IndexSet;

use crate::analysis::analyzer::Analyzer;
use crate::document::Document;
use crate::error::Result;
use crate::schema::FieldSet;

/// Analyze the document's indexed text into surface terms.
///
/// Duplicates are kept and the order follows the text.
pub fn extract_terms(
    document: &Document,
    fields: &FieldSet,
    analyzer: &dyn Analyzer,
) -> Result<Vec<String>> {
    let text = document.text_of(fields);
    if text.is_empty() {
        return Ok(Vec::new());
    }
    analyzer.terms(&text)
}

/// Distinct terms in order of first occurrence.
pub fn unique_terms(terms: &[String]) -> Vec<String> {
    terms
        .iter()
        .cloned()
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}
