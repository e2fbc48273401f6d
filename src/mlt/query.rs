//! Boosted query construction.

use crate::error::{MoreLikeError, Result};
use crate::mlt::tfidf::TfIdfScores;

/// Turn weights into a text-search string.
///
/// Each term is repeated `floor(score / min)` times, at least once, where
/// `min` is the smallest weight; repetitions boost a term in the store's
/// relevance ranking. The ratio is computed in floating point, so a term at
/// exactly three times the minimum may come out as `2.999...` and be
/// repeated twice.
///
/// ```
/// use morelike::mlt::{make_query, TfIdfScores};
///
/// let scores = TfIdfScores::from([("node", 0.5753641449035618), ("example", 1.3862943611198906)]);
/// assert_eq!(make_query(&scores).unwrap(), "node example example");
/// ```
pub fn make_query(scores: &TfIdfScores) -> Result<String> {
    let min = scores.min_score().ok_or(MoreLikeError::EmptyScore)?;

    let mut words = Vec::new();
    for (term, score) in scores.iter() {
        let repeat = ((score / min).floor() as usize).max(1);
        words.extend(std::iter::repeat_n(term, repeat));
    }

    Ok(words.join(" "))
}
