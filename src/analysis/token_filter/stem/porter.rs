//! Porter stemming algorithm implementation.
//!
//! An implementation of M.F. Porter's 1980 suffix-stripping algorithm for
//! English. The word is lower-cased and then rewritten by the classic steps:
//!
//! 1. 1a plurals, 1b `-ed`/`-ing`, 1c terminal `y` → `i`
//! 2. double suffixes (`-ational` → `-ate`, `-ization` → `-ize`, ...)
//! 3. `-icate` → `-ic`, `-ful` → "", ...
//! 4. `-al`, `-ance`, `-ment`, `-ent`, ... removed when the stem is long enough
//! 5. final `-e` and `-ll`
//!
//! In steps 2 to 4 only the longest matching suffix is considered. It is
//! replaced when the remaining stem satisfies the measure condition;
//! otherwise the step leaves the word alone.
//!
//! # Examples
//!
//! ```
//! use morelike::analysis::token_filter::stem::Stemmer;
//! use morelike::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("document"), "docum");
//! assert_eq!(stemmer.stem("University"), "univers");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }
}

/// `y` is a consonant at the start of a word or after a vowel.
fn is_consonant(word: &[char], i: usize) -> bool {
    match word[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !is_consonant(word, i - 1),
        _ => true,
    }
}

/// The number of vowel-consonant sequences, `m` in `[C](VC){m}[V]`.
fn measure(word: &[char]) -> usize {
    let n = word.len();
    let mut m = 0;
    let mut i = 0;

    // Skip initial consonants
    while i < n && is_consonant(word, i) {
        i += 1;
    }

    loop {
        while i < n && !is_consonant(word, i) {
            i += 1;
        }
        if i >= n {
            break;
        }

        m += 1;

        while i < n && is_consonant(word, i) {
            i += 1;
        }
    }

    m
}

fn contains_vowel(word: &[char]) -> bool {
    (0..word.len()).any(|i| !is_consonant(word, i))
}

fn ends_with(word: &[char], suffix: &str) -> bool {
    word.len() >= suffix.len() && word[word.len() - suffix.len()..].iter().copied().eq(suffix.chars())
}

fn ends_with_double_consonant(word: &[char]) -> bool {
    let n = word.len();
    n >= 2 && word[n - 1] == word[n - 2] && is_consonant(word, n - 1)
}

/// Consonant-vowel-consonant ending where the last consonant is not w, x or y.
fn ends_cvc(word: &[char]) -> bool {
    let n = word.len();
    n >= 3
        && is_consonant(word, n - 3)
        && !is_consonant(word, n - 2)
        && is_consonant(word, n - 1)
        && !matches!(word[n - 1], 'w' | 'x' | 'y')
}

fn stem_len(word: &[char], suffix: &str) -> usize {
    word.len() - suffix.len()
}

fn replace_suffix(word: &mut Vec<char>, suffix: &str, replacement: &str) {
    word.truncate(stem_len(word, suffix));
    word.extend(replacement.chars());
}

/// Rule tables list a suffix before any shorter suffix it ends with, so the
/// first match is the longest.
fn longest_suffix<'a, T>(
    word: &[char],
    rules: &'a [T],
    suffix_of: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    rules.iter().find(|rule| ends_with(word, suffix_of(rule)))
}

/// Apply the longest matching rule if its stem has a measure greater than
/// `min_measure`.
fn apply_longest_rule(word: &mut Vec<char>, rules: &[(&str, &str)], min_measure: usize) {
    let Some((suffix, replacement)) = longest_suffix(word, rules, |(suffix, _)| *suffix) else {
        return;
    };
    if measure(&word[..stem_len(word, suffix)]) > min_measure {
        replace_suffix(word, suffix, replacement);
    }
}

fn step1a(word: &mut Vec<char>) {
    if ends_with(word, "sses") {
        replace_suffix(word, "sses", "ss");
    } else if ends_with(word, "ies") {
        replace_suffix(word, "ies", "i");
    } else if ends_with(word, "ss") {
        // unchanged
    } else if ends_with(word, "s") {
        word.pop();
    }
}

fn step1b(word: &mut Vec<char>) {
    if ends_with(word, "eed") {
        if measure(&word[..stem_len(word, "eed")]) > 0 {
            replace_suffix(word, "eed", "ee");
        }
        return;
    }

    let suffix = if ends_with(word, "ed") {
        "ed"
    } else if ends_with(word, "ing") {
        "ing"
    } else {
        return;
    };

    if !contains_vowel(&word[..stem_len(word, suffix)]) {
        return;
    }
    word.truncate(stem_len(word, suffix));

    if ends_with(word, "at") || ends_with(word, "bl") || ends_with(word, "iz") {
        word.push('e');
    } else if ends_with_double_consonant(word) && !matches!(word.last(), Some('l' | 's' | 'z')) {
        word.pop();
    } else if measure(word) == 1 && ends_cvc(word) {
        word.push('e');
    }
}

fn step1c(word: &mut Vec<char>) {
    let n = word.len();
    if ends_with(word, "y") && contains_vowel(&word[..n - 1]) {
        word[n - 1] = 'i';
    }
}

fn step4(word: &mut Vec<char>) {
    let Some(suffix) = longest_suffix(word, STEP4_SUFFIXES, |suffix| *suffix) else {
        return;
    };
    let stem = &word[..stem_len(word, suffix)];
    if measure(stem) <= 1 {
        return;
    }
    // -ion only goes after s or t
    if *suffix == "ion" && !matches!(stem.last(), Some('s' | 't')) {
        return;
    }
    word.truncate(stem_len(word, suffix));
}

fn step5(word: &mut Vec<char>) {
    if ends_with(word, "e") {
        let stem = &word[..word.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            word.pop();
        }
    }

    if ends_with(word, "l") && ends_with_double_consonant(word) && measure(word) > 1 {
        word.pop();
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        let mut chars: Vec<char> = lowered.chars().collect();
        if chars.len() <= 2 {
            return lowered;
        }

        step1a(&mut chars);
        step1b(&mut chars);
        step1c(&mut chars);
        apply_longest_rule(&mut chars, STEP2_RULES, 0);
        apply_longest_rule(&mut chars, STEP3_RULES, 0);
        step4(&mut chars);
        step5(&mut chars);

        chars.into_iter().collect()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
