//! Edit distance and fuzzy comparison of spoken words.

use serde::{Deserialize, Serialize};

/// Similarity above which a spoken word counts as the target.
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Levenshtein distance over Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Share of the longer string that survives the edit, in `0.0..=1.0`.
///
/// Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longer = a.chars().count().max(b.chars().count());
    if longer == 0 {
        return 1.0;
    }
    (longer - levenshtein(a, b)) as f64 / longer as f64
}

/// Outcome of comparing a transcript to the target word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpokenMatch {
    pub is_match: bool,
    /// Similarity of the normalized strings.
    pub similarity: f64,
}

/// Compare what was heard against the target word.
///
/// Both sides are trimmed and lowercased. The word is accepted when the two
/// are equal, when either contains the other, or when their similarity
/// exceeds `threshold`. A blank transcript never matches.
///
/// ## Example
///
/// ```
/// use word_memory::speech::{compare_spoken, DEFAULT_THRESHOLD};
///
/// assert!(compare_spoken("  Apple ", "apple", DEFAULT_THRESHOLD).is_match);
/// assert!(compare_spoken("an apple please", "Apple", DEFAULT_THRESHOLD).is_match);
/// assert!(compare_spoken("aple", "apple", DEFAULT_THRESHOLD).is_match);
/// assert!(!compare_spoken("tree", "apple", DEFAULT_THRESHOLD).is_match);
/// ```
pub fn compare_spoken(spoken: &str, target: &str, threshold: f64) -> SpokenMatch {
    let spoken = spoken.trim().to_lowercase();
    let target = target.trim().to_lowercase();
    let similarity = similarity(&spoken, &target);

    if spoken.is_empty() {
        return SpokenMatch {
            is_match: false,
            similarity,
        };
    }

    let is_match = spoken == target
        || spoken.contains(&target)
        || target.contains(&spoken)
        || similarity > threshold;
    SpokenMatch { is_match, similarity }
}
