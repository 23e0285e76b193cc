//! Bracket diff for string mismatches.
//!
//! Not a general diff: strips the longest common prefix and the longest
//! common suffix (never overlapping the prefix) and brackets what is left
//! on each side.
//!
//! ```
//! use kirk::diff::bracket_diff;
//!
//! let diff = bracket_diff("irk", "Kirk");
//! assert_eq!(diff.expected, "[]irk");
//! assert_eq!(diff.actual, "[K]irk");
//! ```

/// Expected and actual values with their differing parts bracketed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketDiff {
    /// Expected value, e.g. `[]irk`
    pub expected: String,
    /// Actual value, e.g. `[K]irk`
    pub actual: String,
}

/// Bracket the differing middle of `expected` and `actual`.
///
/// Works on `char`s, so multi-byte text is never split.
#[must_use]
pub fn bracket_diff(expected: &str, actual: &str) -> BracketDiff {
    let expected: Vec<char> = expected.chars().collect();
    let actual: Vec<char> = actual.chars().collect();

    let prefix = common_prefix_len(&expected, &actual);
    let suffix = common_suffix_len(&expected[prefix..], &actual[prefix..]);

    BracketDiff {
        expected: render(&expected, prefix, suffix),
        actual: render(&actual, prefix, suffix),
    }
}

fn common_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

fn common_suffix_len(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

fn render(chars: &[char], prefix: usize, suffix: usize) -> String {
    let middle_end = chars.len() - suffix;
    let mut out = String::with_capacity(chars.len() + 2);
    out.extend(&chars[..prefix]);
    out.push('[');
    out.extend(&chars[prefix..middle_end]);
    out.push(']');
    out.extend(&chars[middle_end..]);
    out
}
