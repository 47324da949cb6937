//! Partial string similarity on a 0–100 scale.
//!
//! The shorter string is slid across the longer one in equal-length windows and
//! the best window wins, so "backend developer" scores 100 against "backend".
//! Each window is scored by matched characters, `2·M / (len_a + len_b)`, where
//! `M` is the longest common subsequence. A dropped letter costs one unmatched
//! char rather than a substitution plus a shift.

/// Best-aligned substring similarity between `a` and `b`, 0–100.
///
/// Case-sensitive; callers lowercase both sides. Empty input scores 0.
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() || b_chars.is_empty() {
        return 0;
    }

    let (shorter, longer) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let mut best = 0.0_f64;
    for window in longer.windows(shorter.len()) {
        let score = ratio(shorter, window);
        if score > best {
            best = score;
            if best >= 1.0 {
                break;
            }
        }
    }

    to_percent(best)
}

/// `2·M / (len_a + len_b)` over chars, with `M` the LCS length.
fn ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    (2 * lcs_len(a, b)) as f64 / total as f64
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut row = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            row[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(row[j])
            };
        }
        std::mem::swap(&mut prev, &mut row);
    }

    prev[b.len()]
}

fn to_percent(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}
