//! Ratcliff/Obershelp string similarity.
//!
//! `ratio(a, b)` is `2 * M / T`, where `M` is the number of characters in the
//! matching blocks found by repeatedly taking the longest common substring and
//! recursing on both sides of it, and `T` is the combined length of both strings.
//! Works on Unicode scalar values, not bytes.

/// Similarity in `[0.0, 1.0]`. Two empty strings are identical (`1.0`).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

fn matching_chars(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }

    matched
}

/// Longest block `a[i..i+k] == b[j..j+k]` inside the given windows.
/// Ties go to the block that starts earliest in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo + 1;
    let mut best = (alo, blo, 0);
    // run[x] = length of the common run ending at (i - 1, blo + x - 1)
    let mut run = vec![0usize; width];
    let mut next = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let x = j - blo + 1;
            if a[i] == b[j] {
                let k = run[x - 1] + 1;
                next[x] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            } else {
                next[x] = 0;
            }
        }
        std::mem::swap(&mut run, &mut next);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn identical_strings() {
        approx(ratio("battery", "battery"), 1.0);
        approx(ratio("", ""), 1.0);
    }

    #[test]
    fn disjoint_strings() {
        approx(ratio("abc", "xyz"), 0.0);
        approx(ratio("", "abc"), 0.0);
    }

    #[test]
    fn shifted_overlap() {
        // "bcd" matches: 2 * 3 / 8
        approx(ratio("abcd", "bcde"), 0.75);
    }

    #[test]
    fn recurses_on_both_sides_of_the_longest_block() {
        // blocks "a" + "cd" + "f" -> 4 of 12 characters on each side
        approx(ratio("abcdef", "axcdyf"), 2.0 * 4.0 / 12.0);
    }

    #[test]
    fn prefix_of_longer_name() {
        approx(ratio("battery", "battery_charging"), 14.0 / 23.0);
    }

    #[test]
    fn is_symmetric_for_simple_cases() {
        approx(ratio("home", "house"), ratio("house", "home"));
    }

    #[test]
    fn counts_chars_not_bytes() {
        approx(ratio("café", "cafe"), 2.0 * 3.0 / 8.0);
    }
}
