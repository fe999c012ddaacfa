//! Fuzzy question matching.
//!
//! Similarity is the Ratcliff/Obershelp "gestalt" ratio: twice the number of
//! characters in matching blocks divided by the combined length. Matching
//! blocks are found by taking the longest common run and recursing on what
//! lies to its left and right.

use std::collections::HashMap;
use tracing::debug;

/// Minimum similarity ratio for a candidate to count as a match
pub const MATCH_CUTOFF: f64 = 0.6;

/// How many close matches are retained before the best one is picked
pub const MAX_MATCHES: usize = 2;

/// Sequences at least this long get popular characters junked
const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity of `a` and `b` in `[0, 1]`.
///
/// Two empty strings are identical (1.0). The second argument is the one
/// indexed for matching, which only matters once the auto-junk heuristic
/// kicks in for long inputs.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matches = SequenceMatcher::new(&a, &b).matching_characters();
    2.0 * matches as f64 / total as f64
}

/// Candidates with a ratio of at least `cutoff` against `query`, best first.
///
/// At most `n` results are returned. Equal ratios keep their input order.
pub fn get_close_matches<'a>(
    query: &str,
    candidates: &[&'a str],
    n: usize,
    cutoff: f64,
) -> Vec<&'a str> {
    let mut scored: Vec<(f64, &'a str)> = candidates
        .iter()
        .map(|candidate| (similarity_ratio(candidate, query), *candidate))
        .filter(|(ratio, _)| *ratio >= cutoff)
        .collect();

    // Stable, so ties stay in candidate order
    scored.sort_by(|x, y| y.0.total_cmp(&x.0));
    scored.truncate(n);
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// The closest known question to `query`, if any is close enough.
pub fn find_best_match<'a>(query: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let matches = get_close_matches(query, candidates, MAX_MATCHES, MATCH_CUTOFF);
    debug!("Close matches for {:?}: {:?}", query, matches);
    matches.into_iter().next()
}

/// Longest-common-block search over two character sequences.
struct SequenceMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Positions of each usable character of `b`, ascending
    b2j: HashMap<char, Vec<usize>>,
}

impl<'s> SequenceMatcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b2j.entry(*c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let popular = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= popular);
        }

        Self { a, b, b2j }
    }

    /// Longest run `a[i..i+k] == b[j..j+k]` inside the given bounds.
    ///
    /// Among equally long runs the one starting earliest in `a` wins, then the
    /// earliest in `b`. Runs seeded from indexed characters are then widened
    /// over equal neighbours, which lets junked characters join a run.
    fn find_longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next_j2len = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev| j2len.get(&prev))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    next_j2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = next_j2len;
        }

        while besti > alo && bestj > blo && self.a[besti - 1] == self.b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi
            && bestj + bestsize < bhi
            && self.a[besti + bestsize] == self.b[bestj + bestsize]
        {
            bestsize += 1;
        }

        (besti, bestj, bestsize)
    }

    /// Total size of all matching blocks.
    fn matching_characters(&self) -> usize {
        let mut total = 0;
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                queue.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                queue.push((i + k, ahi, j + k, bhi));
            }
        }

        total
    }
}
