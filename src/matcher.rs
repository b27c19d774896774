//! Fuzzy match gateway: adapts lines + query into ordered matches.
//!
//! The scoring algorithm itself is a black box (`fuzzy-matcher`'s skim
//! implementation); this gateway owns the local ordering policy. Scores
//! are normalized so that lower = better, then results are re-sorted
//! ascending (stable, ties broken by original index) before display.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A line that survived the current query, ready to render.
///
/// Recomputed from scratch on every query edit, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedLine {
    /// Index of the line in the menu's full line set.
    pub origin: usize,
    /// The line content.
    pub content: String,
    /// Rune offsets within `content` to render with highlight style.
    pub positions: Vec<usize>,
}

/// The gateway in front of the fuzzy matcher.
pub struct MatchGateway {
    matcher: SkimMatcherV2,
}

impl MatchGateway {
    /// Create a gateway with the default matcher configuration.
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Filter and order candidates against a query.
    ///
    /// An empty query is an identity pass-through: every candidate, in
    /// original order, with no highlight positions. A non-empty query
    /// keeps only scored candidates, ordered best-first.
    pub fn matches<'a, I>(&self, candidates: I, query: &str) -> Vec<MatchedLine>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if query.is_empty() {
            return candidates
                .into_iter()
                .enumerate()
                .map(|(origin, content)| MatchedLine {
                    origin,
                    content: content.to_string(),
                    positions: Vec::new(),
                })
                .collect();
        }

        let mut scored: Vec<(i64, MatchedLine)> = candidates
            .into_iter()
            .enumerate()
            .filter_map(|(origin, content)| {
                self.matcher
                    .fuzzy_indices(content, query)
                    .map(|(score, positions)| {
                        // Skim scores are higher-is-better; negate so the
                        // ascending re-sort puts the best match first.
                        (
                            -score,
                            MatchedLine {
                                origin,
                                content: content.to_string(),
                                positions,
                            },
                        )
                    })
            })
            .collect();

        scored.sort_by_key(|(score, line)| (*score, line.origin));
        scored.into_iter().map(|(_, line)| line).collect()
    }
}

impl Default for MatchGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(matches: &[MatchedLine]) -> Vec<&str> {
        matches.iter().map(|m| m.content.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let gateway = MatchGateway::new();
        let matches = gateway.matches(["banana", "apple", "grape"], "");
        assert_eq!(contents(&matches), ["banana", "apple", "grape"]);
        assert!(matches.iter().all(|m| m.positions.is_empty()));
        assert_eq!(
            matches.iter().map(|m| m.origin).collect::<Vec<_>>(),
            [0, 1, 2]
        );
    }

    #[test]
    fn test_non_matching_lines_are_dropped() {
        let gateway = MatchGateway::new();
        let matches = gateway.matches(["apple", "banana", "grape"], "ap");
        assert!(matches.iter().all(|m| m.content.contains('a')));
        assert!(!contents(&matches).contains(&"banana"));
    }

    #[test]
    fn test_best_match_first() {
        let gateway = MatchGateway::new();
        let matches = gateway.matches(["grape", "apple"], "apple");
        assert_eq!(matches[0].content, "apple");
        assert_eq!(matches[0].origin, 1);
    }

    #[test]
    fn test_origins_refer_to_existing_lines() {
        let gateway = MatchGateway::new();
        let lines = ["alpha", "beta", "gamma", "delta"];
        let matches = gateway.matches(lines, "a");
        assert!(!matches.is_empty());
        for m in &matches {
            assert!(m.origin < lines.len());
            assert_eq!(m.content, lines[m.origin]);
        }
    }

    #[test]
    fn test_positions_are_rune_offsets_within_content() {
        let gateway = MatchGateway::new();
        let matches = gateway.matches(["apple"], "ape");
        assert_eq!(matches.len(), 1);
        let runes: Vec<char> = matches[0].content.chars().collect();
        for &pos in &matches[0].positions {
            assert!(pos < runes.len());
        }
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let gateway = MatchGateway::new();
        assert!(gateway.matches(["x"], "zz").is_empty());
    }
}
