use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Matcher, Utf32String};
use serde::Serialize;

use crate::base::Comparer;

/// One quick-open result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    /// Position in the candidate slice
    pub index: usize,
    pub item: String,
    /// Fuzzy score, 0 for an empty query
    pub score: u32,
}

/// Fuzzy filter plus relevance ordering for a quick-open picker.
///
/// Candidates that fuzzy-match the query are ordered by score; equal
/// scores fall back to [`Comparer::compare_anything`].
pub struct QuickOpenRanker {
    matcher: Matcher,
    comparer: Comparer,
}

impl QuickOpenRanker {
    pub fn new() -> Self {
        Self::with_comparer(Comparer::default())
    }

    pub fn with_comparer(comparer: Comparer) -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
            comparer,
        }
    }

    /// Rank `candidates` against `query`, best first, at most `limit`
    /// results. An empty query keeps everything in file name order.
    pub fn rank<S: AsRef<str>>(
        &mut self,
        query: &str,
        candidates: &[S],
        limit: usize,
    ) -> Vec<RankedItem> {
        let query = query.trim();
        let lowered = query.to_lowercase();

        let mut ranked: Vec<RankedItem> = if query.is_empty() {
            candidates
                .iter()
                .enumerate()
                .map(|(index, item)| RankedItem {
                    index,
                    item: item.as_ref().to_string(),
                    score: 0,
                })
                .collect()
        } else {
            let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
            let matcher = &mut self.matcher;
            candidates
                .iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    let item = item.as_ref();
                    let haystack = Utf32String::from(item);
                    let score = pattern.score(haystack.slice(..), matcher)?;
                    Some(RankedItem {
                        index,
                        item: item.to_string(),
                        score,
                    })
                })
                .collect()
        };

        let comparer = &self.comparer;
        if lowered.is_empty() {
            ranked.sort_by(|a, b| comparer.compare_file_names(&a.item, &b.item, false));
        } else {
            ranked.sort_by(|a, b| {
                b.score
                    .cmp(&a.score)
                    .then_with(|| comparer.compare_anything(&a.item, &b.item, &lowered))
            });
        }

        log::debug!(
            "Ranked {} of {} candidates for {query:?}, keeping {}",
            ranked.len(),
            candidates.len(),
            limit.min(ranked.len())
        );

        ranked.truncate(limit);
        ranked
    }
}

impl Default for QuickOpenRanker {
    fn default() -> Self {
        Self::new()
    }
}
