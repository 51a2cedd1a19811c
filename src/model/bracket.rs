use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::model::{HalfMatch, Match, MatchStatus};

/// The outcome of one reconstruction run.
///
/// `matches` are sorted by `(draw, matchnr)`, `leaves` by `(draw, planning)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bracket {
    pub matches: Vec<Match>,
    pub leaves: Vec<HalfMatch>,
}

/// Counts for a single draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DrawSummary {
    pub nmatches: usize,
    pub nentries: usize,
    pub nbyes: usize,
    pub by_status: BTreeMap<MatchStatus, usize>,
}

impl Bracket {
    /// Returns the match with the public id `id`, e.g. `"4-12"`.
    pub fn get_match(&self, id: &str) -> Option<&Match> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// Builds a [`DrawSummary`] for every draw seen in this bracket, keyed by draw id.
    pub fn summaries(&self) -> BTreeMap<u32, DrawSummary> {
        let mut summaries: BTreeMap<u32, DrawSummary> = BTreeMap::new();

        for (draw, matches) in &self.matches.iter().chunk_by(|m| m.draw.id) {
            let counts = matches.map(|m| m.status).counts();
            let summary = summaries.entry(draw).or_default();
            summary.by_status = MatchStatus::iter()
                .map(|status| (status, counts.get(&status).copied().unwrap_or_default()))
                .collect();
            summary.nmatches = counts.values().sum();
        }

        for leaf in &self.leaves {
            let summary = summaries.entry(leaf.draw.id).or_default();
            if leaf.entry.is_some() {
                summary.nentries += 1;
            } else {
                summary.nbyes += 1;
            }
        }

        summaries
    }
}
