use std::collections::BTreeMap;

use tracing::{info, instrument, warn};

use crate::engine::Reconstructor;
use crate::error::Result;
use crate::ingest::{self, Catalog};
use crate::model::{Bracket, DrawSummary, HalfMatch, Match, RawPlayerMatch};
use crate::options::ReconstructOptions;

/// The last successfully reconstructed state of a tournament.
///
/// Each reload rebuilds everything from a fresh snapshot. A failed reload leaves the
/// previous state in place, so consumers never see a half-built bracket. Callers must not
/// reload concurrently.
#[derive(Debug, Default)]
pub struct Tournament {
    options: ReconstructOptions,
    bracket: Bracket,
    summaries: BTreeMap<u32, DrawSummary>,
    generation: u64,
}

impl Tournament {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ReconstructOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    /// Replace the state with a reconstruction of `half_matches`.
    #[instrument(skip_all, fields(generation = self.generation))]
    pub fn reload<I>(&mut self, half_matches: I) -> Result<()>
    where
        I: IntoIterator<Item = HalfMatch>,
    {
        let result = Reconstructor::with_options(self.options.clone()).run(half_matches);
        self.commit(result)
    }

    /// Parse `rows` against `catalog`, then reload as [`Tournament::reload`].
    #[instrument(skip_all, fields(generation = self.generation))]
    pub fn reload_raw<I>(&mut self, rows: I, catalog: &Catalog) -> Result<()>
    where
        I: IntoIterator<Item = RawPlayerMatch>,
    {
        let result = ingest::parse_snapshot(rows, catalog).and_then(|records| {
            Reconstructor::with_options(self.options.clone()).run(records)
        });
        self.commit(result)
    }

    fn commit(&mut self, result: Result<Bracket>) -> Result<()> {
        match result {
            Ok(bracket) => {
                self.summaries = bracket.summaries();
                self.bracket = bracket;
                self.generation += 1;
                info!(
                    generation = self.generation,
                    matches = self.bracket.matches.len(),
                    draws = self.summaries.len(),
                    "reloaded tournament"
                );
                Ok(())
            }
            Err(e) => {
                warn!(
                    generation = self.generation,
                    error = %e,
                    "reload failed, keeping previous state"
                );
                Err(e)
            }
        }
    }

    /// Number of successful reloads so far.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn matches(&self) -> &[Match] {
        &self.bracket.matches
    }

    pub fn get_match(&self, id: &str) -> Option<&Match> {
        self.bracket.get_match(id)
    }

    /// The matches of draw `draw`, in match number order.
    pub fn draw_matches(&self, draw: u32) -> impl Iterator<Item = &Match> {
        self.bracket.matches.iter().filter(move |m| m.draw.id == draw)
    }

    pub fn draw_summary(&self, draw: u32) -> Option<&DrawSummary> {
        self.summaries.get(&draw)
    }

    pub fn bracket(&self) -> &Bracket {
        &self.bracket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReconstructError;
    use crate::model::MatchStatus;
    use crate::testutil::{entry, half, leaf};

    fn snapshot() -> Vec<HalfMatch> {
        vec![
            leaf(1, 1001, Some(1)),
            leaf(2, 1002, Some(2)),
            half(3, 1, 2001, Some((1001, 1002)))
                .entry(Some(entry(1)))
                .build(),
            half(4, 1, 2002, Some((1001, 1002)))
                .entry(Some(entry(2)))
                .build(),
        ]
    }

    #[test]
    fn test_reload_replaces_state() {
        let mut tournament = Tournament::new();
        tournament.reload(snapshot()).unwrap();

        assert_eq!(tournament.generation(), 1);
        assert_eq!(tournament.matches().len(), 1);
        assert_eq!(
            tournament.get_match("1-1").map(|m| m.status),
            Some(MatchStatus::Ready)
        );
        assert_eq!(tournament.draw_matches(1).count(), 1);

        let summary = tournament.draw_summary(1).unwrap();
        assert_eq!(summary.nmatches, 1);
        assert_eq!(summary.nentries, 2);
        assert_eq!(summary.by_status[&MatchStatus::Ready], 1);
        assert_eq!(summary.by_status[&MatchStatus::Played], 0);
    }

    #[test]
    fn test_failed_reload_keeps_previous_state() {
        let mut tournament = Tournament::new();
        tournament.reload(snapshot()).unwrap();

        let mut broken = snapshot();
        broken.push(leaf(1, 1001, Some(1)));
        assert!(matches!(
            tournament.reload(broken),
            Err(ReconstructError::DuplicateRegistration { id: 1, .. })
        ));

        assert_eq!(tournament.generation(), 1);
        assert_eq!(tournament.matches().len(), 1);
        assert!(tournament.draw_summary(1).is_some());
    }
}
