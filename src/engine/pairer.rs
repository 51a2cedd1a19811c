use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use tracing::trace;

use crate::engine::{status, validate};
use crate::error::{ReconstructError, Result};
use crate::model::{match_id, HalfMatch, HalfMatchStatus, PairedMatch};

/// `(draw id, matchnr)`
pub(crate) type MatchKey = (u32, u32);
/// `(draw id, planning)`
pub(crate) type PlanningKey = (u32, u32);

/// Pairs half-match records sharing `(draw, matchnr)` and keeps leaf records aside.
#[derive(Debug, Default)]
pub struct Pairer {
    pub(crate) unmatched: HashMap<MatchKey, (HalfMatch, HalfMatchStatus)>,
    pub(crate) leaves: HashMap<PlanningKey, HalfMatch>,
    pub(crate) matches: HashMap<MatchKey, PairedMatch>,
    pub(crate) planning_index: HashMap<PlanningKey, MatchKey>,
    claimed: HashSet<PlanningKey>,
}

impl Pairer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a record. A match half either completes a waiting sibling or starts waiting
    /// for one.
    pub fn add(&mut self, hm: HalfMatch) -> Result<()> {
        let status = status::half_match_status(&hm)?;

        if status.is_leaf() {
            let key = (hm.draw.id, hm.planning);
            if self.leaves.get(&key) == Some(&hm) {
                return Err(duplicate(&hm));
            }
            self.claim(&hm)?;
            trace!(id = hm.id, planning = hm.planning, %status, "registered leaf");
            self.leaves.insert(key, hm);
            return Ok(());
        }

        let matchnr = hm.matchnr.ok_or(ReconstructError::InconsistentRecord {
            id: hm.id,
            reason: "match half without a match number",
        })?;
        let key = (hm.draw.id, matchnr);

        if let Some(paired) = self.matches.get(&key) {
            if paired.halves().contains(&&hm) {
                return Err(duplicate(&hm));
            }
            return Err(ReconstructError::SurplusHalfMatch {
                id: hm.id,
                match_id: paired.id(),
            });
        }

        match self.unmatched.remove(&key) {
            Some((sibling, sibling_status)) => {
                if sibling == hm {
                    return Err(duplicate(&hm));
                }
                self.claim(&hm)?;
                validate::check_pair((&sibling, sibling_status), (&hm, status), matchnr)?;

                let paired = PairedMatch::new((sibling, sibling_status), (hm, status), matchnr);
                for planning in paired.plannings() {
                    self.planning_index.insert((key.0, planning), key);
                }
                trace!(match_id = %paired.id(), "paired half-matches");
                self.matches.insert(key, paired);
            }
            None => {
                self.claim(&hm)?;
                self.unmatched.insert(key, (hm, status));
            }
        }

        Ok(())
    }

    /// Number of records still waiting for their sibling.
    #[inline]
    pub fn pending(&self) -> usize {
        self.unmatched.len()
    }

    /// Removes all waiting records, ordered by `(draw, planning)`, and releases their planning
    /// numbers so they can be registered again.
    pub(crate) fn take_unmatched(&mut self) -> Vec<HalfMatch> {
        let leftovers = self
            .unmatched
            .drain()
            .map(|(_, (hm, _))| hm)
            .sorted_by_key(|hm| (hm.draw.id, hm.planning))
            .collect_vec();
        for hm in &leftovers {
            self.claimed.remove(&(hm.draw.id, hm.planning));
        }
        leftovers
    }

    /// Match id of the first waiting record in `(draw, matchnr)` order.
    pub(crate) fn first_unmatched(&self) -> Option<String> {
        self.unmatched
            .keys()
            .min()
            .map(|&(draw, matchnr)| match_id(draw, matchnr))
    }

    fn claim(&mut self, hm: &HalfMatch) -> Result<()> {
        if !self.claimed.insert((hm.draw.id, hm.planning)) {
            return Err(ReconstructError::DuplicatePlanning {
                id: hm.id,
                draw: hm.draw.id,
                planning: hm.planning,
            });
        }
        Ok(())
    }
}

fn duplicate(hm: &HalfMatch) -> ReconstructError {
    ReconstructError::DuplicateRegistration {
        id: hm.id,
        draw: hm.draw.id,
        planning: hm.planning,
    }
}
