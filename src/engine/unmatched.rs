use tracing::{debug, warn};

use crate::engine::pairer::Pairer;
use crate::error::{ReconstructError, Result};
use crate::model::{match_id, HalfMatch};
use crate::options::ReconstructOptions;

/// Gives every record left without a sibling a fabricated one.
///
/// The export omits the second half of a match only when the match's predecessor never
/// forwards a loser, which is how a draw without a playoff for third place is stored.
/// Fabrication is limited to exactly that signature; anything else is reported as
/// `UnresolvableMatch`. Returns the number of fabricated records.
pub(crate) fn resolve_unmatched(pairer: &mut Pairer, options: &ReconstructOptions) -> Result<usize> {
    let leftovers = pairer.take_unmatched();
    let mut fabricated = 0;

    for pm in leftovers {
        let matchnr = pm.matchnr.unwrap_or_default();
        let unresolvable = |reason| ReconstructError::UnresolvableMatch {
            id: pm.id,
            match_id: match_id(pm.draw.id, matchnr),
            van: pm.van1.unwrap_or_default(),
            reason,
        };

        if !options.fabricate_siblings {
            return Err(unresolvable("fabrication of missing siblings is disabled"));
        }

        let key = (pm.draw.id, pm.van1.unwrap_or_default());
        let predecessor = match pairer.planning_index.get(&key) {
            Some(src) => pairer.matches.get(src),
            None if pairer.leaves.contains_key(&key) => {
                return Err(unresolvable("predecessor is a leaf record"))
            }
            None => return Err(unresolvable("no predecessor with this planning number")),
        };

        match predecessor {
            Some(src) if src.forwards_winner_only() => {
                let sibling = fabricate_sibling(&pm, options.synthetic_planning_offset);
                warn!(
                    id = pm.id,
                    sibling = sibling.id,
                    match_id = %match_id(pm.draw.id, matchnr),
                    predecessor = %src.id(),
                    "fabricating missing half-match"
                );
                pairer.add(pm)?;
                pairer.add(sibling)?;
                fabricated += 1;
            }
            Some(_) => return Err(unresolvable("predecessor also forwards its loser")),
            None => return Err(unresolvable("planning index points at a missing match")),
        }
    }

    debug!(fabricated, "resolved unmatched half-matches");
    Ok(fabricated)
}

/// The complement of a winner code: `1` and `2` swap.
#[inline]
fn complement(winner: u8) -> u8 {
    (3 - winner % 3) % 3
}

/// Builds the opposite half of `pm`: negated id, planning, `wn` and `vn` moved out of the
/// export's number range, winner complemented, no entry and mirrored scores.
pub(crate) fn fabricate_sibling(pm: &HalfMatch, offset: u32) -> HalfMatch {
    let shift = |planning: u32| {
        if planning == 0 {
            0
        } else {
            planning.saturating_add(offset)
        }
    };

    HalfMatch {
        id: pm.id.saturating_neg(),
        planning: shift(pm.planning),
        wn: pm.wn.map(shift),
        vn: pm.vn.map(shift),
        winner: pm.winner.map(complement).filter(|&winner| winner != 0),
        entry: None,
        scores: pm.mirrored_scores(),
        ..pm.clone()
    }
}
