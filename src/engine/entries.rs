use itertools::Itertools;
use tracing::debug;

use crate::engine::pairer::Pairer;
use crate::engine::status;
use crate::error::{ReconstructError, Result};
use crate::model::{Bracket, DrawKind, PairedMatch, Slot};

/// Second pass: attaches both slots to every paired match and computes its status.
///
/// All matches and leaves are indexed before this runs, so the outcome does not depend on
/// the order records arrived in.
pub(crate) fn resolve_entries(mut pairer: Pairer) -> Result<Bracket> {
    if let Some(match_id) = pairer.first_unmatched() {
        return Err(ReconstructError::PrematureResolution {
            remaining: pairer.pending(),
            match_id,
        });
    }

    let resolved = pairer
        .matches
        .iter()
        .sorted_by_key(|(key, _)| **key)
        .map(|(&key, paired)| {
            let slots = resolve_slots(&pairer, paired)?;
            let status = status::match_status(paired, &slots)?;
            Ok((key, slots, status))
        })
        .collect::<Result<Vec<_>>>()?;

    let matches = resolved
        .into_iter()
        .filter_map(|(key, slots, status)| {
            pairer
                .matches
                .remove(&key)
                .map(|paired| paired.resolve(slots, status))
        })
        .collect_vec();

    let leaves = pairer
        .leaves
        .into_values()
        .sorted_by_key(|leaf| (leaf.draw.id, leaf.planning))
        .collect_vec();

    debug!(
        matches = matches.len(),
        leaves = leaves.len(),
        "resolved match entries"
    );
    Ok(Bracket { matches, leaves })
}

fn resolve_slots(pairer: &Pairer, paired: &PairedMatch) -> Result<[Slot; 2]> {
    let [van1, van2] = paired.vans();
    let slots = [
        resolve_slot(pairer, paired, van1)?,
        resolve_slot(pairer, paired, van2)?,
    ];

    Ok(
        if paired.draw().kind() == DrawKind::Group && paired.is_home_away_reversed() {
            let [home, away] = slots;
            [away, home]
        } else {
            slots
        },
    )
}

fn resolve_slot(pairer: &Pairer, paired: &PairedMatch, van: u32) -> Result<Slot> {
    let broken = || ReconstructError::BrokenDerivation {
        match_id: paired.id(),
        van,
    };
    let key = (paired.draw().id, van);

    let Some(src_key) = pairer.planning_index.get(&key) else {
        let leaf = pairer.leaves.get(&key).ok_or_else(broken)?;
        return Ok(leaf.entry.clone().map_or(Slot::Bye, Slot::Entry));
    };

    let src = pairer.matches.get(src_key).ok_or_else(broken)?;
    let is_winner = src.path_to(paired).ok_or_else(broken)?;

    Ok(match src.advancing_entry(is_winner) {
        Some(entry) => Slot::Entry(entry.clone()),
        None => Slot::Placeholder {
            matchnr: src.matchnr(),
            is_winner,
        },
    })
}
