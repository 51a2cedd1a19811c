use crate::error::{ReconstructError, Result};
use crate::model::{match_id, HalfMatch, HalfMatchStatus};

/// Checks that `(a, sa)` and `(b, sb)` can form one match.
///
/// The halves are taken in canonical order (lower planning first) regardless of the order
/// they are passed in.
pub(crate) fn check_pair(
    (a, sa): (&HalfMatch, HalfMatchStatus),
    (b, sb): (&HalfMatch, HalfMatchStatus),
    matchnr: u32,
) -> Result<()> {
    for (half, status) in [(a, sa), (b, sb)] {
        if status.is_leaf() {
            return Err(ReconstructError::NotAMatchHalf { id: half.id });
        }
    }

    let (pm1, pm2) = if a.planning < b.planning { (a, b) } else { (b, a) };
    let match_id = match_id(pm1.draw.id, matchnr);

    if (pm1.van1, pm1.van2) != (pm2.van1, pm2.van2) {
        return Err(ReconstructError::InconsistentVanPointers {
            match_id,
            first: (pm1.van1, pm1.van2),
            second: (pm2.van1, pm2.van2),
        });
    }

    let nonzero = |v: Option<u32>| v.filter(|&v| v != 0);
    distinct(
        &match_id,
        "id",
        (pm1.id != 0).then_some(pm1.id),
        (pm2.id != 0).then_some(pm2.id),
    )?;
    distinct(
        &match_id,
        "entry",
        pm1.entry.as_ref().map(|e| e.id),
        pm2.entry.as_ref().map(|e| e.id),
    )?;
    distinct(&match_id, "wn", nonzero(pm1.wn), nonzero(pm2.wn))?;
    distinct(&match_id, "vn", nonzero(pm1.vn), nonzero(pm2.vn))?;

    agree(&match_id, "matchnr", &pm1.matchnr, &pm2.matchnr)?;
    agree(&match_id, "draw", &Some(pm1.draw.id), &Some(pm2.draw.id))?;
    agree(
        &match_id,
        "court",
        &pm1.court.as_ref().map(|c| c.id),
        &pm2.court.as_ref().map(|c| c.id),
    )?;
    agree(&match_id, "time", &pm1.time, &pm2.time)?;

    match (pm1.winner, pm2.winner) {
        (Some(w1), Some(w2)) if u16::from(w1) + u16::from(w2) != 3 => {
            return Err(ReconstructError::WinnerSumViolation {
                match_id,
                winners: (w1, w2),
            })
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(ReconstructError::WinnerInconsistency { match_id })
        }
        _ => {}
    }

    if let (Some(e1), Some(e2)) = (&pm1.entry, &pm2.entry) {
        if e1.event != e2.event {
            return Err(ReconstructError::CrossEventMatch {
                match_id,
                events: (e1.event, e2.event),
            });
        }
    }

    let absent = pm1.is_absent_by_status() || pm2.is_absent_by_status();
    if !absent && pm1.scores != pm2.mirrored_scores() {
        return Err(ReconstructError::ScoreMismatch { match_id });
    }

    Ok(())
}

/// Opposite sides never share a non-empty value.
fn distinct<T: PartialEq>(
    match_id: &str,
    field: &'static str,
    first: Option<T>,
    second: Option<T>,
) -> Result<()> {
    match (first, second) {
        (Some(first), Some(second)) if first == second => {
            Err(ReconstructError::SharedFieldViolation {
                match_id: match_id.to_string(),
                field,
            })
        }
        _ => Ok(()),
    }
}

/// Where both halves carry a value, it must be the same.
fn agree<T: PartialEq>(
    match_id: &str,
    field: &'static str,
    first: &Option<T>,
    second: &Option<T>,
) -> Result<()> {
    match (first, second) {
        (Some(first), Some(second)) if first != second => Err(ReconstructError::FieldMismatch {
            match_id: match_id.to_string(),
            field,
        }),
        _ => Ok(()),
    }
}
