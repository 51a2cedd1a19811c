use tracing::trace;

use crate::error::{ReconstructError, Result};
use crate::model::{
    DrawKind, HalfMatch, HalfMatchStatus, MatchStatus, PairedMatch, ScoreStatus, Slot,
};

/// The verdict on a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Definite(HalfMatchStatus),
    /// A group-draw record without a result. It may be a bye or a match that simply has not
    /// been scheduled, and nothing in the record tells the two apart. The carried status is
    /// the best guess.
    Undecidable(HalfMatchStatus),
}

impl Classification {
    #[inline]
    pub fn status(self) -> HalfMatchStatus {
        match self {
            Self::Definite(status) | Self::Undecidable(status) => status,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    Leaf,
    Fed,
}

fn origin(hm: &HalfMatch) -> Result<Origin> {
    match (hm.van1, hm.van2) {
        (None, None) | (Some(0), Some(0)) => Ok(Origin::Leaf),
        (Some(van1), Some(van2)) if van1 != 0 && van2 != 0 => Ok(Origin::Fed),
        _ => Err(ReconstructError::InconsistentRecord {
            id: hm.id,
            reason: "van1 and van2 disagree on whether the record is a leaf",
        }),
    }
}

/// Classifies a record, keeping the group-draw ambiguity visible.
pub fn classify(hm: &HalfMatch) -> Result<Classification> {
    use Classification::{Definite, Undecidable};
    use HalfMatchStatus::*;

    let classification = match (origin(hm)?, hm.draw.kind()) {
        (Origin::Leaf, _) if hm.winner.is_some() => {
            return Err(ReconstructError::InconsistentRecord {
                id: hm.id,
                reason: "winner set on a leaf record",
            })
        }
        (Origin::Leaf, _) if hm.entry.is_none() => Definite(Bye),
        (Origin::Leaf, _) => Definite(Player),

        (Origin::Fed, DrawKind::Tree) => match (hm.winner, &hm.entry) {
            (None, _) => Definite(Pending),
            (Some(_), None) => Definite(NotPlayed),
            (Some(_), Some(_)) => Definite(Played),
        },

        (Origin::Fed, DrawKind::Group) => match (hm.scorestatus, hm.winner, hm.wn, hm.vn) {
            (ScoreStatus::Walkover, ..) => Definite(NotPlayed),
            (ScoreStatus::Retired | ScoreStatus::Disqualified, ..) => Definite(Played),
            (_, Some(_), ..) => Definite(Played),
            (_, None, Some(0), Some(0)) => Undecidable(NotPlayed),
            (_, None, ..) => Undecidable(Pending),
        },
    };

    trace!(id = hm.id, ?classification, "classified half-match");
    Ok(classification)
}

/// Status of a single record.
#[inline]
pub fn half_match_status(hm: &HalfMatch) -> Result<HalfMatchStatus> {
    classify(hm).map(Classification::status)
}

/// Combines the halves of `paired` and the resolved `slots` into the match status.
pub fn match_status(paired: &PairedMatch, slots: &[Slot; 2]) -> Result<MatchStatus> {
    let [s1, s2] = paired.statuses();
    let combined = match (s1, s2) {
        (HalfMatchStatus::Bye | HalfMatchStatus::Player, _) => {
            return Err(ReconstructError::NotAMatchHalf {
                id: paired.pm1().id,
            })
        }
        (_, HalfMatchStatus::Bye | HalfMatchStatus::Player) => {
            return Err(ReconstructError::NotAMatchHalf {
                id: paired.pm2().id,
            })
        }
        (HalfMatchStatus::Played, HalfMatchStatus::Played) => MatchStatus::Played,
        (HalfMatchStatus::NotPlayed, _) | (_, HalfMatchStatus::NotPlayed) => {
            MatchStatus::NotPlayed
        }
        _ => MatchStatus::Pending,
    };

    let is_ready = slots.iter().all(Slot::is_concrete);
    let is_group = paired.draw().kind() == DrawKind::Group || paired.is_home_away_reversed();

    Ok(match combined {
        MatchStatus::Pending if is_ready || is_group => MatchStatus::Ready,
        status => status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{entry, group_draw, half, leaf};

    #[test]
    fn test_leaf_status() {
        assert_eq!(
            half_match_status(&leaf(1, 1001, Some(1))).unwrap(),
            HalfMatchStatus::Player
        );
        assert_eq!(
            half_match_status(&leaf(2, 1002, None)).unwrap(),
            HalfMatchStatus::Bye
        );

        let zeroed = half(3, 0, 1003, Some((0, 0))).build();
        assert_eq!(half_match_status(&zeroed).unwrap(), HalfMatchStatus::Bye);
    }

    #[test]
    fn test_van_shape_mismatch() {
        let mut hm = leaf(1, 1001, Some(1));
        hm.van2 = Some(0);
        assert!(matches!(
            half_match_status(&hm),
            Err(ReconstructError::InconsistentRecord { id: 1, .. })
        ));

        let hm = half(2, 1, 2001, Some((0, 1002))).build();
        assert!(matches!(
            half_match_status(&hm),
            Err(ReconstructError::InconsistentRecord { id: 2, .. })
        ));
    }

    #[test]
    fn test_winner_on_leaf() {
        let mut hm = leaf(1, 1001, Some(1));
        hm.winner = Some(1);
        assert!(matches!(
            half_match_status(&hm),
            Err(ReconstructError::InconsistentRecord { id: 1, .. })
        ));
    }

    #[test]
    fn test_tree_status() {
        let pending = half(1, 1, 2001, Some((1001, 1002)))
            .entry(Some(entry(1)))
            .build();
        assert_eq!(
            half_match_status(&pending).unwrap(),
            HalfMatchStatus::Pending
        );

        let walkover = half(2, 1, 2002, Some((1001, 1002)))
            .winner(Some(2))
            .build();
        assert_eq!(
            half_match_status(&walkover).unwrap(),
            HalfMatchStatus::NotPlayed
        );

        let played = half(3, 1, 2003, Some((1001, 1002)))
            .entry(Some(entry(1)))
            .winner(Some(1))
            .build();
        assert_eq!(half_match_status(&played).unwrap(), HalfMatchStatus::Played);
    }

    #[test]
    fn test_group_status() {
        let played = half(1, 1, 1, Some((1000, 2000)))
            .draw(group_draw())
            .winner(Some(1))
            .build();
        assert_eq!(
            classify(&played).unwrap(),
            Classification::Definite(HalfMatchStatus::Played)
        );

        let unplayed = half(2, 1, 2, Some((1000, 2000)))
            .draw(group_draw())
            .wn(Some(0))
            .vn(Some(0))
            .build();
        assert_eq!(
            classify(&unplayed).unwrap(),
            Classification::Undecidable(HalfMatchStatus::NotPlayed)
        );

        let open = half(3, 1, 3, Some((1000, 2000)))
            .draw(group_draw())
            .build();
        assert_eq!(
            classify(&open).unwrap(),
            Classification::Undecidable(HalfMatchStatus::Pending)
        );
    }

    #[test]
    fn test_group_score_status_override() {
        let walkover = half(1, 1, 1, Some((1000, 2000)))
            .draw(group_draw())
            .winner(Some(1))
            .scorestatus(ScoreStatus::Walkover)
            .build();
        assert_eq!(
            half_match_status(&walkover).unwrap(),
            HalfMatchStatus::NotPlayed
        );

        let retired = half(2, 1, 2, Some((1000, 2000)))
            .draw(group_draw())
            .scorestatus(ScoreStatus::Retired)
            .build();
        assert_eq!(half_match_status(&retired).unwrap(), HalfMatchStatus::Played);
    }

    fn paired(a: HalfMatch, b: HalfMatch) -> PairedMatch {
        let sa = half_match_status(&a).unwrap();
        let sb = half_match_status(&b).unwrap();
        PairedMatch::new((a, sa), (b, sb), 1)
    }

    #[test]
    fn test_match_status_combination() {
        let played = paired(
            half(1, 1, 2001, Some((1001, 1002)))
                .entry(Some(entry(1)))
                .winner(Some(1))
                .build(),
            half(2, 1, 2002, Some((1001, 1002)))
                .entry(Some(entry(2)))
                .winner(Some(2))
                .build(),
        );
        let slots = played.default_slots();
        assert_eq!(match_status(&played, &slots).unwrap(), MatchStatus::Played);

        let walkover = paired(
            half(1, 1, 2001, Some((1001, 1002)))
                .entry(Some(entry(1)))
                .winner(Some(1))
                .build(),
            half(2, 1, 2002, Some((1001, 1002))).winner(Some(2)).build(),
        );
        let slots = walkover.default_slots();
        assert_eq!(
            match_status(&walkover, &slots).unwrap(),
            MatchStatus::NotPlayed
        );
    }

    #[test]
    fn test_match_status_ready_override() {
        let open = paired(
            half(1, 1, 2001, Some((1001, 1002))).build(),
            half(2, 1, 2002, Some((1001, 1002))).build(),
        );

        let unknown = open.default_slots();
        assert_eq!(match_status(&open, &unknown).unwrap(), MatchStatus::Pending);

        let placeholder = [
            Slot::Entry(entry(1)),
            Slot::Placeholder {
                matchnr: 2,
                is_winner: true,
            },
        ];
        assert_eq!(
            match_status(&open, &placeholder).unwrap(),
            MatchStatus::Pending
        );

        let known = [Slot::Entry(entry(1)), Slot::Bye];
        assert_eq!(match_status(&open, &known).unwrap(), MatchStatus::Ready);
    }

    #[test]
    fn test_match_status_group_override() {
        let open = paired(
            half(1, 1, 1, Some((1000, 2000))).draw(group_draw()).build(),
            half(2, 1, 2, Some((1000, 2000)))
                .draw(group_draw())
                .reversehomeaway(true)
                .build(),
        );
        let slots = open.default_slots();
        assert_eq!(match_status(&open, &slots).unwrap(), MatchStatus::Ready);
    }

    #[test]
    fn test_match_status_rejects_leaf() {
        let bogus = PairedMatch::new(
            (leaf(1, 1001, Some(1)), HalfMatchStatus::Player),
            (
                half(2, 1, 2002, Some((1001, 1002))).build(),
                HalfMatchStatus::Pending,
            ),
            1,
        );
        let slots = bogus.default_slots();
        assert_eq!(
            match_status(&bogus, &slots),
            Err(ReconstructError::NotAMatchHalf { id: 1 })
        );
    }
}
