use chrono::NaiveDateTime;
use serde::Serialize;

use crate::model::{CourtRef, Draw, EntryRef, HalfMatch, HalfMatchStatus, Score};

/// The occupant of one side of a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Slot {
    Entry(EntryRef),
    Bye,
    Unknown,
    /// Winner or loser of the match with the given number, not yet decided.
    Placeholder { matchnr: u32, is_winner: bool },
}

impl Slot {
    /// Returns `true` if the occupant is known for good, either an entry or a bye.
    #[inline]
    pub fn is_concrete(&self) -> bool {
        matches!(self, Self::Entry(_) | Self::Bye)
    }

    pub fn entry(&self) -> Option<&EntryRef> {
        match self {
            Self::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

impl From<Option<EntryRef>> for Slot {
    fn from(entry: Option<EntryRef>) -> Self {
        entry.map_or(Self::Unknown, Self::Entry)
    }
}

/// Externally visible status of a match.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Ready,
    Pending,
    Played,
    NotPlayed,
}

/// Formats the public identifier of match `matchnr` in draw `draw`.
pub fn match_id(draw: u32, matchnr: u32) -> String {
    format!("{draw}-{matchnr}")
}

/// Two half-match records that passed validation, before entry resolution.
///
/// The halves are ordered so that `pm1.planning < pm2.planning`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedMatch {
    pm1: HalfMatch,
    pm2: HalfMatch,
    statuses: [HalfMatchStatus; 2],
    matchnr: u32,
}

impl PairedMatch {
    pub(crate) fn new(
        (a, sa): (HalfMatch, HalfMatchStatus),
        (b, sb): (HalfMatch, HalfMatchStatus),
        matchnr: u32,
    ) -> Self {
        let ((pm1, s1), (pm2, s2)) = if a.planning < b.planning {
            ((a, sa), (b, sb))
        } else {
            ((b, sb), (a, sa))
        };

        Self {
            pm1,
            pm2,
            statuses: [s1, s2],
            matchnr,
        }
    }

    #[inline]
    pub fn pm1(&self) -> &HalfMatch {
        &self.pm1
    }

    #[inline]
    pub fn pm2(&self) -> &HalfMatch {
        &self.pm2
    }

    #[inline]
    pub fn halves(&self) -> [&HalfMatch; 2] {
        [&self.pm1, &self.pm2]
    }

    #[inline]
    pub fn statuses(&self) -> [HalfMatchStatus; 2] {
        self.statuses
    }

    #[inline]
    pub fn draw(&self) -> &Draw {
        &self.pm1.draw
    }

    #[inline]
    pub fn matchnr(&self) -> u32 {
        self.matchnr
    }

    pub fn id(&self) -> String {
        match_id(self.pm1.draw.id, self.matchnr)
    }

    /// The planning numbers of both halves.
    #[inline]
    pub fn plannings(&self) -> [u32; 2] {
        [self.pm1.planning, self.pm2.planning]
    }

    /// The came-from pointers, identical on both halves.
    pub fn vans(&self) -> [u32; 2] {
        [
            self.pm1.van1.unwrap_or_default(),
            self.pm1.van2.unwrap_or_default(),
        ]
    }

    /// Slots derived from the halves alone: the record's own entry, else unknown.
    pub fn default_slots(&self) -> [Slot; 2] {
        [self.pm1.entry.clone().into(), self.pm2.entry.clone().into()]
    }

    /// Returns `true` if either half asks for home and away to be swapped.
    pub fn is_home_away_reversed(&self) -> bool {
        self.pm1.reversehomeaway || self.pm2.reversehomeaway
    }

    /// Returns `true` if the match forwards its winner somewhere but never its loser.
    ///
    /// This is how a draw without a playoff for third place looks in the export.
    pub fn forwards_winner_only(&self) -> bool {
        let forwards_winner = self
            .halves()
            .iter()
            .any(|half| half.wn.is_some_and(|wn| wn != 0));
        let forwards_loser = self.halves().iter().any(|half| half.vn.is_some());
        forwards_winner && !forwards_loser
    }

    /// Determines whether `target` is fed by the winner (`Some(true)`) or the loser
    /// (`Some(false)`) of this match.
    ///
    /// The lower-planning half carries the pointers along the winner's path, the other half
    /// those along the loser's.
    pub fn path_to(&self, target: &PairedMatch) -> Option<bool> {
        let reaches = |half: &HalfMatch| {
            target
                .plannings()
                .iter()
                .any(|&planning| half.forwards_to(planning))
        };

        if reaches(&self.pm1) {
            Some(true)
        } else if reaches(&self.pm2) {
            Some(false)
        } else {
            None
        }
    }

    /// The entry that left this match as its winner (or loser), if already decided.
    pub fn advancing_entry(&self, is_winner: bool) -> Option<&EntryRef> {
        let code = if is_winner { 1 } else { 2 };
        self.halves()
            .into_iter()
            .find(|half| half.winner == Some(code))
            .and_then(|half| half.entry.as_ref())
    }

    /// Attaches the resolved slots and status, yielding the final [`Match`].
    pub(crate) fn resolve(self, slots: [Slot; 2], status: MatchStatus) -> Match {
        let id = self.id();
        let winner = self.advancing_entry(true).cloned();
        let [slot1, slot2] = slots;
        let court = self.pm1.court.clone().or_else(|| self.pm2.court.clone());
        let time = self.pm1.time.or(self.pm2.time);

        Match {
            id,
            draw: self.pm1.draw.clone(),
            matchnr: self.matchnr,
            court,
            time,
            slot1,
            slot2,
            status,
            scores: self.pm1.scores.clone(),
            winner,
            pm1: self.pm1,
            pm2: self.pm2,
        }
    }
}

/// A reconstructed match with both sides resolved.
///
/// `scores` are given from the side of `pm1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match {
    pub id: String,
    pub draw: Draw,
    pub matchnr: u32,
    pub court: Option<CourtRef>,
    pub time: Option<NaiveDateTime>,
    pub slot1: Slot,
    pub slot2: Slot,
    pub status: MatchStatus,
    pub scores: Vec<Score>,
    pub winner: Option<EntryRef>,
    #[serde(skip)]
    pub pm1: HalfMatch,
    #[serde(skip)]
    pub pm2: HalfMatch,
}

impl Match {
    /// Returns `true` if both sides are known for good.
    pub fn is_ready(&self) -> bool {
        self.slot1.is_concrete() && self.slot2.is_concrete()
    }
}
