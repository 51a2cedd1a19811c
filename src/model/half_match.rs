use chrono::NaiveDateTime;
use serde::Serialize;
use strum_macros::EnumString;

use crate::model::{CourtRef, Draw, EntryRef};

/// Points of a single game, `(own, other)` as seen from the record holding it.
pub type Score = (u8, u8);

/// How a result came about, as coded in the export's `scorestatus` column.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    EnumString,
    strum_macros::Display,
    strum_macros::FromRepr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum ScoreStatus {
    #[default]
    Normal = 0,
    Walkover = 1,
    Retired = 2,
    Disqualified = 3,
    NotPlayed = 4,
}

/// Status of a single half-match record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HalfMatchStatus {
    Bye,
    Player,
    Pending,
    Played,
    NotPlayed,
}

impl HalfMatchStatus {
    /// Leaf records seed the draw and never pair up into a match.
    #[inline]
    pub fn is_leaf(self) -> bool {
        matches!(self, Self::Bye | Self::Player)
    }
}

/// One row of the PlayerMatch export.
///
/// A record is either a leaf (a seeded entry or a bye, no `van` pointers) or one half of a
/// match. `van1`/`van2`/`wn`/`vn` keep the export's distinction between `0` and a missing
/// value; every other field has zero normalized to `None` at ingestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HalfMatch {
    pub id: i64,
    pub draw: Draw,
    pub matchnr: Option<u32>,
    pub entry: Option<EntryRef>,
    pub time: Option<NaiveDateTime>,
    pub court: Option<CourtRef>,
    /// `1` if this side won, `2` if the other side won.
    pub winner: Option<u8>,
    pub planning: u32,
    pub van1: Option<u32>,
    pub van2: Option<u32>,
    pub wn: Option<u32>,
    pub vn: Option<u32>,
    pub reversehomeaway: bool,
    pub scorestatus: ScoreStatus,
    pub scores: Vec<Score>,
}

impl HalfMatch {
    /// Records fabricated during reconstruction carry negated ids.
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.id < 0
    }

    /// The scores as seen from the opposite side.
    pub fn mirrored_scores(&self) -> Vec<Score> {
        self.scores.iter().map(|&(own, other)| (other, own)).collect()
    }

    /// Returns `true` if the winner or loser of this record's match continues at `planning`.
    pub fn forwards_to(&self, planning: u32) -> bool {
        planning != 0 && (self.wn == Some(planning) || self.vn == Some(planning))
    }

    /// A walkover-style absence: nobody on this side, a non-normal score status and no points.
    pub(crate) fn is_absent_by_status(&self) -> bool {
        self.entry.is_none()
            && self.scorestatus != ScoreStatus::Normal
            && self.scores.iter().all(|&score| score == (0, 0))
    }
}
