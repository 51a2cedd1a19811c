//! Record builders shared by the unit tests.

use crate::model::{Draw, DrawType, EntryRef, HalfMatch, Score, ScoreStatus};

pub(crate) fn elimination_draw() -> Draw {
    Draw::new(1, "MS", DrawType::Elimination)
}

pub(crate) fn group_draw() -> Draw {
    Draw::new(2, "MS Pool A", DrawType::Group)
}

pub(crate) fn entry(id: u32) -> EntryRef {
    EntryRef::new(id, 1, format!("Entry {id}"))
}

/// A leaf record in the elimination draw.
pub(crate) fn leaf(id: i64, planning: u32, entry_id: Option<u32>) -> HalfMatch {
    HalfMatch {
        id,
        draw: elimination_draw(),
        matchnr: None,
        entry: entry_id.map(entry),
        time: None,
        court: None,
        winner: None,
        planning,
        van1: None,
        van2: None,
        wn: None,
        vn: None,
        reversehomeaway: false,
        scorestatus: ScoreStatus::Normal,
        scores: Vec::new(),
    }
}

/// Starts a record in the elimination draw; `matchnr` zero means none.
pub(crate) fn half(id: i64, matchnr: u32, planning: u32, van: Option<(u32, u32)>) -> Builder {
    let mut hm = leaf(id, planning, None);
    hm.matchnr = (matchnr != 0).then_some(matchnr);
    hm.van1 = van.map(|(van1, _)| van1);
    hm.van2 = van.map(|(_, van2)| van2);
    Builder(hm)
}

pub(crate) struct Builder(HalfMatch);

impl Builder {
    pub(crate) fn draw(mut self, draw: Draw) -> Self {
        self.0.draw = draw;
        self
    }

    pub(crate) fn entry(mut self, entry: Option<EntryRef>) -> Self {
        self.0.entry = entry;
        self
    }

    pub(crate) fn winner(mut self, winner: Option<u8>) -> Self {
        self.0.winner = winner;
        self
    }

    pub(crate) fn wn(mut self, wn: Option<u32>) -> Self {
        self.0.wn = wn;
        self
    }

    pub(crate) fn vn(mut self, vn: Option<u32>) -> Self {
        self.0.vn = vn;
        self
    }

    pub(crate) fn reversehomeaway(mut self, reversed: bool) -> Self {
        self.0.reversehomeaway = reversed;
        self
    }

    pub(crate) fn scorestatus(mut self, scorestatus: ScoreStatus) -> Self {
        self.0.scorestatus = scorestatus;
        self
    }

    pub(crate) fn scores(mut self, scores: &[Score]) -> Self {
        self.0.scores = scores.to_vec();
        self
    }

    pub(crate) fn build(self) -> HalfMatch {
        self.0
    }
}
