#![allow(dead_code)]

use tpbracket::{Draw, DrawType, EntryRef, HalfMatch, ScoreStatus};

pub fn elimination() -> Draw {
    Draw::new(1, "Men's Singles", DrawType::Elimination)
}

pub fn entry(id: u32) -> EntryRef {
    EntryRef::new(id, 1, format!("Player {id}"))
}

pub fn leaf(id: i64, planning: u32, entry_id: Option<u32>) -> HalfMatch {
    HalfMatch {
        id,
        draw: elimination(),
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

pub fn half(id: i64, matchnr: u32, planning: u32, van1: u32, van2: u32) -> HalfMatch {
    HalfMatch {
        matchnr: Some(matchnr),
        van1: Some(van1),
        van2: Some(van2),
        ..leaf(id, planning, None)
    }
}

pub fn mirror(scores: &[(u8, u8)]) -> Vec<(u8, u8)> {
    scores.iter().map(|&(a, b)| (b, a)).collect()
}

/// A four-player single elimination without a playoff for third place.
///
/// Both semifinals are decided (1 beats 2, 4 beats 3), the final is open.
pub fn four_player_elimination() -> Vec<HalfMatch> {
    let semi1 = [(21, 10), (21, 12)];
    let semi2 = [(21, 19), (15, 21), (13, 21)];

    vec![
        leaf(1, 1001, Some(1)),
        leaf(2, 1002, Some(2)),
        leaf(3, 1003, Some(3)),
        leaf(4, 1004, Some(4)),
        HalfMatch {
            entry: Some(entry(1)),
            winner: Some(1),
            wn: Some(3001),
            scores: semi1.to_vec(),
            ..half(11, 1, 2001, 1001, 1002)
        },
        HalfMatch {
            entry: Some(entry(2)),
            winner: Some(2),
            scores: mirror(&semi1),
            ..half(12, 1, 2002, 1001, 1002)
        },
        HalfMatch {
            entry: Some(entry(3)),
            winner: Some(2),
            wn: Some(3002),
            scores: semi2.to_vec(),
            ..half(13, 2, 2003, 1003, 1004)
        },
        HalfMatch {
            entry: Some(entry(4)),
            winner: Some(1),
            scores: mirror(&semi2),
            ..half(14, 2, 2004, 1003, 1004)
        },
        HalfMatch {
            entry: Some(entry(1)),
            ..half(21, 3, 3001, 2001, 2003)
        },
        HalfMatch {
            entry: Some(entry(4)),
            ..half(22, 3, 3002, 2001, 2003)
        },
    ]
}
