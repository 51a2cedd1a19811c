//! Turns raw export rows into typed [`HalfMatch`] records.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use tracing::{debug, instrument};

use crate::error::{ReconstructError, Result};
use crate::model::{CourtRef, Draw, EntryRef, HalfMatch, RawPlayerMatch, Score, ScoreStatus};

const TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// The draws, entries and courts that PlayerMatch rows refer to by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    draws: HashMap<u32, Draw>,
    entries: HashMap<u32, EntryRef>,
    courts: HashMap<u32, CourtRef>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_draw(mut self, draw: Draw) -> Self {
        self.draws.insert(draw.id, draw);
        self
    }

    pub fn with_entry(mut self, entry: EntryRef) -> Self {
        self.entries.insert(entry.id, entry);
        self
    }

    pub fn with_court(mut self, court: CourtRef) -> Self {
        self.courts.insert(court.id, court);
        self
    }

    pub fn draw(&self, id: u32) -> Option<&Draw> {
        self.draws.get(&id)
    }

    pub fn entry(&self, id: u32) -> Option<&EntryRef> {
        self.entries.get(&id)
    }

    pub fn court(&self, id: u32) -> Option<&CourtRef> {
        self.courts.get(&id)
    }
}

/// Parses every row of a snapshot, stopping at the first malformed one.
#[instrument(skip_all)]
pub fn parse_snapshot<I>(rows: I, catalog: &Catalog) -> Result<Vec<HalfMatch>>
where
    I: IntoIterator<Item = RawPlayerMatch>,
{
    let records = rows
        .into_iter()
        .map(|row| parse_player_match(&row, catalog))
        .collect::<Result<Vec<_>>>()?;
    debug!(count = records.len(), "parsed player matches");
    Ok(records)
}

/// Parses a single row, resolving its references against `catalog`.
pub fn parse_player_match(row: &RawPlayerMatch, catalog: &Catalog) -> Result<HalfMatch> {
    let id = row.id;
    if id < 0 {
        // Negative ids mark fabricated records.
        return Err(ReconstructError::InvalidField {
            id,
            field: "id",
            value: id,
        });
    }

    let draw_id = unsigned(id, "draw", row.draw)?;
    let draw = catalog
        .draw(draw_id)
        .cloned()
        .ok_or(ReconstructError::UnknownReference {
            id,
            kind: "draw",
            reference: row.draw,
        })?;

    let entry = match nonzero(id, "entry", row.entry)? {
        Some(entry_id) => Some(catalog.entry(entry_id).cloned().ok_or(
            ReconstructError::UnknownReference {
                id,
                kind: "entry",
                reference: i64::from(entry_id),
            },
        )?),
        None => None,
    };

    let court = match nonzero(id, "court", row.court)? {
        Some(court_id) => Some(catalog.court(court_id).cloned().ok_or(
            ReconstructError::UnknownReference {
                id,
                kind: "court",
                reference: i64::from(court_id),
            },
        )?),
        None => None,
    };

    let winner = match row.winner {
        None | Some(0) => None,
        Some(code @ (1 | 2)) => Some(code as u8),
        Some(value) => {
            return Err(ReconstructError::InvalidField {
                id,
                field: "winner",
                value,
            })
        }
    };

    let scorestatus = match row.scorestatus {
        None => ScoreStatus::Normal,
        Some(code) => u8::try_from(code)
            .ok()
            .and_then(ScoreStatus::from_repr)
            .ok_or(ReconstructError::InvalidField {
                id,
                field: "scorestatus",
                value: code,
            })?,
    };

    Ok(HalfMatch {
        id,
        draw,
        matchnr: nonzero(id, "matchnr", row.matchnr)?,
        entry,
        time: parse_time(id, row.time.as_deref())?,
        court,
        winner,
        planning: unsigned(id, "planning", row.planning)?,
        van1: raw(id, "van1", row.van1)?,
        van2: raw(id, "van2", row.van2)?,
        wn: raw(id, "wn", row.wn)?,
        vn: raw(id, "vn", row.vn)?,
        reversehomeaway: row.reversehomeaway.unwrap_or_default(),
        scorestatus,
        scores: parse_scores(row)?,
    })
}

fn unsigned(id: i64, field: &'static str, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ReconstructError::InvalidField { id, field, value })
}

/// Keeps the distinction between `0` and a missing value.
fn raw(id: i64, field: &'static str, value: Option<i64>) -> Result<Option<u32>> {
    value.map(|value| unsigned(id, field, value)).transpose()
}

/// Normalizes `0` to `None`.
fn nonzero(id: i64, field: &'static str, value: Option<i64>) -> Result<Option<u32>> {
    Ok(raw(id, field, value)?.filter(|&value| value != 0))
}

fn parse_time(id: i64, value: Option<&str>) -> Result<Option<NaiveDateTime>> {
    let Some(value) = value.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    let mut last_err = None;
    for format in TIME_FORMATS {
        match NaiveDateTime::parse_from_str(value, format) {
            Ok(time) => return Ok(Some(time)),
            Err(err) => last_err = Some(err),
        }
    }

    match last_err {
        Some(source) => Err(ReconstructError::DateParse {
            id,
            value: value.to_string(),
            source,
        }),
        None => Ok(None),
    }
}

/// Reads the per-game columns, dropping trailing games without points.
fn parse_scores(row: &RawPlayerMatch) -> Result<Vec<Score>> {
    let point = |field: &'static str, value: Option<i64>| -> Result<u8> {
        let value = value.unwrap_or_default();
        u8::try_from(value).map_err(|_| ReconstructError::InvalidField {
            id: row.id,
            field,
            value,
        })
    };

    let mut scores = row
        .set_columns()
        .into_iter()
        .map(|(own, other)| Ok((point("team1set", own)?, point("team2set", other)?)))
        .collect::<Result<Vec<_>>>()?;

    while scores.last() == Some(&(0, 0)) {
        scores.pop();
    }
    Ok(scores)
}
