use serde::Deserialize;

/// A PlayerMatch row exactly as the export reader hands it over.
///
/// Columns are loosely typed on purpose; [`crate::ingest`] turns a row into a
/// [`crate::HalfMatch`] and rejects anything out of shape. Missing columns deserialize as
/// `None`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPlayerMatch {
    pub id: i64,
    pub draw: i64,
    pub matchnr: Option<i64>,
    pub entry: Option<i64>,
    pub time: Option<String>,
    pub court: Option<i64>,
    pub winner: Option<i64>,
    pub planning: i64,
    pub van1: Option<i64>,
    pub van2: Option<i64>,
    pub wn: Option<i64>,
    pub vn: Option<i64>,
    pub reversehomeaway: Option<bool>,
    pub scorestatus: Option<i64>,
    pub team1set1: Option<i64>,
    pub team2set1: Option<i64>,
    pub team1set2: Option<i64>,
    pub team2set2: Option<i64>,
    pub team1set3: Option<i64>,
    pub team2set3: Option<i64>,
    pub team1set4: Option<i64>,
    pub team2set4: Option<i64>,
    pub team1set5: Option<i64>,
    pub team2set5: Option<i64>,
}

impl RawPlayerMatch {
    /// The per-game columns in order, `team1` being the side of this row.
    pub fn set_columns(&self) -> [(Option<i64>, Option<i64>); 5] {
        [
            (self.team1set1, self.team2set1),
            (self.team1set2, self.team2set2),
            (self.team1set3, self.team2set3),
            (self.team1set4, self.team2set4),
            (self.team1set5, self.team2set5),
        ]
    }
}
