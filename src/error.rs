/// All errors that can occur while ingesting an export or reconstructing its matches.
///
/// None of them are recoverable within a run: the same snapshot fails the same way again.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ReconstructError {
    /// A single record contradicts itself.
    #[error("inconsistent record {id}: {reason}")]
    InconsistentRecord { id: i64, reason: &'static str },

    /// The same physical record was registered twice.
    #[error("record {id} registered twice (draw {draw}, planning {planning})")]
    DuplicateRegistration { id: i64, draw: u32, planning: u32 },

    /// Two different records claim the same planning number.
    #[error("planning {planning} in draw {draw} is claimed by record {id} and another record")]
    DuplicatePlanning { id: i64, draw: u32, planning: u32 },

    /// A third record for a match that already has both halves.
    #[error("record {id} is a surplus half for match {match_id}")]
    SurplusHalfMatch { id: i64, match_id: String },

    /// An unpaired record whose missing sibling cannot be explained by the draw structure.
    #[error("cannot resolve unpaired record {id} of match {match_id} (van1 {van}): {reason}")]
    UnresolvableMatch {
        id: i64,
        match_id: String,
        van: u32,
        reason: &'static str,
    },

    /// Entries were resolved while records were still waiting for their sibling.
    #[error("entry resolution started with {remaining} unpaired record(s), first in match {match_id}")]
    PrematureResolution { remaining: usize, match_id: String },

    /// A `van` pointer leads nowhere, or to a match that does not forward to this one.
    #[error("match {match_id}: van pointer {van} does not derive from any known record")]
    BrokenDerivation { match_id: String, van: u32 },

    /// A leaf record (entry or bye) was treated as a match half.
    #[error("record {id} is not a match half")]
    NotAMatchHalf { id: i64 },

    #[error("match {match_id}: van pointers disagree ({first:?} vs {second:?})")]
    InconsistentVanPointers {
        match_id: String,
        first: (Option<u32>, Option<u32>),
        second: (Option<u32>, Option<u32>),
    },

    /// Both halves carry the same non-empty value for a field that must differ between sides.
    #[error("match {match_id}: both halves share {field}")]
    SharedFieldViolation {
        match_id: String,
        field: &'static str,
    },

    /// The halves disagree on a field that describes the match as a whole.
    #[error("match {match_id}: halves disagree on {field}")]
    FieldMismatch {
        match_id: String,
        field: &'static str,
    },

    #[error("match {match_id}: winner codes {winners:?} do not sum to 3")]
    WinnerSumViolation { match_id: String, winners: (u8, u8) },

    #[error("match {match_id}: only one half has a winner")]
    WinnerInconsistency { match_id: String },

    #[error("match {match_id}: entries belong to events {events:?}")]
    CrossEventMatch { match_id: String, events: (u32, u32) },

    /// The halves' scores are not mirror images of each other.
    #[error("match {match_id}: scores of both halves do not mirror each other")]
    ScoreMismatch { match_id: String },

    /// A record refers to a draw, entry or court missing from the catalog.
    #[error("record {id} refers to unknown {kind} {reference}")]
    UnknownReference {
        id: i64,
        kind: &'static str,
        reference: i64,
    },

    /// A column holds a value outside its domain.
    #[error("record {id}: invalid value {value} for {field}")]
    InvalidField {
        id: i64,
        field: &'static str,
        value: i64,
    },

    /// Failed to parse the scheduled time of a record.
    #[error("record {id}: failed to parse time {value:?}: {source}")]
    DateParse {
        id: i64,
        value: String,
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, ReconstructError>;
