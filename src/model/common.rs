use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// A draw (bracket or pool) within an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Draw {
    pub id: u32,
    pub name: String,
    pub draw_type: DrawType,
}

impl Draw {
    pub fn new(id: u32, name: impl Into<String>, draw_type: DrawType) -> Self {
        Self {
            id,
            name: name.into(),
            draw_type,
        }
    }

    #[inline]
    pub fn kind(&self) -> DrawKind {
        self.draw_type.kind()
    }
}

/// The layout of a draw as stored in the export.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DrawType {
    Elimination,
    Group,
    Monrad,
    Compass,
}

impl DrawType {
    /// Collapses the draw type into the two families the status rules distinguish.
    pub fn kind(self) -> DrawKind {
        match self {
            DrawType::Elimination | DrawType::Monrad | DrawType::Compass => DrawKind::Tree,
            DrawType::Group => DrawKind::Group,
        }
    }
}

/// Tree draws link rounds through `wn`/`vn` pointers, group draws are round-robin pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DrawKind {
    Tree,
    Group,
}

/// A competitor (single player or pair) registered in an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntryRef {
    pub id: u32,
    pub event: u32,
    pub name: String,
}

impl EntryRef {
    pub fn new(id: u32, event: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            event,
            name: name.into(),
        }
    }
}

/// A court a match is scheduled on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CourtRef {
    pub id: u32,
    pub name: String,
}

impl CourtRef {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
