//! Plan actions - requests from the host to change the plan
//!
//! Wire form is an internally tagged object, e.g.
//! `{"type": "SEAT_GUEST", "tableId": "t1", "seatIndex": 2, "guestId": "g7"}`.
//! An unrecognised `type` deserializes to [`PlanAction::Unknown`], which the
//! reducer ignores.

use crate::models::{GuestImport, SpecialAreaType, TableShape};
use serde::{Deserialize, Serialize};

/// Kind of canvas item a move targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Table,
    Area,
}

/// Parameters for a new table; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableDraft {
    /// Non-positive or missing counts fall back to `DEFAULT_SEATS`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<TableShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl TableDraft {
    pub fn new(seats: i64, shape: TableShape) -> Self {
        Self {
            seats: Some(seats),
            shape: Some(shape),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn sized(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Parameters for a new special area
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AreaDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_type: Option<SpecialAreaType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl AreaDraft {
    pub fn new(area_type: SpecialAreaType) -> Self {
        Self {
            area_type: Some(area_type),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Partial table update; only the fields present are merged
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<TableShape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<i64>,
    /// Resizes the seat array; occupants beyond the new count are unseated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<u32>,
}

impl TableUpdate {
    pub fn seats(seats: u32) -> Self {
        Self {
            seats: Some(seats),
            ..Default::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Default::default()
        }
    }

    pub fn radius(radius: f64) -> Self {
        Self {
            radius: Some(radius),
            ..Default::default()
        }
    }
}

/// Plan action payload variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum PlanAction {
    /// Replace the guest list and empty every seat and lock
    ImportGuests { guests: Vec<GuestImport> },
    AddTable(TableDraft),
    AddSpecialArea(AreaDraft),
    MoveItem {
        id: String,
        x: f64,
        y: f64,
        item_type: ItemKind,
    },
    /// `guest_id: None` clears the seat
    SeatGuest {
        table_id: String,
        seat_index: u32,
        #[serde(default)]
        guest_id: Option<String>,
    },
    ToggleLockChair { table_id: String, seat_index: u32 },
    DeleteTable { table_id: String },
    DeleteArea { area_id: String },
    ResizeTable {
        table_id: String,
        #[serde(default)]
        updates: TableUpdate,
    },
    RotateTable { table_id: String, rotation: i64 },
    ResizeArea {
        area_id: String,
        width: f64,
        height: f64,
    },
    #[serde(other)]
    Unknown,
}

impl PlanAction {
    /// Wire name of the action
    pub fn kind(&self) -> &'static str {
        match self {
            PlanAction::ImportGuests { .. } => "IMPORT_GUESTS",
            PlanAction::AddTable(_) => "ADD_TABLE",
            PlanAction::AddSpecialArea(_) => "ADD_SPECIAL_AREA",
            PlanAction::MoveItem { .. } => "MOVE_ITEM",
            PlanAction::SeatGuest { .. } => "SEAT_GUEST",
            PlanAction::ToggleLockChair { .. } => "TOGGLE_LOCK_CHAIR",
            PlanAction::DeleteTable { .. } => "DELETE_TABLE",
            PlanAction::DeleteArea { .. } => "DELETE_AREA",
            PlanAction::ResizeTable { .. } => "RESIZE_TABLE",
            PlanAction::RotateTable { .. } => "ROTATE_TABLE",
            PlanAction::ResizeArea { .. } => "RESIZE_AREA",
            PlanAction::Unknown => "UNKNOWN",
        }
    }

    pub fn seat_guest(table_id: impl Into<String>, seat_index: u32, guest_id: &str) -> Self {
        PlanAction::SeatGuest {
            table_id: table_id.into(),
            seat_index,
            guest_id: Some(guest_id.to_string()),
        }
    }

    pub fn clear_seat(table_id: impl Into<String>, seat_index: u32) -> Self {
        PlanAction::SeatGuest {
            table_id: table_id.into(),
            seat_index,
            guest_id: None,
        }
    }

    pub fn toggle_lock(table_id: impl Into<String>, seat_index: u32) -> Self {
        PlanAction::ToggleLockChair {
            table_id: table_id.into(),
            seat_index,
        }
    }
}

impl std::fmt::Display for PlanAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.kind())
    }
}
