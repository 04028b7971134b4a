//! Special Area Model
//!
//! Dance floors, bars and similar zones. Purely spatial, nobody sits there.

use serde::{Deserialize, Serialize};

pub const DEFAULT_AREA_X: f64 = 200.0;
pub const DEFAULT_AREA_Y: f64 = 200.0;
pub const DEFAULT_AREA_WIDTH: f64 = 150.0;
pub const DEFAULT_AREA_HEIGHT: f64 = 100.0;

/// Special area kind (unknown names deserialize as `Custom`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum SpecialAreaType {
    DanceFloor,
    Bar,
    Lounge,
    Dj,
    #[default]
    Custom,
}

impl SpecialAreaType {
    pub fn label(&self) -> &'static str {
        match self {
            SpecialAreaType::DanceFloor => "Dance Floor",
            SpecialAreaType::Bar => "Bar",
            SpecialAreaType::Lounge => "Lounge",
            SpecialAreaType::Dj => "DJ Booth",
            SpecialAreaType::Custom => "Area",
        }
    }
}

impl From<&str> for SpecialAreaType {
    fn from(name: &str) -> Self {
        match name {
            "danceFloor" => SpecialAreaType::DanceFloor,
            "bar" => SpecialAreaType::Bar,
            "lounge" => SpecialAreaType::Lounge,
            "dj" => SpecialAreaType::Dj,
            _ => SpecialAreaType::Custom,
        }
    }
}

impl From<String> for SpecialAreaType {
    fn from(name: String) -> Self {
        SpecialAreaType::from(name.as_str())
    }
}

/// Special area entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialArea {
    pub id: String,
    #[serde(rename = "type")]
    pub area_type: SpecialAreaType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SpecialArea {
    /// Create an area with default position and size
    pub fn new(id: impl Into<String>, area_type: SpecialAreaType) -> Self {
        Self {
            id: id.into(),
            area_type,
            x: DEFAULT_AREA_X,
            y: DEFAULT_AREA_Y,
            width: DEFAULT_AREA_WIDTH,
            height: DEFAULT_AREA_HEIGHT,
        }
    }
}
