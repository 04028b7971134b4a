//! Table Model

use super::chair::ChairId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default table center when none is given
pub const DEFAULT_TABLE_X: f64 = 100.0;
pub const DEFAULT_TABLE_Y: f64 = 100.0;
/// Default footprint for non-circle shapes
pub const DEFAULT_TABLE_WIDTH: f64 = 160.0;
pub const DEFAULT_TABLE_HEIGHT: f64 = 100.0;
/// Seat count used when a new table asks for a non-positive count
pub const DEFAULT_SEATS: u32 = 8;
/// Upper bound on seats per table; larger requests are clamped
pub const MAX_SEATS: u32 = 1000;

/// Table shape
///
/// Deserialization is lenient: an unrecognised name maps to `Circle`,
/// which is also the geometry fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TableShape {
    Circle,
    #[default]
    Square,
    Rectangle,
    Imperial,
}

impl TableShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableShape::Circle => "circle",
            TableShape::Square => "square",
            TableShape::Rectangle => "rectangle",
            TableShape::Imperial => "imperial",
        }
    }
}

impl From<&str> for TableShape {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "square" => TableShape::Square,
            "rectangle" => TableShape::Rectangle,
            "imperial" => TableShape::Imperial,
            _ => TableShape::Circle,
        }
    }
}

impl From<String> for TableShape {
    fn from(name: String) -> Self {
        TableShape::from(name.as_str())
    }
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table entity
///
/// `guests[i]` is the occupant of physical seat `i`, the seat the layout
/// engine places at index `i`. `guests.len() == seats` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub id: String,
    pub name: String,
    pub shape: TableShape,
    pub seats: u32,
    /// Center position on the canvas
    pub x: f64,
    pub y: f64,
    /// Footprint for square, rectangle and imperial tables
    pub width: f64,
    pub height: f64,
    /// Radius for circle tables
    pub radius: f64,
    /// Degrees in `[0, 360)`
    pub rotation: i32,
    pub guests: Vec<Option<String>>,
}

impl Table {
    /// Create an empty table with default position and size
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        shape: TableShape,
        seats: u32,
    ) -> Self {
        let seats = seats.min(MAX_SEATS);
        Self {
            id: id.into(),
            name: name.into(),
            shape,
            seats,
            x: DEFAULT_TABLE_X,
            y: DEFAULT_TABLE_Y,
            width: DEFAULT_TABLE_WIDTH,
            height: DEFAULT_TABLE_HEIGHT,
            radius: Self::default_radius(seats),
            rotation: 0,
            guests: vec![None; seats as usize],
        }
    }

    /// Radius a new circle table gets for `seats` chairs
    pub fn default_radius(seats: u32) -> f64 {
        50.0 + f64::from(seats) * 2.0
    }

    /// Fold any degree value into `[0, 360)`
    pub fn normalize_rotation(degrees: i64) -> i32 {
        degrees.rem_euclid(360) as i32
    }

    pub fn has_seat(&self, seat_index: u32) -> bool {
        seat_index < self.seats && (seat_index as usize) < self.guests.len()
    }

    /// Guest id sitting at `seat_index`, if any
    pub fn occupant(&self, seat_index: u32) -> Option<&str> {
        self.guests
            .get(seat_index as usize)
            .and_then(|slot| slot.as_deref())
    }

    pub fn chair_id(&self, seat_index: u32) -> ChairId {
        ChairId::new(self.id.clone(), seat_index)
    }

    /// Change the seat count, keeping occupants whose seat still exists
    pub fn set_seat_count(&mut self, seats: u32) {
        let seats = seats.min(MAX_SEATS);
        self.seats = seats;
        self.guests.resize(seats as usize, None);
    }

    /// Remove every occupant, keeping the seat count
    pub fn clear_seats(&mut self) {
        self.guests = vec![None; self.seats as usize];
    }

    pub fn is_empty(&self) -> bool {
        self.guests.iter().all(Option::is_none)
    }

    /// Ids of seated guests in seat order
    pub fn occupants(&self) -> impl Iterator<Item = &str> {
        self.guests.iter().filter_map(|slot| slot.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_has_empty_seats() {
        let table = Table::new("t1", "Table 1", TableShape::Circle, 6);
        assert_eq!(table.guests.len(), 6);
        assert!(table.is_empty());
        assert_eq!(table.radius, 62.0);
        assert_eq!(table.x, DEFAULT_TABLE_X);
    }

    #[test]
    fn test_new_table_clamps_seats() {
        let table = Table::new("t1", "Big", TableShape::Square, MAX_SEATS + 5);
        assert_eq!(table.seats, MAX_SEATS);
        assert_eq!(table.guests.len(), MAX_SEATS as usize);
    }

    #[test]
    fn test_normalize_rotation() {
        assert_eq!(Table::normalize_rotation(0), 0);
        assert_eq!(Table::normalize_rotation(360), 0);
        assert_eq!(Table::normalize_rotation(450), 90);
        assert_eq!(Table::normalize_rotation(-90), 270);
        assert_eq!(Table::normalize_rotation(-720), 0);
    }

    #[test]
    fn test_set_seat_count_truncates_and_pads() {
        let mut table = Table::new("t1", "Table 1", TableShape::Square, 4);
        table.guests[1] = Some("g1".to_string());
        table.guests[3] = Some("g3".to_string());

        table.set_seat_count(2);
        assert_eq!(table.guests, vec![None, Some("g1".to_string())]);

        table.set_seat_count(5);
        assert_eq!(table.guests.len(), 5);
        assert_eq!(table.occupant(1), Some("g1"));
        assert_eq!(table.occupant(4), None);
    }

    #[test]
    fn test_has_seat_bounds() {
        let table = Table::new("t1", "Table 1", TableShape::Square, 3);
        assert!(table.has_seat(0));
        assert!(table.has_seat(2));
        assert!(!table.has_seat(3));
    }

    #[test]
    fn test_shape_parsing_is_lenient() {
        assert_eq!(TableShape::from("Rectangle"), TableShape::Rectangle);
        assert_eq!(TableShape::from("imperial"), TableShape::Imperial);
        assert_eq!(TableShape::from("hexagon"), TableShape::Circle);

        let shape: TableShape = serde_json::from_str("\"oval\"").unwrap();
        assert_eq!(shape, TableShape::Circle);
        assert_eq!(serde_json::to_string(&TableShape::Square).unwrap(), "\"square\"");
    }

    #[test]
    fn test_table_serializes_camel_case() {
        let mut table = Table::new("t1", "Table 1", TableShape::Square, 2);
        table.guests[0] = Some("g1".to_string());
        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(value["shape"], "square");
        assert_eq!(value["guests"], serde_json::json!(["g1", null]));
        assert_eq!(value["rotation"], 0);
    }
}
