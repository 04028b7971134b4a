//! Seat layout geometry
//!
//! Computes where each chair sits around a table, in the table's local frame
//! (center at the origin, `y` grows downward as on the canvas). Placement
//! `i` is the physical seat addressed by `Table::guests[i]`, so the output
//! order is part of the contract.
//!
//! ```text
//!            top
//!        ┌──────────┐
//!   left │  (0, 0)  │ right
//!        └──────────┘
//!          bottom
//! ```
//!
//! Angles are radians in canvas orientation: `0` faces right (east),
//! `-π/2` faces up (north).

mod circle;
mod imperial;
mod rectangle;
mod sides;
mod square;

pub use circle::effective_radius;

use serde::Serialize;
use shared::models::{Table, TableShape};

/// Distance between a table edge and the chairs along it
pub const CHAIR_CLEARANCE: f64 = 28.0;

/// One chair position in the table's local frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeatPlacement {
    pub x: f64,
    pub y: f64,
    /// Direction the seated guest faces, in radians
    pub angle: f64,
}

/// The subset of a table the layout depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableGeometry {
    pub shape: TableShape,
    pub seats: u32,
    pub width: f64,
    pub height: f64,
    pub radius: f64,
    /// Degrees
    pub rotation: i32,
}

impl TableGeometry {
    pub fn rotation_radians(&self) -> f64 {
        f64::from(self.rotation).to_radians()
    }
}

impl From<&Table> for TableGeometry {
    fn from(table: &Table) -> Self {
        Self {
            shape: table.shape,
            seats: table.seats,
            width: table.width,
            height: table.height,
            radius: table.radius,
            rotation: table.rotation,
        }
    }
}

/// Chair placements for a table, one per seat, in seat order
pub fn seat_layout(geometry: &TableGeometry) -> Vec<SeatPlacement> {
    if geometry.seats == 0 {
        return Vec::new();
    }
    match geometry.shape {
        TableShape::Circle => circle::layout(geometry),
        TableShape::Square => square::layout(geometry),
        TableShape::Rectangle => rectangle::layout(geometry),
        TableShape::Imperial => imperial::layout(geometry),
    }
}

/// Shorthand for `seat_layout(&TableGeometry::from(table))`
pub fn table_layout(table: &Table) -> Vec<SeatPlacement> {
    seat_layout(&TableGeometry::from(table))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub const EPS: f64 = 1e-9;

    pub fn geometry(shape: TableShape, seats: u32, width: f64, height: f64) -> TableGeometry {
        TableGeometry {
            shape,
            seats,
            width,
            height,
            radius: 0.0,
            rotation: 0,
        }
    }

    pub fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    pub fn assert_seat(seat: &SeatPlacement, x: f64, y: f64, angle: f64) {
        assert_close(seat.x, x);
        assert_close(seat.y, y);
        assert_close(seat.angle, angle);
    }
}
