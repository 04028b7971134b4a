//! Square tables: chairs spread over all four sides
//!
//! `seats / 4` per side, the remainder going to top, right, bottom, left in
//! that order. Every chair faces north regardless of table rotation.

use super::sides::{Footprint, Side};
use super::{SeatPlacement, TableGeometry};
use std::f64::consts::FRAC_PI_2;

const SIDE_ORDER: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

/// Chairs per side in `[top, right, bottom, left]` order
pub(super) fn side_counts(seats: u32) -> [u32; 4] {
    let base = seats / 4;
    let remainder = seats % 4;
    let mut counts = [base; 4];
    for count in counts.iter_mut().take(remainder as usize) {
        *count += 1;
    }
    counts
}

pub(super) fn layout(geometry: &TableGeometry) -> Vec<SeatPlacement> {
    let footprint = Footprint::new(geometry.width, geometry.height);
    let mut out = Vec::with_capacity(geometry.seats as usize);
    for (side, count) in SIDE_ORDER.into_iter().zip(side_counts(geometry.seats)) {
        footprint.spread(side, count, |_| -FRAC_PI_2, &mut out);
    }
    out
}
