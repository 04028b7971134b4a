//! Rectangular tables
//!
//! One chair at each short end first, the rest split between the long
//! sides (`ceil` on the first, `floor` on the second). A single chair sits
//! at the right end, or the top end when the table stands vertically.

use super::sides::{Footprint, Side, split_halves};
use super::{SeatPlacement, TableGeometry};

/// `(short ends, first long side, second long side)` for an orientation
pub(super) fn sides_for(horizontal: bool) -> ([Side; 2], Side, Side) {
    if horizontal {
        ([Side::Left, Side::Right], Side::Top, Side::Bottom)
    } else {
        ([Side::Top, Side::Bottom], Side::Right, Side::Left)
    }
}

pub(super) fn layout(geometry: &TableGeometry) -> Vec<SeatPlacement> {
    let footprint = Footprint::new(geometry.width, geometry.height);
    // Chairs face straight out of their side; table rotation is left to the host.
    let facing = Side::outward;
    let horizontal = footprint.is_horizontal();
    let (ends, first_long, second_long) = sides_for(horizontal);
    let mut out = Vec::with_capacity(geometry.seats as usize);

    if geometry.seats == 1 {
        let lone_end = if horizontal { Side::Right } else { Side::Top };
        footprint.spread(lone_end, 1, facing, &mut out);
        return out;
    }

    for end in ends {
        footprint.spread(end, 1, facing, &mut out);
    }
    let (first, second) = split_halves(geometry.seats.saturating_sub(2));
    footprint.spread(first_long, first, facing, &mut out);
    footprint.spread(second_long, second, facing, &mut out);
    out
}
