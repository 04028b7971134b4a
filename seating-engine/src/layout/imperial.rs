//! Imperial (banquet) tables
//!
//! Up to four anchor chairs, two per short end: the first end fills before
//! the second. Remaining chairs split between the long sides as for a
//! rectangle.

use super::rectangle::sides_for;
use super::sides::{Footprint, Side, split_halves};
use super::{SeatPlacement, TableGeometry};

const MAX_ANCHORS: u32 = 4;

pub(super) fn layout(geometry: &TableGeometry) -> Vec<SeatPlacement> {
    let footprint = Footprint::new(geometry.width, geometry.height);
    // Chairs face straight out of their side; table rotation is left to the host.
    let facing = Side::outward;
    let ([first_end, second_end], first_long, second_long) =
        sides_for(footprint.is_horizontal());
    let mut out = Vec::with_capacity(geometry.seats as usize);

    let anchors = geometry.seats.min(MAX_ANCHORS);
    let (first_end_count, second_end_count) = split_halves(anchors);
    footprint.spread(first_end, first_end_count, facing, &mut out);
    footprint.spread(second_end, second_end_count, facing, &mut out);

    let (first, second) = split_halves(geometry.seats - anchors);
    footprint.spread(first_long, first, facing, &mut out);
    footprint.spread(second_long, second, facing, &mut out);
    out
}
