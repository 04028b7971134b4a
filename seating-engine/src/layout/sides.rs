//! Edge placement shared by the polygonal shapes

use super::{CHAIR_CLEARANCE, SeatPlacement};
use std::f64::consts::{FRAC_PI_2, PI};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Direction pointing away from the table across this side
    pub(super) fn outward(self) -> f64 {
        match self {
            Side::Top => -FRAC_PI_2,
            Side::Right => 0.0,
            Side::Bottom => FRAC_PI_2,
            Side::Left => PI,
        }
    }
}

/// A rectangular footprint centered at the origin
#[derive(Debug, Clone, Copy)]
pub(super) struct Footprint {
    width: f64,
    height: f64,
}

impl Footprint {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Long axis runs left-right (ties count as horizontal)
    pub(super) fn is_horizontal(&self) -> bool {
        self.width >= self.height
    }

    /// Append `count` chairs along `side`, spaced at `length / (count + 1)`.
    ///
    /// Top and bottom run left to right, left and right run top to bottom.
    pub(super) fn spread(
        &self,
        side: Side,
        count: u32,
        facing: impl Fn(Side) -> f64,
        out: &mut Vec<SeatPlacement>,
    ) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let angle = facing(side);
        for i in 1..=count {
            let t = f64::from(i) / f64::from(count + 1);
            let (x, y) = match side {
                Side::Top => (-half_w + t * self.width, -half_h - CHAIR_CLEARANCE),
                Side::Bottom => (-half_w + t * self.width, half_h + CHAIR_CLEARANCE),
                Side::Left => (-half_w - CHAIR_CLEARANCE, -half_h + t * self.height),
                Side::Right => (half_w + CHAIR_CLEARANCE, -half_h + t * self.height),
            };
            out.push(SeatPlacement { x, y, angle });
        }
    }
}

/// `(ceil(n / 2), floor(n / 2))`
pub(super) fn split_halves(n: u32) -> (u32, u32) {
    (n.div_ceil(2), n / 2)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_spread_top_spacing() {
        let mut out = Vec::new();
        Footprint::new(120.0, 60.0).spread(Side::Top, 3, Side::outward, &mut out);
        assert_eq!(out.len(), 3);
        assert_seat(&out[0], -30.0, -58.0, -FRAC_PI_2);
        assert_seat(&out[1], 0.0, -58.0, -FRAC_PI_2);
        assert_seat(&out[2], 30.0, -58.0, -FRAC_PI_2);
    }

    #[test]
    fn test_spread_left_runs_top_to_bottom() {
        let mut out = Vec::new();
        Footprint::new(100.0, 90.0).spread(Side::Left, 2, Side::outward, &mut out);
        assert_seat(&out[0], -78.0, -15.0, PI);
        assert_seat(&out[1], -78.0, 15.0, PI);
    }

    #[test]
    fn test_spread_zero_is_noop() {
        let mut out = Vec::new();
        Footprint::new(100.0, 100.0).spread(Side::Right, 0, Side::outward, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_split_halves() {
        assert_eq!(split_halves(0), (0, 0));
        assert_eq!(split_halves(1), (1, 0));
        assert_eq!(split_halves(4), (2, 2));
        assert_eq!(split_halves(7), (4, 3));
    }
}
