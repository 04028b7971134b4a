//! Round tables: chairs evenly spaced on a circle, clockwise from the top

use super::{SeatPlacement, TableGeometry};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Radius chairs are placed on; grows with the seat count so chairs never
/// overlap and never drops below 80.
pub fn effective_radius(radius: f64, seats: u32) -> f64 {
    radius.max(60.0 + f64::from(seats) * 3.0).max(80.0)
}

pub(super) fn layout(geometry: &TableGeometry) -> Vec<SeatPlacement> {
    let radius = effective_radius(geometry.radius, geometry.seats);
    let step = TAU / f64::from(geometry.seats);
    let rotation = geometry.rotation_radians();

    (0..geometry.seats)
        .map(|i| {
            let theta = f64::from(i) * step - FRAC_PI_2;
            SeatPlacement {
                x: radius * theta.cos(),
                y: radius * theta.sin(),
                angle: theta + rotation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use shared::models::TableShape;
    use std::f64::consts::PI;

    fn round(seats: u32, radius: f64, rotation: i32) -> TableGeometry {
        TableGeometry {
            radius,
            rotation,
            ..geometry(TableShape::Circle, seats, 0.0, 0.0)
        }
    }

    #[test]
    fn test_six_seats_at_sixty_degree_steps() {
        let layout = layout(&round(6, 80.0, 0));
        assert_eq!(layout.len(), 6);
        for (i, seat) in layout.iter().enumerate() {
            let theta = i as f64 * PI / 3.0 - FRAC_PI_2;
            assert_seat(seat, 80.0 * theta.cos(), 80.0 * theta.sin(), theta);
        }
        assert_seat(&layout[0], 0.0, -80.0, -FRAC_PI_2);
        assert_seat(&layout[3], 0.0, 80.0, FRAC_PI_2);
    }

    #[test]
    fn test_seats_go_clockwise() {
        let layout = layout(&round(4, 100.0, 0));
        assert_seat(&layout[0], 0.0, -100.0, -FRAC_PI_2);
        assert_seat(&layout[1], 100.0, 0.0, 0.0);
        assert_seat(&layout[2], 0.0, 100.0, FRAC_PI_2);
        assert_seat(&layout[3], -100.0, 0.0, PI);
    }

    #[test]
    fn test_rotation_turns_facing_only() {
        let plain = layout(&round(4, 100.0, 0));
        let turned = layout(&round(4, 100.0, 90));
        for (a, b) in plain.iter().zip(&turned) {
            assert_close(a.x, b.x);
            assert_close(a.y, b.y);
            assert_close(b.angle, a.angle + FRAC_PI_2);
        }
    }

    #[test]
    fn test_effective_radius_floor_and_growth() {
        assert_eq!(effective_radius(0.0, 2), 80.0);
        assert_eq!(effective_radius(80.0, 6), 80.0);
        assert_eq!(effective_radius(50.0, 10), 90.0);
        assert_eq!(effective_radius(150.0, 10), 150.0);
        assert_eq!(effective_radius(f64::NAN, 4), 80.0);
    }

    #[test]
    fn test_small_radius_is_grown() {
        let layout = layout(&round(12, 40.0, 0));
        let distance = layout[5].x.hypot(layout[5].y);
        assert_close(distance, 96.0);
    }
}
