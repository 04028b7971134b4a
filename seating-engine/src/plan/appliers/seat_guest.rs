//! SeatGuest applier
//!
//! Places a guest on a chair or clears it. A guest occupies at most one
//! seat, so placing first releases the guest from wherever they sit.
//!
//! The whole action is a no-op when the chair is locked, the table or
//! seat does not exist, or the seat already holds the requested occupant.

use crate::plan::invariants::{release_guest, sync_seated_flags};
use crate::plan::traits::PlanApplier;
use shared::models::ChairId;
use shared::plan::Plan;
use tracing::debug;

/// SeatGuest applier
pub struct SeatGuestApplier {
    pub table_id: String,
    pub seat_index: u32,
    /// `None` (or an empty id) clears the seat
    pub guest_id: Option<String>,
}

impl SeatGuestApplier {
    fn requested_guest(&self) -> Option<&str> {
        self.guest_id.as_deref().filter(|id| !id.is_empty())
    }
}

impl PlanApplier for SeatGuestApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        let chair = ChairId::new(self.table_id.clone(), self.seat_index);
        if plan.is_locked(&chair) {
            debug!(chair = %chair, "[SeatGuest] Chair is locked, ignoring");
            return None;
        }

        let index = plan.table_position(&self.table_id)?;
        let table = &plan.tables[index];
        if !table.has_seat(self.seat_index) {
            return None;
        }

        let guest_id = self.requested_guest();
        if table.occupant(self.seat_index) == guest_id {
            return None;
        }

        let mut next = plan.clone();
        if let Some(guest_id) = guest_id {
            release_guest(&mut next.tables, guest_id);
        }
        next.tables[index].guests[self.seat_index as usize] = guest_id.map(str::to_string);
        sync_seated_flags(&mut next.guests, &next.tables);

        debug!(chair = %chair, guest_id = ?guest_id, "[SeatGuest] Seat updated");
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::fixtures::{sample_plan, seated};
    use crate::plan::invariants::verify;

    fn seat(table_id: &str, seat_index: u32, guest_id: Option<&str>) -> SeatGuestApplier {
        SeatGuestApplier {
            table_id: table_id.to_string(),
            seat_index,
            guest_id: guest_id.map(str::to_string),
        }
    }

    #[test]
    fn test_seat_guest_marks_seated() {
        let next = seat("t1", 2, Some("g1")).apply(&sample_plan()).unwrap();

        assert_eq!(next.tables[0].occupant(2), Some("g1"));
        assert!(next.guest("g1").unwrap().seated);
        assert!(!next.guest("g2").unwrap().seated);
        assert!(verify(&next).is_ok());
    }

    #[test]
    fn test_seating_moves_guest_from_previous_seat() {
        let plan = seated(sample_plan(), "t1", 0, "g1");
        let next = seat("t2", 5, Some("g1")).apply(&plan).unwrap();

        assert_eq!(next.tables[0].occupant(0), None);
        assert_eq!(next.tables[1].occupant(5), Some("g1"));
        assert!(next.guest("g1").unwrap().seated);
        assert!(verify(&next).is_ok());
    }

    #[test]
    fn test_seating_over_occupant_unseats_them() {
        let plan = seated(sample_plan(), "t1", 0, "g1");
        let next = seat("t1", 0, Some("g2")).apply(&plan).unwrap();

        assert_eq!(next.tables[0].occupant(0), Some("g2"));
        assert!(!next.guest("g1").unwrap().seated);
        assert!(next.guest("g2").unwrap().seated);
    }

    #[test]
    fn test_clear_seat() {
        let plan = seated(sample_plan(), "t1", 3, "g3");
        let next = seat("t1", 3, None).apply(&plan).unwrap();

        assert!(next.tables[0].is_empty());
        assert!(!next.guest("g3").unwrap().seated);
    }

    #[test]
    fn test_empty_guest_id_clears_seat() {
        let plan = seated(sample_plan(), "t1", 3, "g3");
        let next = seat("t1", 3, Some("")).apply(&plan).unwrap();
        assert_eq!(next.tables[0].occupant(3), None);
    }

    #[test]
    fn test_locked_chair_is_noop() {
        let mut plan = sample_plan();
        plan.locked_chairs.insert(ChairId::new("t1", 1));

        assert!(seat("t1", 1, Some("g1")).apply(&plan).is_none());
    }

    #[test]
    fn test_locked_chair_keeps_guest_elsewhere() {
        // The release step must not run when the target is locked
        let mut plan = seated(sample_plan(), "t2", 0, "g1");
        plan.locked_chairs.insert(ChairId::new("t1", 1));

        assert!(seat("t1", 1, Some("g1")).apply(&plan).is_none());
    }

    #[test]
    fn test_out_of_range_seat_is_noop() {
        let plan = seated(sample_plan(), "t2", 0, "g1");
        assert!(seat("t1", 4, Some("g1")).apply(&plan).is_none());
    }

    #[test]
    fn test_missing_table_is_noop() {
        assert!(seat("t9", 0, Some("g1")).apply(&sample_plan()).is_none());
    }

    #[test]
    fn test_same_occupant_is_noop() {
        let plan = seated(sample_plan(), "t1", 0, "g1");
        assert!(seat("t1", 0, Some("g1")).apply(&plan).is_none());
        assert!(seat("t1", 1, None).apply(&plan).is_none());
    }

    #[test]
    fn test_unknown_guest_id_is_placed() {
        // Occupancy is keyed by id only; the guest list is not consulted
        let next = seat("t1", 0, Some("ghost")).apply(&sample_plan()).unwrap();
        assert_eq!(next.tables[0].occupant(0), Some("ghost"));
        assert!(next.guests.iter().all(|g| !g.seated));
    }
}
