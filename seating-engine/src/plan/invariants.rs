//! Plan invariants
//!
//! Helpers that keep derived state consistent after a change, plus a
//! verifier used by tests and debug builds.
//!
//! # Invariants
//!
//! 1. A guest id occupies at most one seat across all tables
//! 2. `guest.seated` is true iff the guest occupies a seat
//! 3. Every locked chair names an existing table and an in-range seat
//! 4. `table.guests.len() == table.seats`

use shared::models::{ChairId, Guest, Table};
use std::collections::{BTreeSet, HashMap, HashSet};
use thiserror::Error;

/// A broken plan invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("Guest {guest_id} occupies more than one seat")]
    DoubleBooked { guest_id: String },

    #[error("Guest {guest_id} has seated={flag} but occupancy says {occupied}")]
    SeatedFlagMismatch {
        guest_id: String,
        flag: bool,
        occupied: bool,
    },

    #[error("Locked chair {0} does not reference an existing seat")]
    DanglingLock(ChairId),

    #[error("Table {table_id} has {slots} seat slots for {seats} seats")]
    SeatCountMismatch {
        table_id: String,
        slots: usize,
        seats: u32,
    },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },
}

/// Ids of every guest currently sitting somewhere
pub fn occupied_guest_ids(tables: &[Table]) -> HashSet<&str> {
    tables.iter().flat_map(Table::occupants).collect()
}

/// Recompute every `seated` flag from table occupancy.
///
/// Returns whether any flag changed.
pub fn sync_seated_flags(guests: &mut [Guest], tables: &[Table]) -> bool {
    let occupied = occupied_guest_ids(tables);
    let mut changed = false;
    for guest in guests.iter_mut() {
        let seated = occupied.contains(guest.id.as_str());
        if guest.seated != seated {
            guest.seated = seated;
            changed = true;
        }
    }
    changed
}

/// Drop locks whose table is gone or whose seat index is out of range.
///
/// Returns the number of locks removed.
pub fn prune_locked_chairs(locked: &mut BTreeSet<ChairId>, tables: &[Table]) -> usize {
    if locked.is_empty() {
        return 0;
    }
    let seat_counts: HashMap<&str, u32> =
        tables.iter().map(|t| (t.id.as_str(), t.seats)).collect();
    let before = locked.len();
    locked.retain(|chair| {
        seat_counts
            .get(chair.table_id.as_str())
            .is_some_and(|&seats| chair.seat_index < seats)
    });
    before - locked.len()
}

/// Clear every seat holding `guest_id`. Returns whether anything changed.
pub fn release_guest(tables: &mut [Table], guest_id: &str) -> bool {
    let mut changed = false;
    for slot in tables.iter_mut().flat_map(|t| t.guests.iter_mut()) {
        if slot.as_deref() == Some(guest_id) {
            *slot = None;
            changed = true;
        }
    }
    changed
}

/// Keep only the first seat (in table order) of any double-booked guest.
///
/// Returns the number of seats cleared.
pub fn release_double_bookings(tables: &mut [Table]) -> usize {
    let mut seen = HashSet::new();
    let mut released = 0;
    for slot in tables.iter_mut().flat_map(|t| t.guests.iter_mut()) {
        let duplicate = slot.as_ref().is_some_and(|id| !seen.insert(id.clone()));
        if duplicate {
            *slot = None;
            released += 1;
        }
    }
    released
}

/// Check every plan invariant, reporting the first violation found
pub fn verify(plan: &shared::plan::Plan) -> Result<(), InvariantViolation> {
    check_unique_ids("guest", plan.guests.iter().map(|g| g.id.as_str()))?;
    check_unique_ids("table", plan.tables.iter().map(|t| t.id.as_str()))?;
    check_unique_ids("area", plan.special_areas.iter().map(|a| a.id.as_str()))?;

    for table in &plan.tables {
        if table.guests.len() != table.seats as usize {
            return Err(InvariantViolation::SeatCountMismatch {
                table_id: table.id.clone(),
                slots: table.guests.len(),
                seats: table.seats,
            });
        }
    }

    let mut seen = HashSet::new();
    for guest_id in plan.tables.iter().flat_map(Table::occupants) {
        if !seen.insert(guest_id) {
            return Err(InvariantViolation::DoubleBooked {
                guest_id: guest_id.to_string(),
            });
        }
    }

    for guest in &plan.guests {
        let occupied = seen.contains(guest.id.as_str());
        if guest.seated != occupied {
            return Err(InvariantViolation::SeatedFlagMismatch {
                guest_id: guest.id.clone(),
                flag: guest.seated,
                occupied,
            });
        }
    }

    for chair in &plan.locked_chairs {
        let valid = plan
            .table(&chair.table_id)
            .is_some_and(|t| chair.seat_index < t.seats);
        if !valid {
            return Err(InvariantViolation::DanglingLock(chair.clone()));
        }
    }

    Ok(())
}

fn check_unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), InvariantViolation> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(InvariantViolation::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}
