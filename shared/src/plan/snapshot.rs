//! Plan - the aggregate root
//!
//! Serializes to the projection the persistence collaborator stores:
//! `guests`, `tables` and `specialAreas` as arrays and `lockedChairs` as a
//! sorted array of `tableId-seatIndex` strings.

use crate::error::PlanResult;
use crate::models::{ChairId, Guest, SpecialArea, Table};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Seating plan at one point in time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[serde(default)]
    pub tables: Vec<Table>,
    #[serde(default)]
    pub special_areas: Vec<SpecialArea>,
    #[serde(default)]
    pub locked_chairs: BTreeSet<ChairId>,
}

impl Plan {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn table(&self, table_id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == table_id)
    }

    pub fn table_position(&self, table_id: &str) -> Option<usize> {
        self.tables.iter().position(|t| t.id == table_id)
    }

    pub fn area(&self, area_id: &str) -> Option<&SpecialArea> {
        self.special_areas.iter().find(|a| a.id == area_id)
    }

    pub fn area_position(&self, area_id: &str) -> Option<usize> {
        self.special_areas.iter().position(|a| a.id == area_id)
    }

    pub fn guest(&self, guest_id: &str) -> Option<&Guest> {
        self.guests.iter().find(|g| g.id == guest_id)
    }

    pub fn is_locked(&self, chair: &ChairId) -> bool {
        self.locked_chairs.contains(chair)
    }

    /// Occupancy index: guest id -> the chair it sits on
    pub fn seating_index(&self) -> HashMap<&str, ChairId> {
        let mut index = HashMap::new();
        for table in &self.tables {
            for (seat, slot) in table.guests.iter().enumerate() {
                if let Some(guest_id) = slot.as_deref() {
                    index
                        .entry(guest_id)
                        .or_insert_with(|| ChairId::new(table.id.clone(), seat as u32));
                }
            }
        }
        index
    }

    /// Chair the guest currently occupies
    pub fn seat_of(&self, guest_id: &str) -> Option<ChairId> {
        self.tables.iter().find_map(|table| {
            table
                .guests
                .iter()
                .position(|slot| slot.as_deref() == Some(guest_id))
                .map(|seat| ChairId::new(table.id.clone(), seat as u32))
        })
    }

    pub fn seated_count(&self) -> usize {
        self.guests.iter().filter(|g| g.seated).count()
    }

    /// Plain-data projection for persistence
    pub fn to_value(&self) -> PlanResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TableShape;

    fn plan_with_seated_guest() -> Plan {
        let mut table = Table::new("t1", "Table 1", TableShape::Circle, 4);
        table.guests[2] = Some("g1".to_string());
        let mut guest = Guest::new("g1", "John Doe");
        guest.seated = true;
        Plan {
            guests: vec![guest, Guest::new("g2", "Jane Smith")],
            tables: vec![table],
            special_areas: Vec::new(),
            locked_chairs: BTreeSet::from([ChairId::new("t1", 0)]),
        }
    }

    #[test]
    fn test_lookups() {
        let plan = plan_with_seated_guest();
        assert!(plan.table("t1").is_some());
        assert_eq!(plan.table_position("t1"), Some(0));
        assert!(plan.table("nope").is_none());
        assert_eq!(plan.guest("g2").map(|g| g.full_name.as_str()), Some("Jane Smith"));
        assert!(plan.is_locked(&ChairId::new("t1", 0)));
        assert!(!plan.is_locked(&ChairId::new("t1", 1)));
    }

    #[test]
    fn test_seat_of_and_index() {
        let plan = plan_with_seated_guest();
        assert_eq!(plan.seat_of("g1"), Some(ChairId::new("t1", 2)));
        assert_eq!(plan.seat_of("g2"), None);

        let index = plan.seating_index();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("g1"), Some(&ChairId::new("t1", 2)));
        assert_eq!(plan.seated_count(), 1);
    }

    #[test]
    fn test_projection_shape() {
        let value = plan_with_seated_guest().to_value().unwrap();
        assert_eq!(value["lockedChairs"], serde_json::json!(["t1-0"]));
        assert_eq!(value["guests"][0]["fullName"], "John Doe");
        assert!(value["specialAreas"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_projection_round_trip() {
        let plan = plan_with_seated_guest();
        let back: Plan = serde_json::from_value(plan.to_value().unwrap()).unwrap();
        assert_eq!(back, plan);
    }
}
