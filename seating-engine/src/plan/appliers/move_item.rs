//! MoveItem applier
//!
//! Repositions a table or special area. No-op when the item is missing
//! or already at the target position.

use crate::plan::traits::PlanApplier;
use shared::plan::{ItemKind, Plan};
use tracing::debug;

/// MoveItem applier
pub struct MoveItemApplier {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub item_type: ItemKind,
}

impl PlanApplier for MoveItemApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return None;
        }

        let next = match self.item_type {
            ItemKind::Table => {
                let index = plan.table_position(&self.id)?;
                let table = &plan.tables[index];
                if table.x == self.x && table.y == self.y {
                    return None;
                }
                let mut next = plan.clone();
                next.tables[index].x = self.x;
                next.tables[index].y = self.y;
                next
            }
            ItemKind::Area => {
                let index = plan.area_position(&self.id)?;
                let area = &plan.special_areas[index];
                if area.x == self.x && area.y == self.y {
                    return None;
                }
                let mut next = plan.clone();
                next.special_areas[index].x = self.x;
                next.special_areas[index].y = self.y;
                next
            }
        };

        debug!(id = %self.id, x = self.x, y = self.y, "[MoveItem] Item moved");
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::fixtures::sample_plan;
    use shared::models::{SpecialArea, SpecialAreaType};

    fn mover(id: &str, x: f64, y: f64, item_type: ItemKind) -> MoveItemApplier {
        MoveItemApplier {
            id: id.to_string(),
            x,
            y,
            item_type,
        }
    }

    #[test]
    fn test_move_table() {
        let next = mover("t2", 450.0, 320.0, ItemKind::Table)
            .apply(&sample_plan())
            .unwrap();
        assert_eq!((next.tables[1].x, next.tables[1].y), (450.0, 320.0));
    }

    #[test]
    fn test_move_area() {
        let mut plan = sample_plan();
        plan.special_areas
            .push(SpecialArea::new("dance", SpecialAreaType::DanceFloor));

        let next = mover("dance", 10.0, 20.0, ItemKind::Area)
            .apply(&plan)
            .unwrap();
        assert_eq!((next.special_areas[0].x, next.special_areas[0].y), (10.0, 20.0));
    }

    #[test]
    fn test_same_position_is_noop() {
        let plan = sample_plan();
        let (x, y) = (plan.tables[0].x, plan.tables[0].y);
        assert!(mover("t1", x, y, ItemKind::Table).apply(&plan).is_none());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        assert!(
            mover("nope", 1.0, 1.0, ItemKind::Table)
                .apply(&sample_plan())
                .is_none()
        );
    }

    #[test]
    fn test_item_type_must_match() {
        // t1 is a table, not an area
        assert!(
            mover("t1", 1.0, 1.0, ItemKind::Area)
                .apply(&sample_plan())
                .is_none()
        );
    }
}
