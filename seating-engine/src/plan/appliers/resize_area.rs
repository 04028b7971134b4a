//! ResizeArea applier

use crate::plan::traits::PlanApplier;
use shared::plan::Plan;
use tracing::debug;

/// ResizeArea applier
pub struct ResizeAreaApplier {
    pub area_id: String,
    pub width: f64,
    pub height: f64,
}

impl PlanApplier for ResizeAreaApplier {
    fn apply(&self, plan: &Plan) -> Option<Plan> {
        if !self.width.is_finite() || !self.height.is_finite() {
            return None;
        }
        let index = plan.area_position(&self.area_id)?;
        let area = &plan.special_areas[index];
        if area.width == self.width && area.height == self.height {
            return None;
        }

        let mut next = plan.clone();
        next.special_areas[index].width = self.width;
        next.special_areas[index].height = self.height;
        debug!(
            area_id = %self.area_id,
            width = self.width,
            height = self.height,
            "[ResizeArea] Area resized"
        );
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{SpecialArea, SpecialAreaType};

    fn plan_with_area() -> Plan {
        Plan {
            special_areas: vec![SpecialArea::new("lounge", SpecialAreaType::Lounge)],
            ..Plan::default()
        }
    }

    fn resize(width: f64, height: f64) -> ResizeAreaApplier {
        ResizeAreaApplier {
            area_id: "lounge".to_string(),
            width,
            height,
        }
    }

    #[test]
    fn test_resize_area() {
        let next = resize(300.0, 120.0).apply(&plan_with_area()).unwrap();
        let area = &next.special_areas[0];
        assert_eq!((area.width, area.height), (300.0, 120.0));
    }

    #[test]
    fn test_same_size_is_noop() {
        let plan = plan_with_area();
        let area = &plan.special_areas[0];
        assert!(resize(area.width, area.height).apply(&plan).is_none());
    }

    #[test]
    fn test_missing_area_is_noop() {
        assert!(resize(10.0, 10.0).apply(&Plan::default()).is_none());
    }
}
