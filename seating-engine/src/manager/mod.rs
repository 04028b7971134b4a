//! PlanManager - host-facing facade over the plan history
//!
//! Owns the [`PlanHistory`] for one editing session and exposes:
//! - `dispatch` for any [`PlanAction`], plus one convenience method per kind
//! - `load` / `load_json` to replace the plan with normalized external data
//! - `undo` / `redo` and their availability flags
//! - `to_value` / `to_json`, the projection a persistence layer stores
//! - `layout`, chair positions for a table in the current plan
//!
//! # Dispatch Flow
//!
//! ```text
//! dispatch(action)
//!     ├─ 1. reduce(present, action)
//!     ├─ 2. same Arc? → nothing recorded
//!     └─ 3. otherwise push present to past, clear future
//! ```
//!
//! Every call is synchronous and total. The only fallible calls are the
//! text-level ones (`load_json`, `to_json`).

use std::sync::Arc;

use serde_json::Value;
use shared::error::PlanResult;
use shared::models::{GuestImport, SpecialAreaType};
use shared::plan::{AreaDraft, ItemKind, Plan, PlanAction, TableDraft, TableUpdate};
use tracing::{debug, info};

use crate::core::EngineConfig;
use crate::history::PlanHistory;
use crate::layout::{SeatPlacement, table_layout};

/// Seating plan session
#[derive(Debug, Clone)]
pub struct PlanManager {
    history: PlanHistory,
    config: EngineConfig,
}

impl Default for PlanManager {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PlanManager {
    /// Start a session with an empty plan
    pub fn new(config: EngineConfig) -> Self {
        debug!(history_limit = config.history_limit, "PlanManager created");
        Self {
            history: PlanHistory::with_limit(config.history_limit),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current plan
    pub fn plan(&self) -> Arc<Plan> {
        Arc::clone(self.history.present())
    }

    pub fn history(&self) -> &PlanHistory {
        &self.history
    }

    // ========== Actions ==========

    /// Apply an action and return the resulting plan.
    ///
    /// A no-op returns the same `Arc` as [`plan`](Self::plan) did before.
    pub fn dispatch(&mut self, action: &PlanAction) -> Arc<Plan> {
        if self.history.apply(action) {
            debug!(
                action = action.kind(),
                undo_depth = self.history.past_len(),
                "Plan action applied"
            );
        }
        self.plan()
    }

    pub fn import_guests(&mut self, guests: Vec<GuestImport>) -> Arc<Plan> {
        self.dispatch(&PlanAction::ImportGuests { guests })
    }

    pub fn add_table(&mut self, draft: TableDraft) -> Arc<Plan> {
        self.dispatch(&PlanAction::AddTable(draft))
    }

    pub fn add_special_area(&mut self, area_type: SpecialAreaType) -> Arc<Plan> {
        self.dispatch(&PlanAction::AddSpecialArea(AreaDraft::new(area_type)))
    }

    pub fn move_item(&mut self, id: &str, x: f64, y: f64, item_type: ItemKind) -> Arc<Plan> {
        self.dispatch(&PlanAction::MoveItem {
            id: id.to_string(),
            x,
            y,
            item_type,
        })
    }

    /// Seat `guest_id` on a chair, or clear the chair with `None`
    pub fn seat_guest(
        &mut self,
        table_id: &str,
        seat_index: u32,
        guest_id: Option<&str>,
    ) -> Arc<Plan> {
        self.dispatch(&PlanAction::SeatGuest {
            table_id: table_id.to_string(),
            seat_index,
            guest_id: guest_id.map(str::to_string),
        })
    }

    pub fn toggle_lock_chair(&mut self, table_id: &str, seat_index: u32) -> Arc<Plan> {
        self.dispatch(&PlanAction::toggle_lock(table_id, seat_index))
    }

    pub fn delete_table(&mut self, table_id: &str) -> Arc<Plan> {
        self.dispatch(&PlanAction::DeleteTable {
            table_id: table_id.to_string(),
        })
    }

    pub fn delete_area(&mut self, area_id: &str) -> Arc<Plan> {
        self.dispatch(&PlanAction::DeleteArea {
            area_id: area_id.to_string(),
        })
    }

    pub fn resize_table(&mut self, table_id: &str, updates: TableUpdate) -> Arc<Plan> {
        self.dispatch(&PlanAction::ResizeTable {
            table_id: table_id.to_string(),
            updates,
        })
    }

    pub fn rotate_table(&mut self, table_id: &str, rotation: i64) -> Arc<Plan> {
        self.dispatch(&PlanAction::RotateTable {
            table_id: table_id.to_string(),
            rotation,
        })
    }

    pub fn resize_area(&mut self, area_id: &str, width: f64, height: f64) -> Arc<Plan> {
        self.dispatch(&PlanAction::ResizeArea {
            area_id: area_id.to_string(),
            width,
            height,
        })
    }

    // ========== Load / History ==========

    /// Replace the plan with normalized `raw` data, clearing undo and redo
    pub fn load(&mut self, raw: &Value) -> Arc<Plan> {
        self.history.load(raw);
        let plan = self.plan();
        info!(
            guests = plan.guests.len(),
            tables = plan.tables.len(),
            areas = plan.special_areas.len(),
            "Plan loaded"
        );
        plan
    }

    /// Parse `text` as JSON and [`load`](Self::load) it.
    ///
    /// Fails only when `text` is not JSON; the current plan is then kept.
    pub fn load_json(&mut self, text: &str) -> PlanResult<Arc<Plan>> {
        let raw: Value = serde_json::from_str(text)?;
        Ok(self.load(&raw))
    }

    /// Step back; `None` when there is nothing to undo
    pub fn undo(&mut self) -> Option<Arc<Plan>> {
        if !self.history.undo() {
            return None;
        }
        info!(
            undo_depth = self.history.past_len(),
            redo_depth = self.history.future_len(),
            "Undo"
        );
        Some(self.plan())
    }

    /// Step forward; `None` when there is nothing to redo
    pub fn redo(&mut self) -> Option<Arc<Plan>> {
        if !self.history.redo() {
            return None;
        }
        info!(
            undo_depth = self.history.past_len(),
            redo_depth = self.history.future_len(),
            "Redo"
        );
        Some(self.plan())
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ========== Projection ==========

    /// Persistence projection of the current plan
    pub fn to_value(&self) -> PlanResult<Value> {
        self.history.present().to_value()
    }

    pub fn to_json(&self) -> PlanResult<String> {
        Ok(serde_json::to_string(self.history.present().as_ref())?)
    }

    /// Chair placements for `table_id` in the current plan
    pub fn layout(&self, table_id: &str) -> Option<Vec<SeatPlacement>> {
        self.history.present().table(table_id).map(table_layout)
    }
}

#[cfg(test)]
mod tests;
