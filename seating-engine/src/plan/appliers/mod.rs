//! Plan applier implementations
//!
//! Each applier implements the `PlanApplier` trait and handles
//! one specific action kind. Appliers are PURE functions.

use enum_dispatch::enum_dispatch;

use super::traits::PlanApplier;
use shared::plan::{Plan, PlanAction};

mod add_special_area;
mod add_table;
mod delete_area;
mod delete_table;
mod import_guests;
mod move_item;
mod resize_area;
mod resize_table;
mod rotate_table;
mod seat_guest;
mod toggle_lock_chair;

pub use add_special_area::AddSpecialAreaApplier;
pub use add_table::AddTableApplier;
pub use delete_area::DeleteAreaApplier;
pub use delete_table::DeleteTableApplier;
pub use import_guests::ImportGuestsApplier;
pub use move_item::MoveItemApplier;
pub use resize_area::ResizeAreaApplier;
pub use resize_table::ResizeTableApplier;
pub use rotate_table::RotateTableApplier;
pub use seat_guest::SeatGuestApplier;
pub use toggle_lock_chair::ToggleLockChairApplier;

/// ApplierAction enum - dispatches to concrete applier implementations
///
/// Uses enum_dispatch for zero-cost static dispatch.
#[enum_dispatch(PlanApplier)]
pub enum ApplierAction {
    ImportGuests(ImportGuestsApplier),
    AddTable(AddTableApplier),
    AddSpecialArea(AddSpecialAreaApplier),
    MoveItem(MoveItemApplier),
    SeatGuest(SeatGuestApplier),
    ToggleLockChair(ToggleLockChairApplier),
    DeleteTable(DeleteTableApplier),
    DeleteArea(DeleteAreaApplier),
    ResizeTable(ResizeTableApplier),
    RotateTable(RotateTableApplier),
    ResizeArea(ResizeAreaApplier),
}

impl ApplierAction {
    /// Convert a PlanAction to its applier; `None` for unknown actions.
    ///
    /// This is the ONLY place with a match on PlanAction payloads.
    pub fn from_action(action: &PlanAction) -> Option<Self> {
        let applier = match action {
            PlanAction::ImportGuests { guests } => ImportGuestsApplier {
                guests: guests.clone(),
            }
            .into(),
            PlanAction::AddTable(draft) => AddTableApplier {
                draft: draft.clone(),
            }
            .into(),
            PlanAction::AddSpecialArea(draft) => AddSpecialAreaApplier {
                draft: draft.clone(),
            }
            .into(),
            PlanAction::MoveItem {
                id,
                x,
                y,
                item_type,
            } => MoveItemApplier {
                id: id.clone(),
                x: *x,
                y: *y,
                item_type: *item_type,
            }
            .into(),
            PlanAction::SeatGuest {
                table_id,
                seat_index,
                guest_id,
            } => SeatGuestApplier {
                table_id: table_id.clone(),
                seat_index: *seat_index,
                guest_id: guest_id.clone(),
            }
            .into(),
            PlanAction::ToggleLockChair {
                table_id,
                seat_index,
            } => ToggleLockChairApplier {
                table_id: table_id.clone(),
                seat_index: *seat_index,
            }
            .into(),
            PlanAction::DeleteTable { table_id } => DeleteTableApplier {
                table_id: table_id.clone(),
            }
            .into(),
            PlanAction::DeleteArea { area_id } => DeleteAreaApplier {
                area_id: area_id.clone(),
            }
            .into(),
            PlanAction::ResizeTable { table_id, updates } => ResizeTableApplier {
                table_id: table_id.clone(),
                updates: updates.clone(),
            }
            .into(),
            PlanAction::RotateTable { table_id, rotation } => RotateTableApplier {
                table_id: table_id.clone(),
                rotation: *rotation,
            }
            .into(),
            PlanAction::ResizeArea {
                area_id,
                width,
                height,
            } => ResizeAreaApplier {
                area_id: area_id.clone(),
                width: *width,
                height: *height,
            }
            .into(),
            PlanAction::Unknown => return None,
        };
        Some(applier)
    }
}

/// Shared by appliers that take caller-supplied coordinates
pub(super) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
