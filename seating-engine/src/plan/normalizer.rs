//! Plan normalizer
//!
//! Rebuilds a valid [`Plan`] from arbitrary JSON, typically a plan read
//! back from storage after a schema change. Never fails: wrong types and
//! missing fields fall back to defaults, and derived state (seat arrays,
//! `seated` flags, locks) is recomputed rather than trusted.
//!
//! Repairs beyond plain defaulting are logged at `warn`.

use std::collections::BTreeSet;

use serde_json::{Map, Value};
use shared::models::{
    ChairId, DEFAULT_AREA_HEIGHT, DEFAULT_AREA_WIDTH, DEFAULT_AREA_X, DEFAULT_AREA_Y,
    DEFAULT_TABLE_HEIGHT, DEFAULT_TABLE_WIDTH, DEFAULT_TABLE_X, DEFAULT_TABLE_Y, Guest, MAX_SEATS,
    SpecialArea, SpecialAreaType, Table, TableShape,
};
use shared::plan::Plan;
use shared::util::IdRegistry;
use tracing::warn;

use super::invariants::{prune_locked_chairs, release_double_bookings, sync_seated_flags};

/// Normalize an arbitrary JSON value into an invariant-respecting plan
pub fn normalize_plan(raw: &Value) -> Plan {
    let Some(raw) = raw.as_object() else {
        if !raw.is_null() {
            warn!("Plan data is not an object, starting from an empty plan");
        }
        return Plan::default();
    };

    let mut guest_ids = IdRegistry::new();
    let mut guests: Vec<Guest> = array(raw, "guests")
        .iter()
        .map(|value| normalize_guest(value, &mut guest_ids))
        .collect();

    let mut table_ids = IdRegistry::new();
    let mut tables: Vec<Table> = array(raw, "tables")
        .iter()
        .enumerate()
        .map(|(index, value)| normalize_table(value, index, &mut table_ids))
        .collect();

    let mut area_ids = IdRegistry::new();
    let special_areas: Vec<SpecialArea> = array(raw, "specialAreas")
        .iter()
        .map(|value| normalize_area(value, &mut area_ids))
        .collect();

    let released = release_double_bookings(&mut tables);
    if released > 0 {
        warn!(released, "Removed duplicate seat assignments");
    }
    sync_seated_flags(&mut guests, &tables);

    let mut locked_chairs: BTreeSet<ChairId> = array(raw, "lockedChairs")
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|id| id.parse().ok())
        .collect();
    let pruned = prune_locked_chairs(&mut locked_chairs, &tables);
    if pruned > 0 {
        warn!(pruned, "Dropped locks on missing chairs");
    }

    Plan {
        guests,
        tables,
        special_areas,
        locked_chairs,
    }
}

fn normalize_guest(value: &Value, ids: &mut IdRegistry) -> Guest {
    let Some(obj) = value.as_object() else {
        warn!("Guest entry is not an object, replacing with a blank guest");
        return Guest::new(ids.claim(None, "guest"), "");
    };

    let id = claim_id(obj, ids, "guest");
    let full_name = match text(obj, "fullName") {
        Some(name) => name.to_string(),
        None => {
            let first = text(obj, "firstName").unwrap_or_default();
            let last = text(obj, "lastName").unwrap_or_default();
            format!("{first} {last}").trim().to_string()
        }
    };
    Guest::new(id, full_name)
}

fn normalize_table(value: &Value, index: usize, ids: &mut IdRegistry) -> Table {
    let fallback_name = format!("Table {}", index + 1);
    let Some(obj) = value.as_object() else {
        warn!(index, "Table entry is not an object, replacing with an empty table");
        return Table::new(ids.claim(None, "table"), fallback_name, TableShape::Square, 0);
    };

    let id = claim_id(obj, ids, "table");
    let name = text(obj, "name").map_or(fallback_name, str::to_string);
    let shape = text(obj, "shape").map_or(TableShape::Square, TableShape::from);

    let raw_guests = obj.get("guests").and_then(Value::as_array);
    let seats = match obj.get("seats").and_then(parse_leading_int) {
        Some(seats) if seats > 0 => seats,
        _ => raw_guests.map_or(0, |guests| guests.len() as i64),
    }
    .min(i64::from(MAX_SEATS)) as u32;

    let mut table = Table::new(id, name, shape, seats);
    table.guests = (0..seats as usize)
        .map(|seat| {
            raw_guests
                .and_then(|guests| guests.get(seat))
                .and_then(Value::as_str)
                .filter(|guest_id| !guest_id.is_empty())
                .map(str::to_string)
        })
        .collect();

    table.x = number(obj, "x").unwrap_or(DEFAULT_TABLE_X);
    table.y = number(obj, "y").unwrap_or(DEFAULT_TABLE_Y);
    table.width = number(obj, "width").unwrap_or(DEFAULT_TABLE_WIDTH);
    table.height = number(obj, "height").unwrap_or(DEFAULT_TABLE_HEIGHT);
    table.radius = number(obj, "radius").unwrap_or_else(|| Table::default_radius(seats));
    table.rotation = number(obj, "rotation")
        .map_or(0, |degrees| Table::normalize_rotation(degrees.round() as i64));
    table
}

fn normalize_area(value: &Value, ids: &mut IdRegistry) -> SpecialArea {
    let Some(obj) = value.as_object() else {
        warn!("Special area entry is not an object, replacing with a custom area");
        return SpecialArea::new(ids.claim(None, "area"), SpecialAreaType::Custom);
    };

    let id = claim_id(obj, ids, "area");
    let area_type = text(obj, "type").map_or(SpecialAreaType::Custom, SpecialAreaType::from);
    SpecialArea {
        id,
        area_type,
        x: number(obj, "x").unwrap_or(DEFAULT_AREA_X),
        y: number(obj, "y").unwrap_or(DEFAULT_AREA_Y),
        width: number(obj, "width").unwrap_or(DEFAULT_AREA_WIDTH),
        height: number(obj, "height").unwrap_or(DEFAULT_AREA_HEIGHT),
    }
}

/// Keep the entry's id when usable, otherwise generate one
fn claim_id(obj: &Map<String, Value>, ids: &mut IdRegistry, prefix: &str) -> String {
    let candidate = obj.get("id").and_then(Value::as_str);
    let id = ids.claim(candidate, prefix);
    if let Some(original) = candidate
        && original != id
        && !original.is_empty()
    {
        warn!(original, replacement = %id, "Duplicate {} id replaced", prefix);
    }
    id
}

fn array<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Non-empty string field
fn text<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Finite numeric field
fn number(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    obj.get(key)
        .and_then(Value::as_f64)
        .filter(|n| n.is_finite())
}

/// Leading integer of a number or numeric-prefixed string.
///
/// `"12 seats"` -> 12, `7.9` -> 7, `"abc"` -> None.
fn parse_leading_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim_start();
            let (negative, digits) = match s.as_bytes().first() {
                Some(b'-') => (true, &s[1..]),
                Some(b'+') => (false, &s[1..]),
                _ => (false, s),
            };
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            let magnitude: i64 = digits[..end].parse().ok()?;
            Some(if negative { -magnitude } else { magnitude })
        }
        _ => None,
    }
}
