//! Undo/redo history over immutable plan snapshots
//!
//! ```text
//! apply(a)            past: [p0]        present: p1   future: []
//! apply(b)            past: [p0, p1]    present: p2   future: []
//! undo()              past: [p0]        present: p1   future: [p2]
//! apply(c)            past: [p0, p1]    present: p3   future: []
//! ```
//!
//! Snapshots are `Arc<Plan>`, so recording one never copies a plan. An
//! action whose reducer result is pointer-equal to `present` leaves the
//! whole history untouched.

use std::collections::VecDeque;
use std::sync::Arc;

use serde_json::Value;
use shared::plan::{Plan, PlanAction};
use tracing::debug;

use crate::plan::{normalize_plan, reduce};

/// Number of undo steps kept by default
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Bounded undo/redo history of plans
#[derive(Debug, Clone)]
pub struct PlanHistory {
    /// Prior snapshots, oldest first
    past: VecDeque<Arc<Plan>>,
    present: Arc<Plan>,
    /// Undone snapshots, most recent undo first
    future: VecDeque<Arc<Plan>>,
    limit: usize,
}

impl Default for PlanHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanHistory {
    /// Empty plan with empty history
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            present: Arc::new(Plan::default()),
            future: VecDeque::new(),
            limit,
        }
    }

    pub fn present(&self) -> &Arc<Plan> {
        &self.present
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Run `action` through the reducer and record the result.
    ///
    /// Returns `false` when the action had no effect.
    pub fn apply(&mut self, action: &PlanAction) -> bool {
        let next = reduce(&self.present, action);
        if Arc::ptr_eq(&next, &self.present) {
            return false;
        }
        let previous = std::mem::replace(&mut self.present, next);
        self.push_past(previous);
        self.future.clear();
        true
    }

    /// Replace the present with a normalized plan and forget all history.
    ///
    /// Loading is not undoable.
    pub fn load(&mut self, raw: &Value) {
        self.reset(normalize_plan(raw));
    }

    /// Replace the present with an already valid plan and forget all history
    fn reset(&mut self, plan: Plan) {
        debug!(
            dropped_past = self.past.len(),
            dropped_future = self.future.len(),
            "Plan history reset"
        );
        self.present = Arc::new(plan);
        self.past.clear();
        self.future.clear();
    }

    /// Step back one snapshot. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.past.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, previous);
        self.future.push_front(current);
        true
    }

    /// Step forward one snapshot. Returns `false` when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.future.pop_front() else {
            return false;
        };
        let current = std::mem::replace(&mut self.present, next);
        self.push_past(current);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    fn push_past(&mut self, plan: Arc<Plan>) {
        self.past.push_back(plan);
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
    }
}
