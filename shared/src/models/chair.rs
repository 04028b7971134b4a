//! Chair identifiers
//!
//! A chair is addressed as `tableId-seatIndex`. Table ids may themselves
//! contain dashes, so the key is split at its last dash.

use crate::error::PlanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One physical seat: a table id plus a seat index
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChairId {
    pub table_id: String,
    pub seat_index: u32,
}

impl ChairId {
    pub fn new(table_id: impl Into<String>, seat_index: u32) -> Self {
        Self {
            table_id: table_id.into(),
            seat_index,
        }
    }
}

impl fmt::Display for ChairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.table_id, self.seat_index)
    }
}

impl FromStr for ChairId {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (table_id, index) = s
            .rsplit_once('-')
            .ok_or_else(|| PlanError::InvalidChairId(s.to_string()))?;
        if table_id.is_empty() {
            return Err(PlanError::InvalidChairId(s.to_string()));
        }
        let seat_index = index
            .parse::<u32>()
            .map_err(|_| PlanError::InvalidChairId(s.to_string()))?;
        Ok(Self::new(table_id, seat_index))
    }
}

impl TryFrom<String> for ChairId {
    type Error = PlanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ChairId> for String {
    fn from(chair: ChairId) -> Self {
        chair.to_string()
    }
}
