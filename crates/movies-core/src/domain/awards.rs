//! Award interval result types.

use serde::{Deserialize, Serialize};

/// Gap between two consecutive wins of the same producers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerInterval {
    pub producers: String,
    /// Years between `previous_win` and `following_win`.
    pub interval: i32,
    pub previous_win: i32,
    pub following_win: i32,
}

/// Shortest and longest win intervals, one entry per producer with
/// at least two wins in each list.
///
/// Both lists are empty (never absent) when no producer won twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardIntervals {
    pub min: Vec<ProducerInterval>,
    pub max: Vec<ProducerInterval>,
}

impl AwardIntervals {
    /// True when no producer has won more than once.
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}
