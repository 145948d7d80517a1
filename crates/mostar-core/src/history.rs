use crate::script::InputBag;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;

/// How many execution records stay retrievable. Older records are evicted
/// on append.
pub const HISTORY_WINDOW: usize = 25;

// ---------------------------------------------------------------------------
// ExecutionRecord
// ---------------------------------------------------------------------------

/// One execution attempt, success or failure. Immutable once appended.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    pub script_id: String,
    pub timestamp: DateTime<Utc>,
    pub inputs: InputBag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// ExecutionHistory
// ---------------------------------------------------------------------------

/// Fixed-capacity ring buffer over execution records: O(1) append-and-trim,
/// oldest record evicted once the window is full.
#[derive(Debug, Default)]
pub struct ExecutionHistory {
    records: VecDeque<ExecutionRecord>,
}

impl ExecutionHistory {
    pub fn push(&mut self, record: ExecutionRecord) {
        if self.records.len() == HISTORY_WINDOW {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    /// The retained window, oldest first.
    pub fn snapshot(&self) -> Vec<ExecutionRecord> {
        self.records.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
