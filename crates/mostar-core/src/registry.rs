use crate::history::{ExecutionHistory, ExecutionRecord};
use crate::script::{InputBag, MoScript, Outcome, ScriptSummary};
use chrono::Utc;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// MoScriptRegistry
// ---------------------------------------------------------------------------

/// Catalog of executable MoScripts plus the bounded execution history.
///
/// The registry is an explicit object owned by the composition root — there
/// is no module-level singleton. Mutation goes through `&mut self`; callers
/// in a concurrent setting must serialize access (e.g. wrap the registry in
/// a `Mutex`) so interleaved appends cannot corrupt the history window.
#[derive(Debug, Default)]
pub struct MoScriptRegistry {
    scripts: Vec<MoScript>,
    index: HashMap<&'static str, usize>,
    history: ExecutionHistory,
}

impl MoScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry keyed by the script's id. Duplicate
    /// registration silently overwrites in place, keeping the original
    /// registration position so listings stay stable.
    pub fn register(&mut self, script: MoScript) {
        match self.index.get(script.id) {
            Some(&i) => {
                tracing::debug!(script = script.id, "overwriting registered MoScript");
                self.scripts[i] = script;
            }
            None => {
                tracing::debug!(script = script.id, "registering MoScript");
                self.index.insert(script.id, self.scripts.len());
                self.scripts.push(script);
            }
        }
    }

    /// Execute a script against the supplied input bag.
    ///
    /// Both failure kinds — an unregistered id and an `Err` from the
    /// script's logic — are captured into a failure [`Outcome`] and a
    /// failure history record. This method never panics and never returns
    /// `Err`; the discriminator is `Outcome::success`.
    pub fn execute(&mut self, id: &str, inputs: InputBag) -> Outcome {
        let Some(&i) = self.index.get(id) else {
            let error = crate::error::MoScriptError::NotRegistered(id.to_string()).to_string();
            tracing::warn!(script = id, "execution requested for unregistered MoScript");
            self.history.push(ExecutionRecord {
                script_id: id.to_string(),
                timestamp: Utc::now(),
                inputs,
                result: None,
                success: false,
                error: Some(error.clone()),
            });
            return Outcome::failure(error, None);
        };

        let script = self.scripts[i].clone();
        match (script.logic)(&inputs) {
            Ok(result) => {
                let narrative = script.narrative.map(|f| f(&result));
                tracing::debug!(script = script.id, "MoScript executed");
                self.history.push(ExecutionRecord {
                    script_id: script.id.to_string(),
                    timestamp: Utc::now(),
                    inputs,
                    result: Some(result.clone()),
                    success: true,
                    error: None,
                });
                Outcome::success(result, narrative, &script)
            }
            Err(err) => {
                let mut error = err.to_string();
                if error.is_empty() {
                    error = "unknown execution failure".to_string();
                }
                tracing::warn!(script = script.id, error = %error, "MoScript execution failed");
                self.history.push(ExecutionRecord {
                    script_id: script.id.to_string(),
                    timestamp: Utc::now(),
                    inputs,
                    result: None,
                    success: false,
                    error: Some(error.clone()),
                });
                Outcome::failure(error, Some(&script))
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&MoScript> {
        self.index.get(id).map(|&i| &self.scripts[i])
    }

    /// All registered scripts, in registration order.
    pub fn list(&self) -> Vec<ScriptSummary> {
        self.scripts.iter().map(ScriptSummary::from).collect()
    }

    /// The most recent execution records (at most
    /// [`crate::history::HISTORY_WINDOW`]), oldest first.
    pub fn history(&self) -> Vec<ExecutionRecord> {
        self.history.snapshot()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
