use crate::error::{MoScriptError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Generic string-keyed bag passed across the registry boundary. Scripts
/// convert it into their own typed input struct before computing.
pub type InputBag = serde_json::Map<String, Value>;

// ---------------------------------------------------------------------------
// MoScript
// ---------------------------------------------------------------------------

/// A named, registered computation unit: declared inputs, pure logic, and an
/// optional narrative formatter. Fn pointers keep the catalog a flat static
/// table with no heap-allocated closures.
#[derive(Debug, Clone)]
pub struct MoScript {
    pub id: &'static str,
    pub name: &'static str,
    /// Documentation-only label naming the dashboard event that would fire
    /// this script.
    pub trigger: &'static str,
    /// Input keys the logic reads from the bag. Drives fixture gathering;
    /// not enforced at execution time.
    pub inputs: &'static [&'static str],
    pub logic: fn(&InputBag) -> Result<Value>,
    pub narrative: Option<fn(&Value) -> String>,
    /// Cosmetic marker: render the narrative in an informal tone.
    pub sass: bool,
}

/// Serializable projection of a [`MoScript`] for listings and outcome
/// references (the fn pointers stay behind the registry boundary).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptSummary {
    pub id: &'static str,
    pub name: &'static str,
    pub trigger: &'static str,
    pub inputs: Vec<&'static str>,
    pub sass: bool,
}

impl From<&MoScript> for ScriptSummary {
    fn from(script: &MoScript) -> Self {
        Self {
            id: script.id,
            name: script.name,
            trigger: script.trigger,
            inputs: script.inputs.to_vec(),
            sass: script.sass,
        }
    }
}

// ---------------------------------------------------------------------------
// Outcome
// ---------------------------------------------------------------------------

/// Discriminated result of one execution attempt. `execute` always returns
/// an `Outcome`; failures are signaled through `success`/`error`, never by
/// panicking or bubbling an `Err` to the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sass: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptSummary>,
}

impl Outcome {
    pub fn success(result: Value, narrative: Option<String>, script: &MoScript) -> Self {
        Self {
            success: true,
            result: Some(result),
            narrative,
            sass: Some(script.sass),
            error: None,
            script: Some(ScriptSummary::from(script)),
        }
    }

    pub fn failure(error: String, script: Option<&MoScript>) -> Self {
        Self {
            success: false,
            result: None,
            narrative: None,
            sass: None,
            error: Some(error),
            script: script.map(ScriptSummary::from),
        }
    }
}

// ---------------------------------------------------------------------------
// Input conversion
// ---------------------------------------------------------------------------

/// Deserialize the generic bag into a script's typed input struct. A key
/// that is present but malformed surfaces as `InvalidInput` instead of
/// flowing into the logic as a null.
pub(crate) fn parse_inputs<T: DeserializeOwned>(bag: &InputBag) -> Result<T> {
    serde_json::from_value(Value::Object(bag.clone()))
        .map_err(|e| MoScriptError::InvalidInput(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
