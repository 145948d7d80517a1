//! Threat level assessment.
//!
//! Log severities accumulate weight (HIGH 3, MEDIUM 2, LOW 1, +1 for an
//! unknown source); the anomalous share of access attempts adds up to 100
//! points on its own scale. `score = min(100, weight*8 + ratio*100)`.

use crate::error::Result;
use crate::script::{parse_inputs, InputBag};
use crate::types::{round1, AccessPatterns, SecurityLog};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatClass {
    Elevated,
    Heightened,
    Normal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatAssessment {
    /// 0-100, rounded to 1 decimal.
    pub threat_level: f64,
    pub classification: ThreatClass,
    /// The first three log entries, surfaced for the console.
    pub highlighted_events: Vec<SecurityLog>,
    pub recommended_actions: Vec<String>,
}

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

pub fn assess_threat_level(logs: &[SecurityLog], access: &AccessPatterns) -> ThreatAssessment {
    let severity_weight: u32 = logs
        .iter()
        .map(|log| log.severity.weight() + u32::from(log.unknown_source))
        .sum();

    let total_access = access.normal + access.anomalous;
    let anomaly_ratio = f64::from(access.anomalous) / f64::from(total_access.max(1));
    let score = (f64::from(severity_weight) * 8.0 + anomaly_ratio * 100.0).min(100.0);

    let classification = if score > 70.0 {
        ThreatClass::Elevated
    } else if score > 40.0 {
        ThreatClass::Heightened
    } else {
        ThreatClass::Normal
    };

    let recommended_actions = if score > 70.0 {
        vec![
            "Isolate sensitive endpoints".to_string(),
            "Initiate deep packet inspection".to_string(),
            "Notify Phoenix for ethics audit alignment".to_string(),
        ]
    } else {
        vec![
            "Maintain normal monitoring cadence".to_string(),
            "Review access logs every 30 minutes".to_string(),
        ]
    };

    ThreatAssessment {
        threat_level: round1(score),
        classification,
        highlighted_events: logs.iter().take(3).cloned().collect(),
        recommended_actions,
    }
}

// ---------------------------------------------------------------------------
// Script adapter
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThreatInputs {
    #[serde(default = "crate::fixtures::sample_security_logs")]
    network_logs: Vec<SecurityLog>,
    #[serde(default = "crate::fixtures::sample_access_patterns")]
    access_patterns: AccessPatterns,
}

pub(crate) fn logic(bag: &InputBag) -> Result<Value> {
    let inputs: ThreatInputs = parse_inputs(bag)?;
    Ok(serde_json::to_value(assess_threat_level(
        &inputs.network_logs,
        &inputs.access_patterns,
    ))?)
}

pub(crate) fn narrative(result: &Value) -> String {
    let level = result.get("threatLevel").and_then(Value::as_f64);
    let class = result.get("classification").and_then(Value::as_str);
    match (level, class) {
        (Some(level), Some(class)) => format!(
            "Threat resonance at {level}. Classification: {class}. TsaTse Fly is on overwatch."
        ),
        _ => "Threat grid scanned. No anomalies severe enough to broadcast.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
