//! Grid health scoring.
//!
//! Uptime carries 40 points, response time 30 (one point lost per 10ms),
//! agent harmony 30; the total is clamped to 100.

use crate::error::Result;
use crate::script::{parse_inputs, InputBag};
use crate::types::{round1, round2, AgentStatus, SystemMetrics};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Optimal,
    Stable,
    Degraded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBreakdown {
    /// Uptime as a percentage, rounded to 2 decimals.
    pub uptime: f64,
    pub response_time: f64,
    /// Harmony index as a percentage, rounded to 2 decimals.
    pub harmony_index: f64,
    pub incident_free_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridHealth {
    /// 0-100, rounded to 1 decimal.
    pub health_score: f64,
    pub status: HealthStatus,
    pub metrics_breakdown: MetricsBreakdown,
    pub advisories: Vec<String>,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

pub fn compute_grid_health(metrics: &SystemMetrics, agents: &AgentStatus) -> GridHealth {
    let uptime_score = metrics.uptime * 40.0;
    let response_score = (30.0 - metrics.response_time / 10.0).max(0.0);
    let harmony_score = agents.harmony_index * 30.0;
    let total = (uptime_score + response_score + harmony_score).min(100.0);

    let status = if total > 85.0 {
        HealthStatus::Optimal
    } else if total > 65.0 {
        HealthStatus::Stable
    } else {
        HealthStatus::Degraded
    };

    let advisories = if total > 65.0 {
        vec![
            "Maintain proactive monitoring cadence".to_string(),
            "Continue harmony checks every 6 hours".to_string(),
        ]
    } else {
        vec![
            "Increase redundancy on critical nodes".to_string(),
            "Deploy additional diagnostics via Executor".to_string(),
        ]
    };

    GridHealth {
        health_score: round1(total),
        status,
        metrics_breakdown: MetricsBreakdown {
            uptime: round2(metrics.uptime * 100.0),
            response_time: metrics.response_time,
            harmony_index: round2(agents.harmony_index * 100.0),
            incident_free_hours: metrics.incident_free_hours,
        },
        advisories,
    }
}

// ---------------------------------------------------------------------------
// Script adapter
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HealthInputs {
    #[serde(default = "crate::fixtures::sample_system_metrics")]
    system_metrics: SystemMetrics,
    #[serde(default = "crate::fixtures::sample_agent_status")]
    agent_status: AgentStatus,
}

pub(crate) fn logic(bag: &InputBag) -> Result<Value> {
    let inputs: HealthInputs = parse_inputs(bag)?;
    Ok(serde_json::to_value(compute_grid_health(
        &inputs.system_metrics,
        &inputs.agent_status,
    ))?)
}

pub(crate) fn narrative(result: &Value) -> String {
    let score = result.get("healthScore").and_then(Value::as_f64);
    let status = result.get("status").and_then(Value::as_str);
    match (score, status) {
        (Some(score), Some(status)) => {
            format!("Grid vitality at {score}%. Status: {status}. Keep the resonance steady.")
        }
        _ => "Grid health pulse captured.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{sample_agent_status, sample_system_metrics};

    #[test]
    fn sample_grid_is_optimal() {
        // 0.998*40 + (30 - 11.8) + 0.984*30 = 39.92 + 18.2 + 29.52 = 87.64
        let health = compute_grid_health(&sample_system_metrics(), &sample_agent_status());
        assert_eq!(health.health_score, 87.6);
        assert_eq!(health.status, HealthStatus::Optimal);
        assert_eq!(health.metrics_breakdown.uptime, 99.8);
        assert_eq!(health.metrics_breakdown.harmony_index, 98.4);
        assert_eq!(health.metrics_breakdown.incident_free_hours, 46);
    }

    #[test]
    fn slow_responses_cannot_go_negative() {
        let metrics = SystemMetrics {
            uptime: 0.5,
            response_time: 400.0,
            incident_free_hours: 0,
        };
        let agents = AgentStatus {
            active_agents: 2,
            total_agents: 12,
            harmony_index: 0.2,
            degraded_agents: vec!["axiom".to_string()],
        };
        // 20 + 0 + 6 = 26
        let health = compute_grid_health(&metrics, &agents);
        assert_eq!(health.health_score, 26.0);
        assert_eq!(health.status, HealthStatus::Degraded);
        assert!(health.advisories[0].contains("redundancy"));
    }

    #[test]
    fn total_is_clamped_to_100() {
        let metrics = SystemMetrics {
            uptime: 2.0,
            response_time: 0.0,
            incident_free_hours: 1000,
        };
        let agents = AgentStatus {
            active_agents: 12,
            total_agents: 12,
            harmony_index: 1.0,
            degraded_agents: vec![],
        };
        let health = compute_grid_health(&metrics, &agents);
        assert_eq!(health.health_score, 100.0);
    }

    #[test]
    fn stable_band_gets_steady_state_advisories() {
        let metrics = SystemMetrics {
            uptime: 0.9,
            response_time: 150.0,
            incident_free_hours: 12,
        };
        let agents = AgentStatus {
            active_agents: 10,
            total_agents: 12,
            harmony_index: 0.8,
            degraded_agents: vec![],
        };
        // 36 + 15 + 24 = 75
        let health = compute_grid_health(&metrics, &agents);
        assert_eq!(health.health_score, 75.0);
        assert_eq!(health.status, HealthStatus::Stable);
        assert!(health.advisories[0].contains("monitoring cadence"));
    }

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_string(&HealthStatus::Optimal).unwrap();
        assert_eq!(json, "\"OPTIMAL\"");
    }

    #[test]
    fn narrative_reports_score_and_status() {
        let value = logic(&InputBag::new()).unwrap();
        let line = narrative(&value);
        assert!(line.contains("87.6"));
        assert!(line.contains("OPTIMAL"));
    }
}
