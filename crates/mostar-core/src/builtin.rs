//! The bundled MoScript catalog wired at the composition root.

use crate::registry::MoScriptRegistry;
use crate::script::MoScript;
use crate::{forwarder, health, routes, threat};

/// The four grid diagnostics shipped with the console.
pub fn builtin_scripts() -> Vec<MoScript> {
    vec![
        MoScript {
            id: "mo-fwd-eff-001",
            name: "Forwarder Efficiency Ranker",
            trigger: "onCalculateResults",
            inputs: &["shipmentData"],
            logic: forwarder::logic,
            narrative: Some(forwarder::narrative),
            sass: true,
        },
        MoScript {
            id: "mo-cost-saver-007",
            name: "Cost Optimization Oracle",
            trigger: "onMonthlyTrendUpdate",
            inputs: &["shipmentData"],
            logic: routes::logic,
            narrative: Some(routes::narrative),
            sass: true,
        },
        MoScript {
            id: "mo-health-check-002",
            name: "Grid Health Diagnostic",
            trigger: "onSystemCheck",
            inputs: &["systemMetrics", "agentStatus"],
            logic: health::logic,
            narrative: Some(health::narrative),
            sass: false,
        },
        MoScript {
            id: "mo-threat-assess-003",
            name: "Threat Level Assessment",
            trigger: "onSecurityScan",
            inputs: &["networkLogs", "accessPatterns"],
            logic: threat::logic,
            narrative: Some(threat::narrative),
            sass: true,
        },
    ]
}

impl MoScriptRegistry {
    /// A registry preloaded with the bundled diagnostics.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for script in builtin_scripts() {
            registry.register(script);
        }
        registry
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
