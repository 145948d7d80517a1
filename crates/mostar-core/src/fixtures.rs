use crate::error::{MoScriptError, Result};
use crate::registry::MoScriptRegistry;
use crate::script::InputBag;
use crate::types::{
    AccessPatterns, AgentStatus, SecurityLog, Severity, ShipmentRecord, SystemMetrics,
    TransportType,
};

// ---------------------------------------------------------------------------
// Canned sample data
// ---------------------------------------------------------------------------

fn shipment(
    forwarder: &str,
    cost: f64,
    delivery_time: f64,
    on_time: bool,
    origin: &str,
    destination: &str,
    transport_type: TransportType,
) -> ShipmentRecord {
    ShipmentRecord {
        forwarder: forwarder.to_string(),
        cost,
        delivery_time,
        on_time,
        origin: origin.to_string(),
        destination: destination.to_string(),
        transport_type,
    }
}

pub fn sample_shipments() -> Vec<ShipmentRecord> {
    vec![
        shipment("Cheetah Logistics", 1320.0, 46.0, true, "Nairobi", "Kampala", TransportType::Air),
        shipment("Savannah Express", 1180.0, 64.0, true, "Nairobi", "Kampala", TransportType::Road),
        shipment("Maritime Africa", 870.0, 128.0, false, "Mombasa", "Dar es Salaam", TransportType::Sea),
        shipment("Cheetah Logistics", 1410.0, 51.0, true, "Nairobi", "Kigali", TransportType::Air),
        shipment("Savannah Express", 1110.0, 71.0, true, "Nairobi", "Kigali", TransportType::Road),
        shipment("SkyBridge East", 1485.0, 49.0, true, "Addis Ababa", "Lusaka", TransportType::Air),
    ]
}

pub fn sample_system_metrics() -> SystemMetrics {
    SystemMetrics {
        uptime: 0.998,
        response_time: 118.0,
        incident_free_hours: 46,
    }
}

pub fn sample_agent_status() -> AgentStatus {
    AgentStatus {
        active_agents: 12,
        total_agents: 12,
        harmony_index: 0.984,
        degraded_agents: vec![],
    }
}

pub fn sample_security_logs() -> Vec<SecurityLog> {
    vec![
        SecurityLog {
            severity: Severity::Low,
            unknown_source: false,
            description: "Routine credential rotation completed".to_string(),
        },
        SecurityLog {
            severity: Severity::Medium,
            unknown_source: false,
            description: "Firewall adaptive rule update propagated".to_string(),
        },
        SecurityLog {
            severity: Severity::High,
            unknown_source: true,
            description: "Unclassified packet pinged peripheral node".to_string(),
        },
    ]
}

pub fn sample_access_patterns() -> AccessPatterns {
    AccessPatterns {
        normal: 96,
        anomalous: 4,
    }
}

// ---------------------------------------------------------------------------
// Input gathering
// ---------------------------------------------------------------------------

/// Build an input bag for a registered script from the canned fixtures: one
/// entry per declared input key. Keys with no known fixture are skipped;
/// an unknown script id is an error.
pub fn gather_inputs(registry: &MoScriptRegistry, id: &str) -> Result<InputBag> {
    let script = registry
        .get(id)
        .ok_or_else(|| MoScriptError::NotRegistered(id.to_string()))?;

    let mut bag = InputBag::new();
    for &key in script.inputs {
        let value = match key {
            "shipmentData" => serde_json::to_value(sample_shipments())?,
            "systemMetrics" => serde_json::to_value(sample_system_metrics())?,
            "agentStatus" => serde_json::to_value(sample_agent_status())?,
            "networkLogs" => serde_json::to_value(sample_security_logs())?,
            "accessPatterns" => serde_json::to_value(sample_access_patterns())?,
            _ => continue,
        };
        bag.insert(key.to_string(), value);
    }
    Ok(bag)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gather_inputs_supplies_every_declared_key() {
        let registry = MoScriptRegistry::with_builtins();
        for script in registry.list() {
            let bag = gather_inputs(&registry, script.id).unwrap();
            for key in &script.inputs {
                assert!(bag.contains_key(*key), "{} missing {key}", script.id);
            }
        }
    }

    #[test]
    fn gather_inputs_fails_for_unknown_script() {
        let registry = MoScriptRegistry::with_builtins();
        let err = gather_inputs(&registry, "ghost").unwrap_err();
        assert!(matches!(err, MoScriptError::NotRegistered(_)));
    }

    #[test]
    fn sample_shipments_cover_four_routes() {
        let shipments = sample_shipments();
        assert_eq!(shipments.len(), 6);
        let routes: std::collections::BTreeSet<(String, String)> = shipments
            .iter()
            .map(|s| (s.origin.clone(), s.destination.clone()))
            .collect();
        assert_eq!(routes.len(), 4);
    }
}
