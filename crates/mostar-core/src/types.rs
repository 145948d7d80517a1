use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// TransportType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Air,
    Road,
    Sea,
    Rail,
}

impl TransportType {
    /// Sea and road shipments signal that a cheaper, slower routing exists
    /// on the lane.
    pub fn is_slower_alternative(self) -> bool {
        matches!(self, TransportType::Sea | TransportType::Road)
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn weight(self) -> u32 {
        match self {
            Severity::High => 3,
            Severity::Medium => 2,
            Severity::Low => 1,
        }
    }
}

// ---------------------------------------------------------------------------
// Domain fixtures
// ---------------------------------------------------------------------------

/// One freight movement as reported by a forwarder. Field names stay
/// camelCase on the wire to match the dashboard data shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    pub forwarder: String,
    pub cost: f64,
    /// Hours from pickup to delivery.
    pub delivery_time: f64,
    pub on_time: bool,
    pub origin: String,
    pub destination: String,
    pub transport_type: TransportType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    /// Fraction of the reporting window the grid was up (0.0 - 1.0).
    pub uptime: f64,
    /// Mean response time in milliseconds.
    pub response_time: f64,
    pub incident_free_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatus {
    pub active_agents: u32,
    pub total_agents: u32,
    /// Fraction of agents in consensus (0.0 - 1.0).
    pub harmony_index: f64,
    #[serde(default)]
    pub degraded_agents: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityLog {
    pub severity: Severity,
    pub unknown_source: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPatterns {
    pub normal: u32,
    pub anomalous: u32,
}

// ---------------------------------------------------------------------------
// Rounding helpers
// ---------------------------------------------------------------------------

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_weights() {
        assert_eq!(Severity::High.weight(), 3);
        assert_eq!(Severity::Medium.weight(), 2);
        assert_eq!(Severity::Low.weight(), 1);
    }

    #[test]
    fn transport_type_wire_names_are_lowercase() {
        let json = serde_json::to_string(&TransportType::Sea).unwrap();
        assert_eq!(json, "\"sea\"");
        let parsed: TransportType = serde_json::from_str("\"road\"").unwrap();
        assert_eq!(parsed, TransportType::Road);
    }

    #[test]
    fn air_is_not_a_slower_alternative() {
        assert!(!TransportType::Air.is_slower_alternative());
        assert!(TransportType::Sea.is_slower_alternative());
        assert!(TransportType::Road.is_slower_alternative());
    }

    #[test]
    fn shipment_record_uses_camel_case_keys() {
        let record = ShipmentRecord {
            forwarder: "Cheetah Logistics".to_string(),
            cost: 1320.0,
            delivery_time: 46.0,
            on_time: true,
            origin: "Nairobi".to_string(),
            destination: "Kampala".to_string(),
            transport_type: TransportType::Air,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("deliveryTime").is_some());
        assert!(json.get("onTime").is_some());
        assert!(json.get("transportType").is_some());
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(66.85833333), 66.86);
        assert_eq!(round1(87.64), 87.6);
        assert_eq!(round2(-6.46666), -6.47);
    }
}
