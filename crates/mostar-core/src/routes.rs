//! Route savings detection.
//!
//! Lanes where a slower sea or road option already runs get an 18% savings
//! estimate (the cheaper routing is proven on the lane); lanes served only
//! by premium modes get a conservative 7%.

use crate::error::Result;
use crate::script::{parse_inputs, InputBag};
use crate::types::{round1, round2, ShipmentRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FastestOption {
    pub forwarder: String,
    pub delivery_time: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Savings {
    /// Estimated amount, rounded to 2 decimals.
    pub amount: f64,
    /// Discount rate applied, as a percentage (18.0 or 7.0).
    pub percentage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOpportunity {
    /// `"{origin} -> {destination}"`.
    pub route: String,
    pub current_avg_cost: f64,
    pub recommended_mode: String,
    pub fastest_option: FastestOption,
    pub potential_savings: Savings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSavings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_opportunity: Option<RouteOpportunity>,
    pub all_opportunities: Vec<RouteOpportunity>,
    pub generated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

fn savings_for(avg_cost: f64, has_slower_alternative: bool) -> Savings {
    let rate = if has_slower_alternative { 0.18 } else { 0.07 };
    Savings {
        amount: round2(avg_cost * rate),
        percentage: round1(rate * 100.0),
    }
}

/// Group shipments by ordered (origin, destination) pair and rank lanes by
/// estimated savings, largest first.
pub fn detect_savings_routes(shipments: &[ShipmentRecord]) -> RouteSavings {
    let mut lanes: Vec<(String, Vec<&ShipmentRecord>)> = Vec::new();
    for record in shipments {
        let key = format!("{} -> {}", record.origin, record.destination);
        match lanes.iter_mut().find(|(route, _)| *route == key) {
            Some((_, records)) => records.push(record),
            None => lanes.push((key, vec![record])),
        }
    }

    let mut opportunities: Vec<RouteOpportunity> = lanes
        .into_iter()
        .map(|(route, records)| {
            let avg_cost =
                records.iter().map(|r| r.cost).sum::<f64>() / records.len() as f64;
            let has_slower = records
                .iter()
                .any(|r| r.transport_type.is_slower_alternative());
            // First minimum wins on equal delivery times. Lanes always hold
            // at least the record that created them.
            let mut fastest = records[0];
            for record in &records[1..] {
                if record.delivery_time < fastest.delivery_time {
                    fastest = *record;
                }
            }

            RouteOpportunity {
                route,
                current_avg_cost: round2(avg_cost),
                recommended_mode: if has_slower {
                    "sea-road hybrid".to_string()
                } else {
                    "air priority".to_string()
                },
                fastest_option: FastestOption {
                    forwarder: fastest.forwarder.clone(),
                    delivery_time: fastest.delivery_time,
                    cost: fastest.cost,
                },
                potential_savings: savings_for(avg_cost, has_slower),
            }
        })
        .collect();

    opportunities.sort_by(|a, b| {
        b.potential_savings
            .amount
            .partial_cmp(&a.potential_savings.amount)
            .unwrap_or(Ordering::Equal)
    });

    RouteSavings {
        top_opportunity: opportunities.first().cloned(),
        all_opportunities: opportunities,
        generated_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Script adapter
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavingsInputs {
    #[serde(default = "crate::fixtures::sample_shipments")]
    shipment_data: Vec<ShipmentRecord>,
}

pub(crate) fn logic(bag: &InputBag) -> Result<Value> {
    let inputs: SavingsInputs = parse_inputs(bag)?;
    Ok(serde_json::to_value(detect_savings_routes(
        &inputs.shipment_data,
    ))?)
}

pub(crate) fn narrative(result: &Value) -> String {
    let Some(top) = result.get("topOpportunity") else {
        return "Savings radar pinged - review the console for details.".to_string();
    };
    let amount = top
        .pointer("/potentialSavings/amount")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let percentage = top
        .pointer("/potentialSavings/percentage")
        .and_then(Value::as_f64)
        .unwrap_or(0.0);
    let route = top
        .get("route")
        .and_then(Value::as_str)
        .unwrap_or("priority corridor");
    format!("Ka-ching. {percentage}% unlock on {route} (about {amount} per shipment). That margin covers snacks and starships.")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_shipments;
    use crate::types::TransportType;

    fn record(
        forwarder: &str,
        cost: f64,
        delivery_time: f64,
        transport_type: TransportType,
    ) -> ShipmentRecord {
        ShipmentRecord {
            forwarder: forwarder.to_string(),
            cost,
            delivery_time,
            on_time: true,
            origin: "Lagos".to_string(),
            destination: "Accra".to_string(),
            transport_type,
        }
    }

    #[test]
    fn air_only_lane_gets_the_conservative_rate() {
        let savings = detect_savings_routes(&[
            record("Solo Freight", 1000.0, 50.0, TransportType::Air),
            record("Second Air", 1200.0, 55.0, TransportType::Air),
        ]);
        let top = savings.top_opportunity.unwrap();
        assert_eq!(top.potential_savings.percentage, 7.0);
        assert_eq!(top.potential_savings.amount, 77.0);
        assert_eq!(top.recommended_mode, "air priority");
    }

    #[test]
    fn slower_alternative_unlocks_the_full_rate() {
        let savings = detect_savings_routes(&[
            record("Solo Freight", 1000.0, 50.0, TransportType::Air),
            record("Slow Barge", 600.0, 200.0, TransportType::Sea),
        ]);
        let top = savings.top_opportunity.unwrap();
        assert_eq!(top.potential_savings.percentage, 18.0);
        assert_eq!(top.potential_savings.amount, 144.0);
        assert_eq!(top.recommended_mode, "sea-road hybrid");
    }

    #[test]
    fn fastest_option_is_the_lowest_delivery_time() {
        let savings = detect_savings_routes(&[
            record("Solo Freight", 1000.0, 50.0, TransportType::Air),
            record("Slow Barge", 600.0, 200.0, TransportType::Sea),
        ]);
        let top = savings.top_opportunity.unwrap();
        assert_eq!(top.fastest_option.forwarder, "Solo Freight");
        assert_eq!(top.fastest_option.delivery_time, 50.0);
    }

    #[test]
    fn opportunities_are_ranked_by_savings_amount() {
        let savings = detect_savings_routes(&sample_shipments());
        let amounts: Vec<f64> = savings
            .all_opportunities
            .iter()
            .map(|o| o.potential_savings.amount)
            .collect();
        for pair in amounts.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert_eq!(
            savings.top_opportunity.unwrap().potential_savings.amount,
            amounts[0]
        );
    }

    #[test]
    fn sample_data_top_lane_is_nairobi_kigali() {
        // Nairobi -> Kigali: avg 1260, road present => 226.80 at 18%,
        // just ahead of Nairobi -> Kampala at 225.00.
        let savings = detect_savings_routes(&sample_shipments());
        let top = savings.top_opportunity.unwrap();
        assert_eq!(top.route, "Nairobi -> Kigali");
        assert_eq!(top.current_avg_cost, 1260.0);
        assert_eq!(top.potential_savings.amount, 226.8);
        assert_eq!(top.potential_savings.percentage, 18.0);
    }

    #[test]
    fn empty_input_yields_no_opportunities() {
        let savings = detect_savings_routes(&[]);
        assert!(savings.top_opportunity.is_none());
        assert!(savings.all_opportunities.is_empty());
    }

    #[test]
    fn narrative_reports_rate_and_route() {
        let value = logic(&InputBag::new()).unwrap();
        let line = narrative(&value);
        assert!(line.contains("18%"));
        assert!(line.contains("Nairobi -> Kigali"));
    }
}
