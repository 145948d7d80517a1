//! Forwarder efficiency ranking.
//!
//! The composite score blends reliability (dominant weight), transport
//! versatility, and two penalty terms normalized against reference scales
//! (1500 cost units, 120 delivery hours) so no raw magnitude dominates:
//!
//! `score = onTimeRate*70 + distinctModes*10 - (avgCost/1500)*10 - (avgTime/120)*10`

use crate::error::Result;
use crate::script::{parse_inputs, InputBag};
use crate::types::{round2, ShipmentRecord, TransportType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwarderScore {
    pub name: String,
    pub avg_cost: f64,
    pub avg_time: f64,
    pub on_time_rate: f64,
    pub shipments: usize,
    pub transport_variety: usize,
    /// Composite score, rounded to 2 decimals.
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwarderRanking {
    /// Highest-scoring forwarder; absent when no shipments were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<ForwarderScore>,
    pub all: Vec<ForwarderScore>,
    pub generated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

struct Tally {
    name: String,
    shipments: usize,
    total_cost: f64,
    total_time: f64,
    on_time: usize,
    modes: BTreeSet<TransportType>,
}

/// Group shipments by forwarder, score each group, and rank descending.
/// Pure: identical input always yields identical scores.
pub fn rank_forwarders(shipments: &[ShipmentRecord]) -> ForwarderRanking {
    // Vec keyed by first-seen order so equal scores rank in input order.
    let mut tallies: Vec<Tally> = Vec::new();
    for record in shipments {
        let i = match tallies.iter().position(|t| t.name == record.forwarder) {
            Some(i) => i,
            None => {
                tallies.push(Tally {
                    name: record.forwarder.clone(),
                    shipments: 0,
                    total_cost: 0.0,
                    total_time: 0.0,
                    on_time: 0,
                    modes: BTreeSet::new(),
                });
                tallies.len() - 1
            }
        };
        let tally = &mut tallies[i];
        tally.shipments += 1;
        tally.total_cost += record.cost;
        tally.total_time += record.delivery_time;
        tally.modes.insert(record.transport_type);
        if record.on_time {
            tally.on_time += 1;
        }
    }

    let mut ranked: Vec<ForwarderScore> = tallies
        .into_iter()
        .map(|tally| {
            let count = tally.shipments as f64;
            let avg_cost = tally.total_cost / count;
            let avg_time = tally.total_time / count;
            let on_time_rate = tally.on_time as f64 / count;
            let score = on_time_rate * 70.0 + tally.modes.len() as f64 * 10.0
                - (avg_cost / 1500.0) * 10.0
                - (avg_time / 120.0) * 10.0;
            ForwarderScore {
                name: tally.name,
                avg_cost,
                avg_time,
                on_time_rate,
                shipments: tally.shipments,
                transport_variety: tally.modes.len(),
                score: round2(score),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    ForwarderRanking {
        top: ranked.first().cloned(),
        all: ranked,
        generated_at: Utc::now(),
    }
}

// ---------------------------------------------------------------------------
// Script adapter
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RankingInputs {
    #[serde(default = "crate::fixtures::sample_shipments")]
    shipment_data: Vec<ShipmentRecord>,
}

pub(crate) fn logic(bag: &InputBag) -> Result<Value> {
    let inputs: RankingInputs = parse_inputs(bag)?;
    Ok(serde_json::to_value(rank_forwarders(&inputs.shipment_data))?)
}

pub(crate) fn narrative(result: &Value) -> String {
    match result.pointer("/top/name").and_then(Value::as_str) {
        Some(name) => format!(
            "After scouring every manifest, {name} leads the pack - part cheetah, part calculator."
        ),
        None => "Forwarder ranking complete. Top performer stands ready.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_shipments;

    #[test]
    fn ranks_sample_data_deterministically() {
        let ranking = rank_forwarders(&sample_shipments());
        let top = ranking.top.unwrap();
        // Cheetah Logistics: on-time 1.0, one mode, avg cost 1365, avg time 48.5
        // => 70 + 10 - 9.1 - 4.0417 = 66.86
        assert_eq!(top.name, "Cheetah Logistics");
        assert_eq!(top.score, 66.86);
        assert_eq!(top.shipments, 2);
        assert_eq!(top.transport_variety, 1);
        assert_eq!(ranking.all.len(), 4);
    }

    #[test]
    fn top_score_is_the_maximum() {
        let ranking = rank_forwarders(&sample_shipments());
        let top_score = ranking.top.as_ref().unwrap().score;
        assert!(ranking.all.iter().all(|f| f.score <= top_score));
        assert_eq!(ranking.all[0].score, top_score);
    }

    #[test]
    fn ranking_is_idempotent() {
        let shipments = sample_shipments();
        let first = rank_forwarders(&shipments);
        let second = rank_forwarders(&shipments);
        assert_eq!(first.all, second.all);
    }

    #[test]
    fn empty_input_yields_no_top_entry() {
        let ranking = rank_forwarders(&[]);
        assert!(ranking.top.is_none());
        assert!(ranking.all.is_empty());
    }

    #[test]
    fn logic_falls_back_to_canned_shipments() {
        let value = logic(&InputBag::new()).unwrap();
        assert_eq!(
            value.pointer("/top/name").and_then(Value::as_str),
            Some("Cheetah Logistics")
        );
    }

    #[test]
    fn narrative_names_the_leader() {
        let value = logic(&InputBag::new()).unwrap();
        assert!(narrative(&value).contains("Cheetah Logistics"));
        assert_eq!(
            narrative(&serde_json::json!({"all": []})),
            "Forwarder ranking complete. Top performer stands ready."
        );
    }
}
