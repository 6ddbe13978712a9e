//! Legislator/award jurisdiction join.
//!
//! Left outer join on exact (state, district) string equality: every
//! non-excluded legislator appears in the output at least once, matched
//! awards fan out to one row each, and awards with no resolvable
//! jurisdiction key are set aside and counted rather than joined. The count
//! is small in practice (a known ~1% of the reference dataset) and is
//! reported, not raised.

use crate::district::normalize_award_district;
use crate::fetch::AwardRecord;
use crate::roster::Legislator;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Award after jurisdiction normalization.
#[derive(Debug, Clone)]
pub struct NormalizedAward {
    pub state: String,
    pub district: String,
    pub total_cost: Option<f64>,
    pub extra: Map<String, Value>,
}

/// One output row: legislator fields plus the matched award fields, empty
/// when no award matched. The award-side jurisdiction columns are gone by
/// this point; after a match they are guaranteed equal to the legislator's.
#[derive(Debug, Clone)]
pub struct JoinedRow {
    pub legislator_name: String,
    pub state: String,
    pub district: String,
    pub total_cost: Option<f64>,
    pub award_fields: Map<String, Value>,
}

/// Join result plus the count of awards dropped for lacking a resolvable
/// jurisdiction key.
#[derive(Debug)]
pub struct JoinOutcome {
    pub rows: Vec<JoinedRow>,
    pub dropped_awards: usize,
}

/// Normalize the award side of the join key. Awards with no usable
/// (state, district) pair are counted, not kept.
pub fn normalize_awards(
    awards: Vec<AwardRecord>,
    at_large_states: &[String],
) -> (Vec<NormalizedAward>, usize) {
    let mut normalized = Vec::with_capacity(awards.len());
    let mut dropped = 0;
    for award in awards {
        let Some(state) = award.org_state.filter(|s| !s.is_empty()) else {
            dropped += 1;
            continue;
        };
        let Some(district) =
            normalize_award_district(at_large_states, &state, award.cong_district.as_ref())
        else {
            dropped += 1;
            continue;
        };
        normalized.push(NormalizedAward {
            state,
            district,
            total_cost: award.total_cost,
            extra: award.extra,
        });
    }
    (normalized, dropped)
}

/// Left outer join of legislators against awards on (state, district).
pub fn join_awards(
    legislators: &[Legislator],
    awards: Vec<AwardRecord>,
    at_large_states: &[String],
    excluded: &[String],
) -> JoinOutcome {
    let (normalized, dropped_awards) = normalize_awards(awards, at_large_states);

    // Index awards by jurisdiction key, preserving fetch order within a key.
    let mut by_key: HashMap<(String, String), Vec<NormalizedAward>> = HashMap::new();
    for award in normalized {
        by_key
            .entry((award.state.clone(), award.district.clone()))
            .or_default()
            .push(award);
    }

    let mut rows = Vec::new();
    for legislator in legislators {
        if excluded.iter().any(|name| name == &legislator.legislator_name) {
            continue;
        }
        let district = legislator.district();
        let key = (legislator.state.clone(), district.clone());
        match by_key.get(&key) {
            Some(matches) => {
                for award in matches {
                    rows.push(JoinedRow {
                        legislator_name: legislator.legislator_name.clone(),
                        state: legislator.state.clone(),
                        district: district.clone(),
                        total_cost: award.total_cost,
                        award_fields: award.extra.clone(),
                    });
                }
            }
            None => rows.push(JoinedRow {
                legislator_name: legislator.legislator_name.clone(),
                state: legislator.state.clone(),
                district,
                total_cost: None,
                award_fields: Map::new(),
            }),
        }
    }

    // State asc, district asc, then cost desc within the group. Rows with no
    // award sort last in their group; ties keep input order (stable sort).
    rows.sort_by(|a, b| {
        (a.state.as_str(), a.district.as_str())
            .cmp(&(b.state.as_str(), b.district.as_str()))
            .then_with(|| compare_cost_desc(a.total_cost, b.total_cost))
    });

    JoinOutcome {
        rows,
        dropped_awards,
    }
}

fn compare_cost_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
