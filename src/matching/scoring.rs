use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::{MatchingConfig, SummaryThresholds};
use super::domain::{CapabilityProfile, NeedVector, ServiceType};
use super::normalize::round_to;

/// Threshold below which a need is treated as absent.
pub const NEGLIGIBLE_NEED: f64 = 0.1;

/// Axis along which a facility is compared against a person's needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    Medical,
    #[serde(rename = "Life Care")]
    LifeCare,
    Spiritual,
    Traffic,
    Price,
}

impl Dimension {
    pub const fn label(self) -> &'static str {
        match self {
            Dimension::Medical => "Medical",
            Dimension::LifeCare => "Life Care",
            Dimension::Spiritual => "Spiritual",
            Dimension::Traffic => "Traffic",
            Dimension::Price => "Price",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Satisfied,
    Insufficient,
    #[serde(rename = "Over Budget")]
    OverBudget,
}

impl MatchStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MatchStatus::Satisfied => "Satisfied",
            MatchStatus::Insufficient => "Insufficient",
            MatchStatus::OverBudget => "Over Budget",
        }
    }

    fn for_supply(supply: f64, need: f64) -> Self {
        if supply >= need {
            MatchStatus::Satisfied
        } else {
            MatchStatus::Insufficient
        }
    }
}

/// Per-dimension explanation of how a facility meets one need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionMatch {
    pub dimension: Dimension,
    pub score: f64,
    pub need_value: f64,
    pub supply_value: f64,
    pub status: MatchStatus,
    pub comment: String,
}

/// Scored candidate that passed the service-type filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub profile: CapabilityProfile,
    /// Weighted total on a 0-100 scale, rounded to one decimal.
    pub total_match_score: f64,
    /// Medical, Life Care, Spiritual, Traffic, Price, in that order.
    pub dimension_details: Vec<DimensionMatch>,
    pub summary: String,
}

/// Fraction of `need` covered by `supply`, treating needs at or below
/// [`NEGLIGIBLE_NEED`] as fully covered. Oversupply never scores above 1.0.
pub fn dim_score(supply: f64, need: f64) -> f64 {
    dimension_score(supply, need, NEGLIGIBLE_NEED)
}

pub fn dimension_score(supply: f64, need: f64, negligible_need: f64) -> f64 {
    if need <= negligible_need {
        return 1.0;
    }
    supply.min(need) / need
}

/// 1.0 within budget, otherwise the budget's share of the price.
pub fn price_score(price: u32, budget: u32) -> f64 {
    if price <= budget {
        1.0
    } else {
        f64::from(budget) / f64::from(price)
    }
}

pub fn summarize(total: f64, thresholds: &SummaryThresholds) -> String {
    let percent = (total * 100.0).floor() as i64;
    let verdict = if total > thresholds.excellent {
        "Excellent match!"
    } else if total > thresholds.good {
        "Good match."
    } else {
        "Some needs may not be fully met."
    };
    format!("Matching Score: {percent}%. {verdict}")
}

/// Scores one candidate, or returns `None` when it does not offer `desired`.
pub(crate) fn score_candidate(
    need: &NeedVector,
    profile: &CapabilityProfile,
    desired: &ServiceType,
    config: &MatchingConfig,
) -> Option<MatchResult> {
    if !profile.offers(desired) {
        debug!(
            facility = profile.name(),
            service_type = desired.as_str(),
            "facility excluded: service type not offered"
        );
        return None;
    }

    let threshold = config.negligible_need;
    let weights = &config.weights;

    let pairs = [
        (Dimension::Medical, need.medical, profile.medical_score),
        (Dimension::LifeCare, need.life, profile.life_score),
        (Dimension::Spiritual, need.spiritual, profile.spiritual_score),
        (Dimension::Traffic, need.traffic, profile.traffic_score),
    ];

    let mut dimension_details = Vec::with_capacity(pairs.len() + 1);
    for (dimension, need_value, supply_value) in pairs {
        dimension_details.push(DimensionMatch {
            dimension,
            score: dimension_score(supply_value, need_value, threshold),
            need_value,
            supply_value,
            status: MatchStatus::for_supply(supply_value, need_value),
            comment: format!("Need {need_value:?}, has {supply_value:?}"),
        });
    }

    let price = price_score(profile.price, need.budget);
    dimension_details.push(DimensionMatch {
        dimension: Dimension::Price,
        score: price,
        need_value: f64::from(need.budget),
        supply_value: f64::from(profile.price),
        status: if profile.price <= need.budget {
            MatchStatus::Satisfied
        } else {
            MatchStatus::OverBudget
        },
        comment: format!("Budget {}, Price {}", need.budget, profile.price),
    });

    let total = dimension_details[0].score * weights.medical
        + dimension_details[1].score * weights.life
        + dimension_details[2].score * weights.spiritual
        + dimension_details[3].score * weights.traffic
        + price * weights.price;

    debug!(facility = profile.name(), total, "facility scored");

    Some(MatchResult {
        profile: profile.clone(),
        total_match_score: round_to(total * 100.0, 1),
        dimension_details,
        summary: summarize(total, &config.summary),
    })
}
