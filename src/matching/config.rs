use serde::{Deserialize, Serialize};

/// Target range every need and capability dimension is rescaled into.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreScale {
    pub min: f64,
    pub max: f64,
}

/// Raw-score ceiling per dimension; raw scores at or above it map to the top of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionMaxima {
    pub medical: f64,
    pub life: f64,
    pub spiritual: f64,
    pub traffic: f64,
}

/// Aggregation weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    pub medical: f64,
    pub life: f64,
    pub spiritual: f64,
    pub traffic: f64,
    pub price: f64,
}

impl DimensionWeights {
    pub fn sum(&self) -> f64 {
        self.medical + self.life + self.spiritual + self.traffic + self.price
    }

    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("medical", self.medical),
            ("life", self.life),
            ("spiritual", self.spiritual),
            ("traffic", self.traffic),
            ("price", self.price),
        ]
    }
}

/// Family-distance boundaries (km) for the traffic need tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceTiers {
    pub near_km: f64,
    pub mid_km: f64,
}

/// Total-score cut-offs (fractions of 1.0) for the summary wording.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryThresholds {
    pub excellent: f64,
    pub good: f64,
}

/// Tunable constants for the builders, scorer, and ranker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub scale: ScoreScale,
    pub need_maxima: DimensionMaxima,
    pub capability_maxima: DimensionMaxima,
    pub weights: DimensionWeights,
    pub distance_tiers: DistanceTiers,
    pub summary: SummaryThresholds,
    /// Needs at or below this value count as fully satisfied.
    pub negligible_need: f64,
    pub top_k: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            scale: ScoreScale { min: 1.0, max: 5.0 },
            need_maxima: DimensionMaxima {
                medical: 15.0,
                life: 15.0,
                spiritual: 15.0,
                traffic: 10.0,
            },
            capability_maxima: DimensionMaxima {
                medical: 15.0,
                life: 15.0,
                spiritual: 10.0,
                traffic: 10.0,
            },
            weights: DimensionWeights {
                medical: 0.25,
                life: 0.25,
                spiritual: 0.20,
                traffic: 0.15,
                price: 0.15,
            },
            distance_tiers: DistanceTiers {
                near_km: 5.0,
                mid_km: 10.0,
            },
            summary: SummaryThresholds {
                excellent: 0.9,
                good: 0.7,
            },
            negligible_need: 0.1,
            top_k: 3,
        }
    }
}

impl MatchingConfig {
    pub fn validate(&self) -> Result<(), MatchingConfigError> {
        if !(self.scale.min < self.scale.max) {
            return Err(MatchingConfigError::InvalidScale {
                min: self.scale.min,
                max: self.scale.max,
            });
        }

        for (side, maxima) in [
            ("need", &self.need_maxima),
            ("capability", &self.capability_maxima),
        ] {
            for (dimension, value) in [
                ("medical", maxima.medical),
                ("life", maxima.life),
                ("spiritual", maxima.spiritual),
                ("traffic", maxima.traffic),
            ] {
                if !(value > 0.0) {
                    return Err(MatchingConfigError::NonPositiveMaximum {
                        side,
                        dimension,
                        value,
                    });
                }
            }
        }

        for (dimension, weight) in self.weights.named() {
            if !(weight >= 0.0) {
                return Err(MatchingConfigError::NegativeWeight { dimension, weight });
            }
        }

        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(MatchingConfigError::WeightsDoNotSumToOne { sum });
        }

        if !(self.distance_tiers.near_km <= self.distance_tiers.mid_km) {
            return Err(MatchingConfigError::InvalidDistanceTiers {
                near_km: self.distance_tiers.near_km,
                mid_km: self.distance_tiers.mid_km,
            });
        }

        if !(self.summary.excellent >= self.summary.good) {
            return Err(MatchingConfigError::InvertedSummaryThresholds {
                excellent: self.summary.excellent,
                good: self.summary.good,
            });
        }

        if !(self.negligible_need.is_finite() && self.negligible_need >= 0.0) {
            return Err(MatchingConfigError::InvalidNegligibleNeed {
                value: self.negligible_need,
            });
        }

        if self.top_k == 0 {
            return Err(MatchingConfigError::ZeroTopK);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchingConfigError {
    #[error("score scale minimum {min} must be below maximum {max}")]
    InvalidScale { min: f64, max: f64 },
    #[error("{side} maximum for {dimension} must be positive, got {value}")]
    NonPositiveMaximum {
        side: &'static str,
        dimension: &'static str,
        value: f64,
    },
    #[error("weight for {dimension} must not be negative, got {weight}")]
    NegativeWeight { dimension: &'static str, weight: f64 },
    #[error("weights must sum to 1.0, got {sum:.4}")]
    WeightsDoNotSumToOne { sum: f64 },
    #[error("near distance tier {near_km} km exceeds mid tier {mid_km} km")]
    InvalidDistanceTiers { near_km: f64, mid_km: f64 },
    #[error("excellent threshold {excellent} must not be below good threshold {good}")]
    InvertedSummaryThresholds { excellent: f64, good: f64 },
    #[error("negligible need threshold must be a non-negative number, got {value}")]
    InvalidNegligibleNeed { value: f64 },
    #[error("shortlist length must be at least 1")]
    ZeroTopK,
}
