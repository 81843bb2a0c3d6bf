//! Care-needs matching: questionnaire vectorisation, per-dimension scoring, and ranking.

mod capability;
pub mod catalog;
mod config;
pub mod domain;
mod need;
mod normalize;
mod ranking;
mod scoring;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, CatalogFormat, CatalogImporter};
pub use config::{
    DimensionMaxima, DimensionWeights, DistanceTiers, MatchingConfig, MatchingConfigError,
    ScoreScale, SummaryThresholds,
};
pub use domain::{
    ActivityFrequency, CapabilityProfile, CareGrade, CognitiveStatus, FacilityIdentity,
    FacilityQuestionnaire, LocationType, LonelinessLevel, Mobility, NeedVector, ParseFieldError,
    PersonQuestionnaire, ServiceType, ServiceTypes,
};
pub use normalize::normalize;
pub use ranking::rank;
pub use scoring::{
    dim_score, dimension_score, price_score, summarize, Dimension, DimensionMatch, MatchResult,
    MatchStatus, NEGLIGIBLE_NEED,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

/// Stateless matcher applying one [`MatchingConfig`] to questionnaires and catalogs.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchingConfig,
}

impl MatchEngine {
    /// Wraps `config` as given. Callers holding an unchecked config (hand-built or
    /// deserialized) should go through [`MatchEngine::try_new`]; a `top_k` of 0 here
    /// yields empty shortlists.
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn try_new(config: MatchingConfig) -> Result<Self, MatchingConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    pub fn build_need_vector(&self, questionnaire: &PersonQuestionnaire) -> NeedVector {
        need::build_need_vector(questionnaire, &self.config)
    }

    pub fn build_capability_profile(
        &self,
        questionnaire: &FacilityQuestionnaire,
    ) -> CapabilityProfile {
        capability::build_capability_profile(questionnaire, &self.config)
    }

    /// Scores a single facility. `None` means the facility does not offer `desired`.
    pub fn score(
        &self,
        need: &NeedVector,
        profile: &CapabilityProfile,
        desired: &ServiceType,
    ) -> Option<MatchResult> {
        scoring::score_candidate(need, profile, desired, &self.config)
    }

    /// Scores every facility offering `desired` and returns the best `top_k`.
    pub fn match_and_rank(
        &self,
        need: &NeedVector,
        catalog: &[CapabilityProfile],
        desired: &ServiceType,
    ) -> Vec<MatchResult> {
        #[cfg(feature = "parallel")]
        let candidates = catalog.par_iter();
        #[cfg(not(feature = "parallel"))]
        let candidates = catalog.iter();

        let eligible: Vec<MatchResult> = candidates
            .filter_map(|profile| self.score(need, profile, desired))
            .collect();
        let eligible_count = eligible.len();

        let ranked = rank(eligible, self.config.top_k);
        info!(
            catalog = catalog.len(),
            eligible = eligible_count,
            returned = ranked.len(),
            service_type = desired.as_str(),
            "facilities ranked"
        );
        ranked
    }

    /// Ranks the catalog for the service type recorded on the need vector.
    pub fn shortlist(&self, need: &NeedVector, catalog: &[CapabilityProfile]) -> Vec<MatchResult> {
        self.match_and_rank(need, catalog, &need.service_type)
    }
}

pub fn build_need_vector(questionnaire: &PersonQuestionnaire) -> NeedVector {
    MatchEngine::default().build_need_vector(questionnaire)
}

pub fn build_capability_profile(questionnaire: &FacilityQuestionnaire) -> CapabilityProfile {
    MatchEngine::default().build_capability_profile(questionnaire)
}

pub fn match_and_rank(
    need: &NeedVector,
    catalog: &[CapabilityProfile],
    desired: &ServiceType,
) -> Vec<MatchResult> {
    MatchEngine::default().match_and_rank(need, catalog, desired)
}
