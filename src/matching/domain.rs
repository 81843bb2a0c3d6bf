use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error raised when a questionnaire literal is outside its closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFieldError {
    #[error("unrecognized {field} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("service type tag must not be empty")]
    EmptyServiceType,
}

fn unknown(field: &'static str, expected: &'static str, value: &str) -> ParseFieldError {
    ParseFieldError::UnknownVariant {
        field,
        value: value.to_string(),
        expected,
    }
}

/// Category tag for a kind of care service, e.g. `long_term` or `day_care`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceType(String);

impl ServiceType {
    pub const LONG_TERM: &'static str = "long_term";
    pub const DAY_CARE: &'static str = "day_care";
    pub const SHORT_TERM: &'static str = "short_term";

    pub fn new(tag: &str) -> Result<Self, ParseFieldError> {
        let trimmed = tag.trim();
        if trimmed.is_empty() {
            return Err(ParseFieldError::EmptyServiceType);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn long_term() -> Self {
        Self(Self::LONG_TERM.to_string())
    }

    pub fn day_care() -> Self {
        Self(Self::DAY_CARE.to_string())
    }

    pub fn short_term() -> Self {
        Self(Self::SHORT_TERM.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ServiceType {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}

impl TryFrom<String> for ServiceType {
    type Error = ParseFieldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ServiceType> for String {
    fn from(value: ServiceType) -> Self {
        value.0
    }
}

/// Set of service-type tags offered by a facility. Membership is exact tag equality.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceTypes(BTreeSet<ServiceType>);

impl ServiceTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma separated tag list such as `"long_term, day_care"`.
    /// Blank entries are skipped.
    pub fn parse_list(raw: &str) -> Result<Self, ParseFieldError> {
        raw.split(',')
            .filter(|tag| !tag.trim().is_empty())
            .map(ServiceType::new)
            .collect()
    }

    pub fn contains(&self, tag: &ServiceType) -> bool {
        self.0.contains(tag)
    }

    pub fn insert(&mut self, tag: ServiceType) -> bool {
        self.0.insert(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ServiceType> {
        self.0.iter()
    }
}

impl FromIterator<ServiceType> for ServiceTypes {
    fn from_iter<I: IntoIterator<Item = ServiceType>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ServiceTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ServiceType::as_str)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mobility {
    Independent,
    Assisted,
    Bedridden,
}

impl Mobility {
    pub const fn label(self) -> &'static str {
        match self {
            Mobility::Independent => "independent",
            Mobility::Assisted => "assisted",
            Mobility::Bedridden => "bedridden",
        }
    }
}

impl FromStr for Mobility {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "independent" => Ok(Self::Independent),
            "assisted" => Ok(Self::Assisted),
            "bedridden" => Ok(Self::Bedridden),
            _ => Err(unknown(
                "mobility",
                "independent, assisted, bedridden",
                value,
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveStatus {
    #[serde(rename = "none")]
    Unimpaired,
    Mild,
    Severe,
}

impl CognitiveStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CognitiveStatus::Unimpaired => "none",
            CognitiveStatus::Mild => "mild",
            CognitiveStatus::Severe => "severe",
        }
    }
}

impl FromStr for CognitiveStatus {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::Unimpaired),
            "mild" => Ok(Self::Mild),
            "severe" => Ok(Self::Severe),
            _ => Err(unknown("cognitive status", "none, mild, severe", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LonelinessLevel {
    Low,
    Medium,
    High,
}

impl LonelinessLevel {
    pub const fn label(self) -> &'static str {
        match self {
            LonelinessLevel::Low => "low",
            LonelinessLevel::Medium => "medium",
            LonelinessLevel::High => "high",
        }
    }
}

impl FromStr for LonelinessLevel {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(unknown("loneliness level", "low, medium, high", value)),
        }
    }
}

/// Highest level of personal care a facility is staffed to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareGrade {
    SelfCare,
    SemiCare,
    FullCare,
}

impl CareGrade {
    pub const fn label(self) -> &'static str {
        match self {
            CareGrade::SelfCare => "self_care",
            CareGrade::SemiCare => "semi_care",
            CareGrade::FullCare => "full_care",
        }
    }
}

impl FromStr for CareGrade {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "self_care" => Ok(Self::SelfCare),
            "semi_care" => Ok(Self::SemiCare),
            "full_care" => Ok(Self::FullCare),
            _ => Err(unknown(
                "care grade",
                "self_care, semi_care, full_care",
                value,
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ActivityFrequency {
    pub const fn label(self) -> &'static str {
        match self {
            ActivityFrequency::Daily => "daily",
            ActivityFrequency::Weekly => "weekly",
            ActivityFrequency::Monthly => "monthly",
        }
    }
}

impl FromStr for ActivityFrequency {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            _ => Err(unknown("activity frequency", "daily, weekly, monthly", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    Center,
    Suburb,
}

impl LocationType {
    pub const fn label(self) -> &'static str {
        match self {
            LocationType::Center => "center",
            LocationType::Suburb => "suburb",
        }
    }
}

impl FromStr for LocationType {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "center" => Ok(Self::Center),
            "suburb" => Ok(Self::Suburb),
            _ => Err(unknown("location type", "center, suburb", value)),
        }
    }
}

/// Answers collected from (or on behalf of) the person seeking care.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonQuestionnaire {
    pub chronic_disease_count: u32,
    pub needs_monitoring: bool,
    pub needs_rehabilitation: bool,
    pub needs_assistive_device: bool,

    pub eats_independently: bool,
    pub washes_independently: bool,
    pub mobility: Mobility,

    pub cognitive_status: CognitiveStatus,
    pub loneliness: LonelinessLevel,
    /// Desired social contacts per week.
    pub social_need_per_week: u32,

    pub family_distance_km: f64,
    pub visits_per_week: u32,
    pub needs_pickup: bool,

    pub service_type: ServiceType,
    pub max_budget: u32,
}

/// Free-text identity of a facility, carried through scoring untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityIdentity {
    pub name: String,
    pub address: String,
    pub contact: String,
    #[serde(default)]
    pub description: String,
}

/// Self-assessment submitted by a care facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityQuestionnaire {
    #[serde(flatten)]
    pub identity: FacilityIdentity,

    pub has_infirmary: bool,
    pub rehab_equipment_types: u32,
    pub has_emergency_response: bool,
    pub hospital_cooperation: bool,

    pub care_grade: CareGrade,
    pub special_diet: bool,
    /// Accessibility self-rating on a 1-5 scale.
    pub barrier_free_score: u8,
    pub safety_facilities: bool,

    pub activity_frequency: ActivityFrequency,
    pub psychological_support: bool,

    pub location_type: LocationType,
    pub public_transport: bool,
    pub shuttle_service: bool,

    pub service_types: ServiceTypes,
    pub price: u32,
}

/// Normalized care requirements of one person, each dimension on the target scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedVector {
    pub medical: f64,
    pub life: f64,
    pub spiritual: f64,
    pub traffic: f64,
    /// Reserved for weighting service types; always 1.0.
    pub service_type_weight: f64,
    pub budget: u32,
    pub service_type: ServiceType,
}

/// Normalized service capability of one facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityProfile {
    #[serde(flatten)]
    pub identity: FacilityIdentity,
    pub medical_score: f64,
    pub life_score: f64,
    pub spiritual_score: f64,
    pub traffic_score: f64,
    pub service_types: ServiceTypes,
    pub price: u32,
}

impl CapabilityProfile {
    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn offers(&self, service_type: &ServiceType) -> bool {
        self.service_types.contains(service_type)
    }
}
