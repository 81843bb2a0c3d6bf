//! Care-facility matching engine.
//!
//! Turns a person's care questionnaire and a catalog of facility capability profiles into a
//! ranked shortlist with per-dimension explanations. See [`matching::MatchEngine`].

pub mod config;
pub mod error;
pub mod matching;
pub mod telemetry;
