//! Prospect Algo - candidate suitability scoring for recruitment prospecting
//!
//! This library computes a normalized 0-100 suitability score for candidate
//! profiles against search criteria. Ten independent dimension scorers each
//! map a (criteria, candidate) pair to an ordinal score in {1, 2, 3}, and an
//! aggregation engine weights and normalizes those ordinals into the final
//! percentage. Location scoring reads from a distance table precomputed once
//! over a fixed registry of named locations.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::{aggregate, DistanceTable, Prospector, ProspectResult, ScoredCandidate};
pub use crate::error::ScoringError;
pub use crate::models::{
    AffinityTable, CandidateProfile, Dimension, LocationRegistry, MoveStatus, Score,
    SearchCriteria, WeightTable,
};
