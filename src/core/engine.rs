use crate::core::aggregate::aggregate;
use crate::core::distance::DistanceTable;
use crate::core::scorers;
use crate::error::ScoringError;
use crate::models::{
    AffinityTable, CandidateProfile, Dimension, Score, SearchCriteria, WeightTable,
};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A candidate with their computed suitability.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub candidate_id: String,
    pub name: String,
    pub location: String,
    pub sector: String,
    pub suitability: u8,
    pub scores: BTreeMap<Dimension, Score>,
    pub matched_skills: Vec<String>,
}

/// A candidate that could not be scored, reported alongside the batch rather
/// than aborting it.
#[derive(Debug)]
pub struct ScoringFailure {
    pub candidate_id: String,
    pub error: ScoringError,
}

/// Result of ranking a batch of candidates.
#[derive(Debug)]
pub struct ProspectResult {
    pub matches: Vec<ScoredCandidate>,
    pub failures: Vec<ScoringFailure>,
    pub total_candidates: usize,
}

/// Scoring orchestrator: applies the dimension scorers per candidate, then
/// the aggregation engine, then ranks.
///
/// All tables are injected at construction and read-only afterward, so one
/// `Prospector` can evaluate any number of candidates.
#[derive(Debug, Clone)]
pub struct Prospector {
    weights: WeightTable,
    sectors: AffinityTable,
    expertise: AffinityTable,
    distances: DistanceTable,
}

impl Prospector {
    pub fn new(
        weights: WeightTable,
        sectors: AffinityTable,
        expertise: AffinityTable,
        distances: DistanceTable,
    ) -> Self {
        Self {
            weights,
            sectors,
            expertise,
            distances,
        }
    }

    /// Construct with the shipped default weighting and affinity tables.
    pub fn with_standard_tables(distances: DistanceTable) -> Self {
        Self::new(
            WeightTable::standard(),
            AffinityTable::insurance_sectors(),
            AffinityTable::insurance_expertise(),
            distances,
        )
    }

    /// Score one candidate against the criteria.
    ///
    /// Only the dimensions present in the criteria are evaluated; their
    /// ordinal scores are aggregated into the suitability percentage.
    pub fn score_candidate(
        &self,
        criteria: &SearchCriteria,
        candidate: &CandidateProfile,
    ) -> Result<ScoredCandidate, ScoringError> {
        criteria.validate()?;
        self.evaluate(criteria, candidate)
    }

    /// Score and rank a batch of candidates.
    ///
    /// Candidates whose contract type is excluded by the criteria are skipped
    /// before scoring. A failure on one candidate does not abort the rest;
    /// failed candidates are reported in `failures`. Results are sorted by
    /// suitability descending (ties broken by candidate id) and truncated to
    /// `limit`.
    pub fn rank(
        &self,
        criteria: &SearchCriteria,
        candidates: &[CandidateProfile],
        limit: usize,
    ) -> Result<ProspectResult, ScoringError> {
        criteria.validate()?;

        let total_candidates = candidates.len();
        let mut matches = Vec::new();
        let mut failures = Vec::new();

        for candidate in candidates {
            if let Some(job_types) = &criteria.job_types {
                if !job_types.contains(&candidate.job_type) {
                    continue;
                }
            }

            match self.evaluate(criteria, candidate) {
                Ok(scored) => matches.push(scored),
                Err(error) => {
                    warn!(
                        candidate_id = %candidate.candidate_id,
                        %error,
                        "candidate could not be scored"
                    );
                    failures.push(ScoringFailure {
                        candidate_id: candidate.candidate_id.clone(),
                        error,
                    });
                }
            }
        }

        matches.sort_by(|a, b| {
            b.suitability
                .cmp(&a.suitability)
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });
        matches.truncate(limit);

        debug!(
            total = total_candidates,
            ranked = matches.len(),
            failed = failures.len(),
            "batch scored"
        );

        Ok(ProspectResult {
            matches,
            failures,
            total_candidates,
        })
    }

    fn evaluate(
        &self,
        criteria: &SearchCriteria,
        candidate: &CandidateProfile,
    ) -> Result<ScoredCandidate, ScoringError> {
        let mut scores = BTreeMap::new();

        if let Some(preferred) = &criteria.location {
            scores.insert(
                Dimension::Location,
                scorers::score_location(preferred, &candidate.location, &self.distances)?,
            );
        }
        if let Some(salary) = &criteria.salary {
            scores.insert(
                Dimension::Salary,
                scorers::score_salary(salary, candidate.salary_min, candidate.salary_max)?,
            );
        }
        if let Some(skills) = &criteria.skills {
            scores.insert(
                Dimension::Skills,
                scorers::score_skills(skills, &candidate.skills),
            );
        }
        if let Some(experience) = &criteria.experience {
            scores.insert(
                Dimension::Experience,
                scorers::score_experience(experience, candidate.years_experience)?,
            );
        }
        if let Some(days) = &criteria.wfh_days {
            scores.insert(Dimension::Wfh, scorers::score_wfh(days, candidate.wfh_days)?);
        }
        if let Some(sectors) = &criteria.sectors {
            scores.insert(
                Dimension::Sector,
                scorers::score_sector(sectors, &candidate.sector, &self.sectors)?,
            );
        }
        if let Some(areas) = &criteria.minor_expertise {
            scores.insert(
                Dimension::Area,
                scorers::score_minor_expertise(areas, &candidate.minor_expertise)?,
            );
        }
        if let Some(expertise) = &criteria.major_expertise {
            scores.insert(
                Dimension::Expertise,
                scorers::score_major_expertise(
                    expertise,
                    &candidate.major_expertise,
                    &self.expertise,
                )?,
            );
        }
        if let Some(last_moved) = &criteria.last_moved {
            scores.insert(
                Dimension::LastMove,
                scorers::score_last_moved(last_moved, candidate.last_moved_years)?,
            );
        }
        if let Some(move_statuses) = &criteria.move_statuses {
            scores.insert(
                Dimension::MoveStatus,
                scorers::score_move_status(move_statuses, candidate.move_status),
            );
        }

        let suitability = aggregate(&scores, &self.weights)?;

        let matched_skills = match &criteria.skills {
            Some(skills) => candidate
                .skills
                .intersection(skills)
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        Ok(ScoredCandidate {
            candidate_id: candidate.candidate_id.clone(),
            name: candidate.name.clone(),
            location: candidate.location.clone(),
            sector: candidate.sector.clone(),
            suitability,
            scores,
            matched_skills,
        })
    }
}
