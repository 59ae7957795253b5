use crate::core::distance::DistanceTable;
use crate::error::ScoringError;
use crate::models::{AffinityTable, Dimension, MoveStatus, SalaryRange, Score, YearRange};
use std::collections::BTreeSet;

const SALARY_LOW_MULTIPLIER: f64 = 1.2;
const SALARY_HIGH_MULTIPLIER: f64 = 1.5;

const SKILLS_STRONG_PCT: f64 = 0.75;
const SKILLS_PARTIAL_PCT: f64 = 0.25;

const AREA_STRONG_PCT: f64 = 0.75;
const AREA_PARTIAL_PCT: f64 = 0.5;

const LOCATION_STRONG_KM: f64 = 50.0;
const LOCATION_PARTIAL_KM: f64 = 100.0;

/// Extension applied to either end of a year range for partial credit
const YEAR_RANGE_TOLERANCE: u32 = 2;

/// Score a candidate's salary band against the searched range.
///
/// Clauses are evaluated in order; the first match wins:
/// 1 if the band tops out below the searched minimum, or the band minimum is
/// below it; 3 if the band minimum is within 1.2x of the searched minimum;
/// 2 if within 1.2x of the searched maximum, or within 1.5x of the searched
/// minimum; 1 otherwise.
pub fn score_salary(
    criteria: &SalaryRange,
    salary_min: u32,
    salary_max: u32,
) -> Result<Score, ScoringError> {
    criteria.validate()?;

    let data_min = salary_min as f64;
    let input_min = criteria.min as f64;
    let input_max = criteria.max as f64;

    let score = if salary_max < criteria.min || data_min / input_min < 1.0 {
        Score::Low
    } else if data_min / input_min <= SALARY_LOW_MULTIPLIER {
        Score::Strong
    } else if data_min / input_max <= SALARY_LOW_MULTIPLIER {
        Score::Partial
    } else if data_min / input_min <= SALARY_HIGH_MULTIPLIER {
        Score::Partial
    } else {
        Score::Low
    };

    Ok(score)
}

/// Score the overlap between searched skills and a candidate's skills.
///
/// The match percentage is taken over the candidate's skill set. An empty set
/// on either side scores 1.
pub fn score_skills(criteria: &BTreeSet<String>, skills: &BTreeSet<String>) -> Score {
    if skills.is_empty() || criteria.is_empty() {
        return Score::Low;
    }

    let matched = skills.intersection(criteria).count();
    let pct = matched as f64 / skills.len() as f64;

    if pct >= SKILLS_STRONG_PCT {
        Score::Strong
    } else if pct >= SKILLS_PARTIAL_PCT {
        Score::Partial
    } else {
        Score::Low
    }
}

/// Shared rule for the sector and major-expertise dimensions.
///
/// Adjacency is keyed by the candidate's own value, never inverted, and a
/// value the table does not cover is a configuration error even on an exact
/// criteria match.
fn score_categorical(
    criteria: &BTreeSet<String>,
    value: &str,
    affinity: &AffinityTable,
) -> Result<Score, ScoringError> {
    let adjacent = affinity.adjacent_to(value)?;

    let score = if criteria.contains(value) {
        Score::Strong
    } else if adjacent.iter().any(|adjacent_value| adjacent_value == value) {
        Score::Partial
    } else {
        Score::Low
    };

    Ok(score)
}

/// Score a candidate's sector against the searched sectors.
pub fn score_sector(
    criteria: &BTreeSet<String>,
    sector: &str,
    affinity: &AffinityTable,
) -> Result<Score, ScoringError> {
    score_categorical(criteria, sector, affinity)
}

/// Score a candidate's major area of expertise against the searched areas.
pub fn score_major_expertise(
    criteria: &BTreeSet<String>,
    expertise: &str,
    affinity: &AffinityTable,
) -> Result<Score, ScoringError> {
    score_categorical(criteria, expertise, affinity)
}

fn score_year_range(
    criteria: &YearRange,
    name: &'static str,
    years: u32,
) -> Result<Score, ScoringError> {
    criteria.validate(name)?;

    let extended_min = criteria.min.saturating_sub(YEAR_RANGE_TOLERANCE);
    let extended_max = criteria.max + YEAR_RANGE_TOLERANCE;

    let score = if years >= criteria.min && years <= criteria.max {
        Score::Strong
    } else if years >= extended_min && years <= extended_max {
        Score::Partial
    } else {
        Score::Low
    };

    Ok(score)
}

/// Score a candidate's years of experience against the searched range.
/// Within the range scores 3, within two years of either end scores 2.
pub fn score_experience(criteria: &YearRange, years: u32) -> Result<Score, ScoringError> {
    score_year_range(criteria, "experience", years)
}

/// Score the years since a candidate last moved role. Same rule as
/// experience, applied to recency.
pub fn score_last_moved(criteria: &YearRange, years: u32) -> Result<Score, ScoringError> {
    score_year_range(criteria, "last moved", years)
}

/// Score work-from-home days offered against the searched day counts.
///
/// Zero days offered against a non-zero ask scores 1; a listed day count
/// scores 3; one day outside the window scores 2, further out scores 1. A day
/// count strictly inside the window but absent from a non-contiguous list
/// scores 2.
pub fn score_wfh(criteria: &[u32], days: u32) -> Result<Score, ScoringError> {
    let (Some(&min), Some(&max)) = (criteria.iter().min(), criteria.iter().max()) else {
        return Err(ScoringError::EmptyCriteria(Dimension::Wfh));
    };

    let score = if days == 0 && min > 0 {
        Score::Low
    } else if criteria.contains(&days) {
        Score::Strong
    } else if days > max {
        if days - max == 1 {
            Score::Partial
        } else {
            Score::Low
        }
    } else if days < min {
        if min - days == 1 {
            Score::Partial
        } else {
            Score::Low
        }
    } else {
        Score::Partial
    };

    Ok(score)
}

/// Score a candidate's location by precomputed distance from the preferred
/// location: within 50 km scores 3, within 100 km scores 2.
pub fn score_location(
    preferred: &str,
    location: &str,
    distances: &DistanceTable,
) -> Result<Score, ScoringError> {
    let distance_km = distances.distance_km(preferred, location)?;

    let score = if distance_km <= LOCATION_STRONG_KM {
        Score::Strong
    } else if distance_km <= LOCATION_PARTIAL_KM {
        Score::Partial
    } else {
        Score::Low
    };

    Ok(score)
}

/// Score a candidate's secondary expertise areas against the searched areas.
///
/// The match percentage is taken over the criteria set, which must be
/// non-empty.
pub fn score_minor_expertise(
    criteria: &BTreeSet<String>,
    areas: &BTreeSet<String>,
) -> Result<Score, ScoringError> {
    if criteria.is_empty() {
        return Err(ScoringError::EmptyCriteria(Dimension::Area));
    }

    let matched = areas.intersection(criteria).count();
    let pct = matched as f64 / criteria.len() as f64;

    let score = if pct >= AREA_STRONG_PCT {
        Score::Strong
    } else if pct >= AREA_PARTIAL_PCT {
        Score::Partial
    } else {
        Score::Low
    };

    Ok(score)
}

/// Score a candidate's move status against the searched statuses.
///
/// Partial credit follows a fixed adjacency keyed on the criteria side:
/// searching Urgently Looking accepts Actively Looking, searching Actively
/// Looking accepts Urgently Looking and Open Minded, and searching Open
/// Minded accepts Actively Looking.
pub fn score_move_status(criteria: &BTreeSet<MoveStatus>, status: MoveStatus) -> Score {
    use MoveStatus::*;

    if criteria.contains(&status) {
        return Score::Strong;
    }

    let adjacent = (criteria.contains(&UrgentlyLooking) && status == ActivelyLooking)
        || (criteria.contains(&ActivelyLooking) && matches!(status, UrgentlyLooking | OpenMinded))
        || (criteria.contains(&OpenMinded) && status == ActivelyLooking);

    if adjacent {
        Score::Partial
    } else {
        Score::Low
    }
}
