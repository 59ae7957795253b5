use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// The closed set of scored dimensions.
///
/// Scores and weights are keyed by this enum, so an unknown dimension cannot
/// enter the aggregation by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Location,
    Salary,
    Skills,
    Experience,
    Wfh,
    Sector,
    Area,
    Expertise,
    LastMove,
    MoveStatus,
}

impl Dimension {
    /// All dimensions, in the fixed scoring order.
    pub const ALL: [Dimension; 10] = [
        Dimension::Location,
        Dimension::Salary,
        Dimension::Skills,
        Dimension::Experience,
        Dimension::Wfh,
        Dimension::Sector,
        Dimension::Area,
        Dimension::Expertise,
        Dimension::LastMove,
        Dimension::MoveStatus,
    ];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Location => "Location",
            Dimension::Salary => "Salary",
            Dimension::Skills => "Skills",
            Dimension::Experience => "Experience",
            Dimension::Wfh => "WFH",
            Dimension::Sector => "Sector",
            Dimension::Area => "Area",
            Dimension::Expertise => "Expertise",
            Dimension::LastMove => "Last Move",
            Dimension::MoveStatus => "Move Status",
        };
        f.write_str(name)
    }
}

/// An ordinal match score for a single dimension: 3 is best, 1 is worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Score {
    Low = 1,
    Partial = 2,
    Strong = 3,
}

impl Score {
    #[inline]
    pub fn value(self) -> u32 {
        self as u32
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score as u8
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoringError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Score::Low),
            2 => Ok(Score::Partial),
            3 => Ok(Score::Strong),
            other => Err(ScoringError::InvalidOrdinal(other)),
        }
    }
}

/// How actively a candidate is looking to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MoveStatus {
    #[serde(rename = "Urgently Looking")]
    UrgentlyLooking,
    #[serde(rename = "Actively Looking")]
    ActivelyLooking,
    #[serde(rename = "Open Minded")]
    OpenMinded,
    #[serde(rename = "Unlikely to Move")]
    UnlikelyToMove,
}

/// Contract type, used as a pre-filter before any scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    Permanent,
    Contractor,
}

/// A candidate as supplied by the ingestion layer. Read-only input to scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub candidate_id: String,
    pub name: String,
    pub location: String,
    pub sector: String,
    pub job_type: JobType,
    pub salary_min: u32,
    pub salary_max: u32,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    pub years_experience: u32,
    pub wfh_days: u32,
    pub major_expertise: String,
    #[serde(default)]
    pub minor_expertise: BTreeSet<String>,
    pub last_moved_years: u32,
    pub move_status: MoveStatus,
}

/// An inclusive salary band in the same currency unit as the candidate data.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
}

impl SalaryRange {
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.min == 0 {
            return Err(ScoringError::NonPositiveSalaryMinimum);
        }
        if self.min > self.max {
            return Err(ScoringError::InvalidRange {
                name: "salary",
                min: self.min as i64,
                max: self.max as i64,
            });
        }
        Ok(())
    }
}

/// An inclusive range of whole years.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRange {
    pub min: u32,
    pub max: u32,
}

impl YearRange {
    pub fn validate(&self, name: &'static str) -> Result<(), ScoringError> {
        if self.min > self.max {
            return Err(ScoringError::InvalidRange {
                name,
                min: self.min as i64,
                max: self.max as i64,
            });
        }
        Ok(())
    }
}

/// User-supplied search criteria. Every dimension is optional; only the
/// dimensions present are scored and aggregated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary: Option<SalaryRange>,
    #[serde(default)]
    pub skills: Option<BTreeSet<String>>,
    #[serde(default)]
    pub experience: Option<YearRange>,
    #[serde(default)]
    pub wfh_days: Option<Vec<u32>>,
    #[serde(default)]
    pub sectors: Option<BTreeSet<String>>,
    #[serde(default)]
    pub minor_expertise: Option<BTreeSet<String>>,
    #[serde(default)]
    pub major_expertise: Option<BTreeSet<String>>,
    #[serde(default)]
    pub last_moved: Option<YearRange>,
    #[serde(default)]
    pub move_statuses: Option<BTreeSet<MoveStatus>>,
    #[serde(default)]
    pub job_types: Option<Vec<JobType>>,
}

impl SearchCriteria {
    /// Reject malformed criteria up front, before any candidate is scored.
    ///
    /// Ranges must have min <= max, the salary minimum must be positive, and
    /// the secondary-area and WFH criteria must be non-empty when present.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if let Some(salary) = &self.salary {
            salary.validate()?;
        }
        if let Some(experience) = &self.experience {
            experience.validate("experience")?;
        }
        if let Some(last_moved) = &self.last_moved {
            last_moved.validate("last moved")?;
        }
        if let Some(areas) = &self.minor_expertise {
            if areas.is_empty() {
                return Err(ScoringError::EmptyCriteria(Dimension::Area));
            }
        }
        if let Some(days) = &self.wfh_days {
            if days.is_empty() {
                return Err(ScoringError::EmptyCriteria(Dimension::Wfh));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_ordering() {
        assert!(Score::Low < Score::Partial);
        assert!(Score::Partial < Score::Strong);
        assert_eq!(Score::Strong.value(), 3);
    }

    #[test]
    fn test_score_from_u8() {
        assert_eq!(Score::try_from(2).unwrap(), Score::Partial);
        assert!(matches!(
            Score::try_from(4),
            Err(ScoringError::InvalidOrdinal(4))
        ));
        assert!(matches!(
            Score::try_from(0),
            Err(ScoringError::InvalidOrdinal(0))
        ));
    }

    #[test]
    fn test_move_status_wire_names() {
        let status: MoveStatus = serde_json::from_str("\"Urgently Looking\"").unwrap();
        assert_eq!(status, MoveStatus::UrgentlyLooking);
        assert_eq!(
            serde_json::to_string(&MoveStatus::UnlikelyToMove).unwrap(),
            "\"Unlikely to Move\""
        );
    }

    #[test]
    fn test_salary_range_validation() {
        assert!(SalaryRange { min: 50_000, max: 70_000 }.validate().is_ok());
        assert!(matches!(
            SalaryRange { min: 0, max: 70_000 }.validate(),
            Err(ScoringError::NonPositiveSalaryMinimum)
        ));
        assert!(matches!(
            SalaryRange { min: 80_000, max: 70_000 }.validate(),
            Err(ScoringError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_criteria_rejects_empty_area_set() {
        let criteria = SearchCriteria {
            minor_expertise: Some(BTreeSet::new()),
            ..SearchCriteria::default()
        };
        assert!(matches!(
            criteria.validate(),
            Err(ScoringError::EmptyCriteria(Dimension::Area))
        ));
    }

    #[test]
    fn test_empty_criteria_is_valid() {
        assert!(SearchCriteria::default().validate().is_ok());
    }
}
