// Model exports
pub mod domain;
pub mod tables;

pub use domain::{
    CandidateProfile, Dimension, JobType, MoveStatus, SalaryRange, Score, SearchCriteria,
    YearRange,
};
pub use tables::{AffinityTable, LocationRegistry, WeightTable};
