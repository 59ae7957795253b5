// Core algorithm exports
pub mod aggregate;
pub mod distance;
pub mod engine;
pub mod scorers;

pub use aggregate::aggregate;
pub use distance::{projected_distance_km, DistanceTable};
pub use engine::{Prospector, ProspectResult, ScoredCandidate, ScoringFailure};
pub use scorers::{
    score_experience, score_last_moved, score_location, score_major_expertise,
    score_minor_expertise, score_move_status, score_salary, score_sector, score_skills, score_wfh,
};
