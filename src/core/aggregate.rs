use crate::error::ScoringError;
use crate::models::{Dimension, Score, WeightTable};
use std::collections::BTreeMap;

/// Combine per-dimension ordinal scores into a suitability percentage.
///
/// Only the dimensions present in `scores` participate. Each score is
/// multiplied by its configured weight, and the weighted total is normalized
/// between the all-1s and all-3s bounds, so the result is 0 exactly when every
/// dimension scored 1 and 100 exactly when every dimension scored 3. Rounding
/// is half-up.
pub fn aggregate(
    scores: &BTreeMap<Dimension, Score>,
    weights: &WeightTable,
) -> Result<u8, ScoringError> {
    if scores.is_empty() {
        return Err(ScoringError::NoScores);
    }

    let mut weighted = 0u32;
    let mut min_possible = 0u32;
    let mut max_possible = 0u32;

    for (&dimension, &score) in scores {
        let weight = weights.get(dimension)?;
        weighted += weight * score.value();
        min_possible += weight;
        max_possible += weight * 3;
    }

    // Weights are validated positive, so the denominator cannot be zero.
    let normalized =
        (weighted - min_possible) as f64 / (max_possible - min_possible) as f64 * 100.0;

    Ok(round_half_up(normalized))
}

/// Round a non-negative percentage half-up to the nearest integer.
#[inline]
fn round_half_up(value: f64) -> u8 {
    (value + 0.5).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_of(entries: &[(Dimension, Score)]) -> BTreeMap<Dimension, Score> {
        entries.iter().copied().collect()
    }

    fn all_dimensions(score: Score) -> BTreeMap<Dimension, Score> {
        Dimension::ALL.iter().map(|&d| (d, score)).collect()
    }

    #[test]
    fn test_all_minimum_scores_aggregate_to_zero() {
        let result = aggregate(&all_dimensions(Score::Low), &WeightTable::standard()).unwrap();
        assert_eq!(result, 0);
    }

    #[test]
    fn test_all_maximum_scores_aggregate_to_hundred() {
        let result = aggregate(&all_dimensions(Score::Strong), &WeightTable::standard()).unwrap();
        assert_eq!(result, 100);
    }

    #[test]
    fn test_all_middle_scores_aggregate_to_fifty() {
        let result = aggregate(&all_dimensions(Score::Partial), &WeightTable::standard()).unwrap();
        assert_eq!(result, 50);
    }

    #[test]
    fn test_subset_of_dimensions_is_accepted() {
        let scores = scores_of(&[
            (Dimension::Salary, Score::Strong),
            (Dimension::Location, Score::Low),
        ]);
        // Equal weights of 5: weighted 20 of [10, 30] -> 50%
        let result = aggregate(&scores, &WeightTable::standard()).unwrap();
        assert_eq!(result, 50);
    }

    #[test]
    fn test_raising_any_score_never_decreases_the_aggregate() {
        let weights = WeightTable::standard();

        for &dimension in &Dimension::ALL {
            let mut scores = all_dimensions(Score::Partial);
            let baseline = aggregate(&scores, &weights).unwrap();

            scores.insert(dimension, Score::Strong);
            let raised = aggregate(&scores, &weights).unwrap();
            assert!(raised >= baseline, "raising {} decreased the aggregate", dimension);

            scores.insert(dimension, Score::Low);
            let lowered = aggregate(&scores, &weights).unwrap();
            assert!(lowered <= baseline, "lowering {} increased the aggregate", dimension);
        }
    }

    #[test]
    fn test_rounding_is_half_up() {
        // Four equally weighted dimensions, one scoring 2: the normalized
        // fraction is 1/8, i.e. exactly 12.5.
        let weights = WeightTable::new(BTreeMap::from([
            (Dimension::Salary, 1),
            (Dimension::Skills, 1),
            (Dimension::Location, 1),
            (Dimension::Sector, 1),
        ]))
        .unwrap();

        let scores = scores_of(&[
            (Dimension::Salary, Score::Partial),
            (Dimension::Skills, Score::Low),
            (Dimension::Location, Score::Low),
            (Dimension::Sector, Score::Low),
        ]);

        assert_eq!(aggregate(&scores, &weights).unwrap(), 13);
    }

    #[test]
    fn test_empty_scores_decline_to_compute() {
        let result = aggregate(&BTreeMap::new(), &WeightTable::standard());
        assert!(matches!(result, Err(ScoringError::NoScores)));
    }

    #[test]
    fn test_missing_weight_for_scored_dimension_is_an_error() {
        let weights = WeightTable::new(BTreeMap::from([(Dimension::Salary, 5)])).unwrap();
        let scores = scores_of(&[(Dimension::Skills, Score::Strong)]);
        assert!(matches!(
            aggregate(&scores, &weights),
            Err(ScoringError::MissingWeight(Dimension::Skills))
        ));
    }

    #[test]
    fn test_weighting_shifts_the_aggregate() {
        let scores = scores_of(&[
            (Dimension::Salary, Score::Strong),
            (Dimension::Skills, Score::Low),
        ]);

        let salary_heavy = WeightTable::new(BTreeMap::from([
            (Dimension::Salary, 5),
            (Dimension::Skills, 1),
        ]))
        .unwrap();
        let skills_heavy = WeightTable::new(BTreeMap::from([
            (Dimension::Salary, 1),
            (Dimension::Skills, 5),
        ]))
        .unwrap();

        let favoring_salary = aggregate(&scores, &salary_heavy).unwrap();
        let favoring_skills = aggregate(&scores, &skills_heavy).unwrap();
        assert!(favoring_salary > favoring_skills);
    }
}
