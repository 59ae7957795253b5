use crate::error::ScoringError;
use crate::models::LocationRegistry;
use geo::Point;
use std::collections::HashMap;
use tracing::info;

/// Mean Earth radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Albers standard parallels and origin, chosen for Britain and Ireland
const STANDARD_PARALLEL_1_DEG: f64 = 51.0;
const STANDARD_PARALLEL_2_DEG: f64 = 57.0;
const ORIGIN_LAT_DEG: f64 = 54.0;
const ORIGIN_LON_DEG: f64 = -3.5;

/// Project a geographic point into planar Albers equal-area coordinates.
///
/// # Arguments
/// * `point` - geographic point with x = longitude, y = latitude, in degrees
///
/// # Returns
/// Planar (x, y) in meters from the projection origin
#[inline]
pub fn project_equal_area(point: Point<f64>) -> (f64, f64) {
    let phi = point.y().to_radians();
    let lambda = point.x().to_radians();
    let phi1 = STANDARD_PARALLEL_1_DEG.to_radians();
    let phi2 = STANDARD_PARALLEL_2_DEG.to_radians();
    let phi0 = ORIGIN_LAT_DEG.to_radians();
    let lambda0 = ORIGIN_LON_DEG.to_radians();

    let n = (phi1.sin() + phi2.sin()) / 2.0;
    let c = phi1.cos().powi(2) + 2.0 * n * phi1.sin();
    let rho = EARTH_RADIUS_M * (c - 2.0 * n * phi.sin()).sqrt() / n;
    let rho0 = EARTH_RADIUS_M * (c - 2.0 * n * phi0.sin()).sqrt() / n;
    let theta = n * (lambda - lambda0);

    (rho * theta.sin(), rho0 - rho * theta.cos())
}

/// Distance in kilometers between two geographic points, computed as the
/// Euclidean distance between their equal-area projections.
///
/// An approximation of great-circle distance that is adequate at national
/// scale, and symmetric by construction since the projection is fixed.
#[inline]
pub fn projected_distance_km(start: Point<f64>, end: Point<f64>) -> f64 {
    let (x1, y1) = project_equal_area(start);
    let (x2, y2) = project_equal_area(end);
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt() / 1000.0
}

/// Precomputed pairwise distances between named locations.
///
/// Built once before scoring starts; scoring runs per record in a tight loop
/// and must not re-run the projection per lookup. Rebuild from scratch if the
/// registry changes.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    distances: HashMap<(String, String), f64>,
}

impl DistanceTable {
    /// Materialize the full table over every ordered pair of `names`.
    ///
    /// Fails fast on any name absent from the registry.
    pub fn build(registry: &LocationRegistry, names: &[String]) -> Result<Self, ScoringError> {
        let mut distances = HashMap::with_capacity(names.len() * names.len());

        for origin in names {
            let start = registry.get(origin)?;
            for destination in names {
                let end = registry.get(destination)?;
                distances.insert(
                    (origin.clone(), destination.clone()),
                    projected_distance_km(start, end),
                );
            }
        }

        info!(
            locations = names.len(),
            pairs = distances.len(),
            "distance table built"
        );

        Ok(Self { distances })
    }

    /// Build over every location in the registry.
    pub fn build_all(registry: &LocationRegistry) -> Result<Self, ScoringError> {
        let names: Vec<String> = registry.names().map(String::from).collect();
        Self::build(registry, &names)
    }

    /// Build directly from precomputed entries. Intended for tests and for
    /// callers with an alternate distance source.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = ((String, String), f64)>,
    {
        Self {
            distances: pairs.into_iter().collect(),
        }
    }

    /// Distance in kilometers between two named locations.
    pub fn distance_km(&self, from: &str, to: &str) -> Result<f64, ScoringError> {
        self.distances
            .get(&(from.to_string(), to.to_string()))
            .copied()
            .ok_or_else(|| ScoringError::MissingDistance {
                from: from.to_string(),
                to: to.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uk_table() -> DistanceTable {
        DistanceTable::build_all(&LocationRegistry::uk_default()).unwrap()
    }

    #[test]
    fn test_projected_distance_zero_for_same_point() {
        let london = Point::new(-0.0825, 51.5132);
        assert!(projected_distance_km(london, london) < 1e-9);
    }

    #[test]
    fn test_projected_distance_london_to_manchester() {
        // Great-circle distance is roughly 262 km
        let london = Point::new(-0.08250200435346153, 51.513155476370905);
        let manchester = Point::new(-2.2313297178477827, 53.47749644768501);

        let distance = projected_distance_km(london, manchester);
        assert!(
            distance > 240.0 && distance < 285.0,
            "expected ~262km, got {}",
            distance
        );
    }

    #[test]
    fn test_table_covers_all_ordered_pairs() {
        let table = uk_table();
        assert_eq!(table.len(), 13 * 13);
    }

    #[test]
    fn test_table_is_symmetric_with_zero_diagonal() {
        let registry = LocationRegistry::uk_default();
        let table = uk_table();

        let names: Vec<&str> = registry.names().collect();
        for a in &names {
            assert!(table.distance_km(a, a).unwrap() < 1e-9);
            for b in &names {
                let forward = table.distance_km(a, b).unwrap();
                let backward = table.distance_km(b, a).unwrap();
                assert!(
                    (forward - backward).abs() < 1e-9,
                    "asymmetric: {} -> {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_build_fails_on_unknown_location() {
        let registry = LocationRegistry::uk_default();
        let names = vec!["London".to_string(), "Paris".to_string()];
        assert!(matches!(
            DistanceTable::build(&registry, &names),
            Err(ScoringError::UnknownLocation(name)) if name == "Paris"
        ));
    }

    #[test]
    fn test_missing_pair_lookup_is_an_error() {
        let table = DistanceTable::from_pairs([(
            ("London".to_string(), "Leeds".to_string()),
            272.0,
        )]);
        assert!(table.distance_km("London", "Leeds").is_ok());
        assert!(matches!(
            table.distance_km("Leeds", "London"),
            Err(ScoringError::MissingDistance { .. })
        ));
    }
}
