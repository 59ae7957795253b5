use crate::error::ScoringError;
use crate::models::Dimension;
use geo::Point;
use std::collections::BTreeMap;

/// Named locations with fixed coordinates. Points hold (longitude, latitude).
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    coordinates: BTreeMap<String, Point<f64>>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, latitude: f64, longitude: f64) {
        self.coordinates
            .insert(name.into(), Point::new(longitude, latitude));
    }

    pub fn get(&self, name: &str) -> Result<Point<f64>, ScoringError> {
        self.coordinates
            .get(name)
            .copied()
            .ok_or_else(|| ScoringError::UnknownLocation(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.coordinates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// The 13 cities used by the UK/Ireland deployment.
    pub fn uk_default() -> Self {
        let mut registry = Self::new();
        registry.insert("London", 51.513155476370905, -0.08250200435346153);
        registry.insert("Manchester", 53.47749644768501, -2.2313297178477827);
        registry.insert("Leeds", 53.7949487438496, -1.5473966560151104);
        registry.insert("Edinburgh", 55.95203403498788, -3.1898742914884815);
        registry.insert("Birmingham", 52.4789987305319, -1.8925430714968243);
        registry.insert("Glasgow", 55.8646866939085, -4.269841378399823);
        registry.insert("Liverpool", 53.404643176974275, -2.979906679773306);
        registry.insert("Bristol", 51.46463613835566, -2.6102388779496626);
        registry.insert("Sheffield", 53.377935052438396, -1.4630209342324376);
        registry.insert("Cardiff", 51.467556049399334, -3.1667707604181947);
        registry.insert("Belfast", 54.61049723849856, -5.922107085211053);
        registry.insert("Nottingham", 52.947166321488545, -1.1474515251029);
        registry.insert("Dublin", 53.347278280585556, -6.254476908039269);
        registry
    }
}

/// Hand-curated adjacency between categorical values.
///
/// Adjacency is asymmetric and is only ever queried with the candidate-side
/// value as the key. A candidate value with no entry is a configuration error,
/// so the table must cover every value that can appear in the data.
#[derive(Debug, Clone)]
pub struct AffinityTable {
    name: &'static str,
    adjacent: BTreeMap<String, Vec<String>>,
}

impl AffinityTable {
    pub fn new<K, V, I, A>(name: &'static str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, A)>,
        A: IntoIterator<Item = V>,
        K: Into<String>,
        V: Into<String>,
    {
        let adjacent = entries
            .into_iter()
            .map(|(key, values)| {
                (
                    key.into(),
                    values.into_iter().map(Into::into).collect::<Vec<_>>(),
                )
            })
            .collect();
        Self { name, adjacent }
    }

    /// Values considered adjacent to `value`, or a lookup error if the table
    /// does not cover it.
    pub fn adjacent_to(&self, value: &str) -> Result<&[String], ScoringError> {
        self.adjacent
            .get(value)
            .map(Vec::as_slice)
            .ok_or_else(|| ScoringError::UnknownCategory {
                table: self.name,
                value: value.to_string(),
            })
    }

    /// Default sector adjacency for general-insurance disciplines.
    pub fn insurance_sectors() -> Self {
        let disciplines = [
            "General Insurance - Pricing",
            "General Insurance - Capital Modelling",
            "General Insurance - Reserving",
        ];
        Self::new("sector", disciplines.map(|sector| (sector, disciplines)))
    }

    /// Default adjacency between areas of market expertise.
    pub fn insurance_expertise() -> Self {
        Self::new(
            "expertise",
            [
                (
                    "London Market",
                    vec!["Lloyd's Syndicate", "Commercial Lines", "Reinsurer"],
                ),
                (
                    "Lloyd's Syndicate",
                    vec!["London Market", "Commercial Lines", "Reinsurer"],
                ),
                (
                    "Consultancy",
                    vec!["Broker", "Reinsurance Broker", "Regulator"],
                ),
                ("Personal Lines", vec!["Regulator", "Consultancy"]),
                (
                    "Commercial Lines",
                    vec![
                        "Reinsurer",
                        "Reinsurance Broker",
                        "Regulator",
                        "London Market",
                        "Lloyd's Syndicate",
                    ],
                ),
                (
                    "Reinsurer",
                    vec![
                        "Commercial Lines",
                        "Reinsurance Broker",
                        "Lloyd's Syndicate",
                        "London Market",
                    ],
                ),
                (
                    "Broker",
                    vec![
                        "Reinsurance Broker",
                        "Lloyd's Syndicate",
                        "London Market",
                        "Consultancy",
                        "Commercial Lines",
                    ],
                ),
                (
                    "Reinsurance Broker",
                    vec![
                        "Broker",
                        "Lloyd's Syndicate",
                        "London Market",
                        "Consultancy",
                        "Commercial Lines",
                    ],
                ),
                (
                    "Regulator",
                    vec!["Consultancy", "Commercial Lines", "Personal Lines"],
                ),
            ],
        )
    }
}

/// Positive integer weights per dimension, fixed at configuration time.
#[derive(Debug, Clone)]
pub struct WeightTable {
    weights: BTreeMap<Dimension, u32>,
}

impl WeightTable {
    /// Build a weight table, rejecting zero weights.
    pub fn new(weights: BTreeMap<Dimension, u32>) -> Result<Self, ScoringError> {
        for (&dimension, &weight) in &weights {
            if weight == 0 {
                return Err(ScoringError::ZeroWeight(dimension));
            }
        }
        Ok(Self { weights })
    }

    pub fn get(&self, dimension: Dimension) -> Result<u32, ScoringError> {
        self.weights
            .get(&dimension)
            .copied()
            .ok_or(ScoringError::MissingWeight(dimension))
    }

    /// The standard production weighting.
    pub fn standard() -> Self {
        let weights = BTreeMap::from([
            (Dimension::Location, 5),
            (Dimension::Salary, 5),
            (Dimension::Skills, 3),
            (Dimension::Experience, 3),
            (Dimension::Wfh, 3),
            (Dimension::Sector, 3),
            (Dimension::Area, 3),
            (Dimension::Expertise, 5),
            (Dimension::LastMove, 3),
            (Dimension::MoveStatus, 5),
        ]);
        Self { weights }
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let registry = LocationRegistry::uk_default();
        assert_eq!(registry.len(), 13);

        let london = registry.get("London").unwrap();
        assert!((london.y() - 51.513).abs() < 0.01);
        assert!((london.x() - -0.0825).abs() < 0.01);
    }

    #[test]
    fn test_registry_unknown_location_fails_fast() {
        let registry = LocationRegistry::uk_default();
        assert!(matches!(
            registry.get("Paris"),
            Err(ScoringError::UnknownLocation(name)) if name == "Paris"
        ));
    }

    #[test]
    fn test_affinity_is_asymmetric() {
        let expertise = AffinityTable::insurance_expertise();

        // Consultancy lists Broker, but Personal Lines does not list Broker.
        let consultancy = expertise.adjacent_to("Consultancy").unwrap();
        assert!(consultancy.contains(&"Broker".to_string()));
        let personal = expertise.adjacent_to("Personal Lines").unwrap();
        assert!(!personal.contains(&"Broker".to_string()));
    }

    #[test]
    fn test_affinity_unknown_value_is_an_error() {
        let sectors = AffinityTable::insurance_sectors();
        assert!(matches!(
            sectors.adjacent_to("Life Insurance"),
            Err(ScoringError::UnknownCategory { table: "sector", .. })
        ));
    }

    #[test]
    fn test_weight_table_rejects_zero() {
        let weights = BTreeMap::from([(Dimension::Salary, 0)]);
        assert!(matches!(
            WeightTable::new(weights),
            Err(ScoringError::ZeroWeight(Dimension::Salary))
        ));
    }

    #[test]
    fn test_standard_weights() {
        let table = WeightTable::standard();
        assert_eq!(table.get(Dimension::Location).unwrap(), 5);
        assert_eq!(table.get(Dimension::Skills).unwrap(), 3);
        assert_eq!(table.get(Dimension::Expertise).unwrap(), 5);
    }

    #[test]
    fn test_missing_weight_is_an_error() {
        let table = WeightTable::new(BTreeMap::from([(Dimension::Salary, 5)])).unwrap();
        assert!(matches!(
            table.get(Dimension::Skills),
            Err(ScoringError::MissingWeight(Dimension::Skills))
        ));
    }
}
