//! Place catalog keyed by station.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::StationCode;
use crate::planner::Candidate;

use super::error::CatalogError;
use super::place::Place;

/// Places grouped by station, in source order.
///
/// Order matters: trip search breaks ties by the order candidates are
/// produced, which follows the order stations and places appear here.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalog {
    entries: Vec<(StationCode, Vec<Place>)>,
    index: HashMap<StationCode, usize>,
}

impl PlaceCatalog {
    /// Build a catalog from `(station key, places)` pairs.
    ///
    /// Keys are normalized; keys that normalize to the same station have
    /// their places concatenated in order.
    pub fn from_entries<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (String, Vec<Place>)>,
    {
        let mut catalog = Self::default();

        for (key, places) in entries {
            let station = StationCode::parse_normalized(&key)
                .map_err(|source| CatalogError::InvalidStation { key, source })?;

            for (index, place) in places.iter().enumerate() {
                let invalid = place.walk_minutes.filter(|v| !v.is_finite() || *v < 0.0);
                if let Some(value) = invalid {
                    return Err(CatalogError::InvalidWalkMinutes {
                        station: station.to_string(),
                        index,
                        value,
                    });
                }
            }

            match catalog.index.get(&station) {
                Some(&slot) => catalog.entries[slot].1.extend(places),
                None => {
                    catalog.index.insert(station.clone(), catalog.entries.len());
                    catalog.entries.push((station, places));
                }
            }
        }

        Ok(catalog)
    }

    /// All places at a station, or `None` if the station has no entry.
    pub fn places_at(&self, station: &StationCode) -> Option<&[Place]> {
        self.index
            .get(station)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    /// Places at a station matching an optional kind and a minimum rating.
    ///
    /// Unrated places count as rated 0. Returns `None` if the station has
    /// no entry, and an empty list if it has one but nothing matches.
    pub fn filter(
        &self,
        station: &StationCode,
        kind: Option<&str>,
        min_rating: f64,
    ) -> Option<Vec<&Place>> {
        let places = self.places_at(station)?;

        Some(
            places
                .iter()
                .filter(|p| kind.is_none_or(|k| p.is_kind(k)))
                .filter(|p| p.rating_or_zero() >= min_rating)
                .collect(),
        )
    }

    /// The best-rated places of one kind at a station, highest first.
    ///
    /// Places with equal ratings keep their catalog order.
    pub fn tour(
        &self,
        station: &StationCode,
        kind: &str,
        min_rating: f64,
        max_places: usize,
    ) -> Option<Vec<&Place>> {
        let mut places = self.filter(station, Some(kind), min_rating)?;
        places.sort_by(|a, b| b.rating_or_zero().total_cmp(&a.rating_or_zero()));
        places.truncate(max_places);
        Some(places)
    }

    /// Trip candidates for every place of one kind, in catalog order.
    ///
    /// The extra cost of each candidate is the walk from its station.
    pub fn candidates_of_kind(&self, kind: &str) -> Vec<Candidate<&Place>> {
        self.entries
            .iter()
            .flat_map(|(station, places)| {
                places
                    .iter()
                    .filter(move |p| p.is_kind(kind))
                    .map(move |p| Candidate::new(station.clone(), p.walk_or_zero(), p))
            })
            .collect()
    }

    /// Iterate over stations and their places in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&StationCode, &[Place])> {
        self.entries
            .iter()
            .map(|(station, places)| (station, places.as_slice()))
    }

    /// Number of stations with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no station has an entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of places across all stations.
    pub fn place_count(&self) -> usize {
        self.entries.iter().map(|(_, places)| places.len()).sum()
    }
}

impl Serialize for PlaceCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (station, places) in &self.entries {
            map.serialize_entry(station, places)?;
        }
        map.end()
    }
}
