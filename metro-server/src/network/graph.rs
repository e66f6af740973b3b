//! Graph store for the transit network.

use std::collections::HashMap;

use crate::domain::StationCode;

use super::edge::{EdgeAttributes, EdgeRecord};
use super::error::GraphError;

/// Dense index of a station within a [`Network`].
///
/// Ids are assigned in the order stations are first seen in the edge list,
/// which makes every traversal over the network deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub usize);

/// Undirected, edge-labeled transit graph.
///
/// Each unordered station pair holds at most one set of attributes. When
/// the edge list repeats a pair, the last record wins.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationCode;
/// use metro_server::network::{EdgeRecord, Network};
///
/// let network = Network::build(vec![
///     EdgeRecord::new("A", "B", 5.0, Some("M1")),
///     EdgeRecord::new("B", "C", 3.0, None),
/// ])
/// .unwrap();
///
/// let a = StationCode::parse("A").unwrap();
/// let b = StationCode::parse("B").unwrap();
/// assert!(network.has_station(&a));
/// assert_eq!(network.edge_attributes(&b, &a).unwrap().time, 5.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Station codes indexed by `StationId`.
    stations: Vec<StationCode>,

    /// Reverse lookup from code to id.
    index: HashMap<StationCode, StationId>,

    /// Per-station list of (neighbour, edge slot) in insertion order.
    adjacency: Vec<Vec<(StationId, usize)>>,

    /// Edge attributes, addressed by slot.
    edges: Vec<EdgeAttributes>,

    /// Slot of the edge joining an unordered pair, keyed (lower id, higher id).
    slots: HashMap<(StationId, StationId), usize>,
}

impl Network {
    /// Build a network from an edge list.
    ///
    /// Station codes are normalized. Edge records without a line get the
    /// unknown-line label. Negative or non-finite times are rejected since
    /// shortest-path search requires non-negative weights; zero is allowed.
    pub fn build<I>(records: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut network = Self::default();

        for (index, record) in records.into_iter().enumerate() {
            let from = StationCode::parse_normalized(&record.from)
                .map_err(|source| GraphError::InvalidStation { index, source })?;
            let to = StationCode::parse_normalized(&record.to)
                .map_err(|source| GraphError::InvalidStation { index, source })?;

            if !record.time.is_finite() || record.time < 0.0 {
                return Err(GraphError::InvalidEdgeTime {
                    index,
                    from: record.from,
                    to: record.to,
                    time: record.time,
                });
            }

            let a = network.intern(from);
            let b = network.intern(to);
            network.insert_edge(a, b, EdgeAttributes::from_record(record));
        }

        Ok(network)
    }

    fn intern(&mut self, code: StationCode) -> StationId {
        if let Some(&id) = self.index.get(&code) {
            return id;
        }

        let id = StationId(self.stations.len());
        self.stations.push(code.clone());
        self.index.insert(code, id);
        self.adjacency.push(Vec::new());
        id
    }

    fn insert_edge(&mut self, a: StationId, b: StationId, attributes: EdgeAttributes) {
        let key = (a.min(b), a.max(b));

        if let Some(&slot) = self.slots.get(&key) {
            // Repeated pair: overwrite in place, adjacency is unchanged
            self.edges[slot] = attributes;
            return;
        }

        let slot = self.edges.len();
        self.edges.push(attributes);
        self.slots.insert(key, slot);

        self.adjacency[a.0].push((b, slot));
        if a != b {
            self.adjacency[b.0].push((a, slot));
        }
    }

    /// Check whether a station is part of the network.
    pub fn has_station(&self, code: &StationCode) -> bool {
        self.index.contains_key(code)
    }

    /// Look up the id of a station.
    pub fn station_id(&self, code: &StationCode) -> Option<StationId> {
        self.index.get(code).copied()
    }

    /// Returns the code of a station id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this network.
    pub fn station(&self, id: StationId) -> &StationCode {
        &self.stations[id.0]
    }

    /// All station codes, in first-seen order.
    pub fn stations(&self) -> &[StationCode] {
        &self.stations
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of distinct station pairs joined by an edge.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Attributes of the edge joining two stations, in either direction.
    pub fn edge_attributes(&self, a: &StationCode, b: &StationCode) -> Option<&EdgeAttributes> {
        let a = self.station_id(a)?;
        let b = self.station_id(b)?;
        self.edge_between(a, b)
    }

    /// Attributes of the edge joining two station ids, in either direction.
    pub fn edge_between(&self, a: StationId, b: StationId) -> Option<&EdgeAttributes> {
        self.slots
            .get(&(a.min(b), a.max(b)))
            .map(|&slot| &self.edges[slot])
    }

    /// Neighbours of a station with the connecting edge, in insertion order.
    pub fn neighbors(&self, id: StationId) -> impl Iterator<Item = (StationId, &EdgeAttributes)> {
        self.adjacency[id.0]
            .iter()
            .map(|&(next, slot)| (next, &self.edges[slot]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::UNKNOWN_LINE;

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn edge(from: &str, to: &str, time: f64, line: &str) -> EdgeRecord {
        EdgeRecord::new(from, to, time, Some(line))
    }

    #[test]
    fn build_registers_stations_in_first_seen_order() {
        let network = Network::build(vec![
            edge("C", "A", 1.0, "M1"),
            edge("A", "B", 1.0, "M1"),
        ])
        .unwrap();

        assert_eq!(network.stations(), &[code("C"), code("A"), code("B")]);
        assert_eq!(network.station_count(), 3);
        assert_eq!(network.edge_count(), 2);
    }

    #[test]
    fn edges_are_undirected() {
        let network = Network::build(vec![edge("A", "B", 5.0, "M1")]).unwrap();

        let forward = network.edge_attributes(&code("A"), &code("B")).unwrap();
        let backward = network.edge_attributes(&code("B"), &code("A")).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.line, "M1");
    }

    #[test]
    fn missing_line_gets_default() {
        let network = Network::build(vec![EdgeRecord::new("A", "B", 5.0, None)]).unwrap();

        let attrs = network.edge_attributes(&code("A"), &code("B")).unwrap();
        assert_eq!(attrs.line, UNKNOWN_LINE);
    }

    #[test]
    fn duplicate_pair_last_write_wins() {
        let network = Network::build(vec![
            edge("A", "B", 5.0, "M1"),
            edge("B", "A", 9.0, "M2"),
        ])
        .unwrap();

        let attrs = network.edge_attributes(&code("A"), &code("B")).unwrap();
        assert_eq!(attrs.time, 9.0);
        assert_eq!(attrs.line, "M2");
        assert_eq!(network.edge_count(), 1);

        let a = network.station_id(&code("A")).unwrap();
        assert_eq!(network.neighbors(a).count(), 1);
    }

    #[test]
    fn codes_are_normalized() {
        let network = Network::build(vec![edge(" a", "b ", 1.0, "M1")]).unwrap();
        assert!(network.has_station(&code("A")));
        assert!(network.has_station(&code("B")));
    }

    #[test]
    fn unknown_station_lookups() {
        let network = Network::build(vec![edge("A", "B", 1.0, "M1")]).unwrap();
        assert!(!network.has_station(&code("Z")));
        assert!(network.station_id(&code("Z")).is_none());
        assert!(network.edge_attributes(&code("A"), &code("Z")).is_none());
    }

    #[test]
    fn non_adjacent_pair_has_no_attributes() {
        let network = Network::build(vec![
            edge("A", "B", 1.0, "M1"),
            edge("B", "C", 1.0, "M1"),
        ])
        .unwrap();
        assert!(network.edge_attributes(&code("A"), &code("C")).is_none());
    }

    #[test]
    fn reject_negative_time() {
        let result = Network::build(vec![
            edge("A", "B", 1.0, "M1"),
            edge("B", "C", -2.0, "M1"),
        ]);

        match result {
            Err(GraphError::InvalidEdgeTime { index, time, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(time, -2.0);
            }
            other => panic!("expected InvalidEdgeTime, got {:?}", other),
        }
    }

    #[test]
    fn reject_non_finite_time() {
        assert!(Network::build(vec![edge("A", "B", f64::NAN, "M1")]).is_err());
        assert!(Network::build(vec![edge("A", "B", f64::INFINITY, "M1")]).is_err());
    }

    #[test]
    fn zero_time_is_accepted() {
        let network = Network::build(vec![edge("A", "B", 0.0, "M1")]).unwrap();
        assert_eq!(network.edge_count(), 1);
    }

    #[test]
    fn reject_empty_station_code() {
        let result = Network::build(vec![edge("A", "", 1.0, "M1")]);
        assert!(matches!(
            result,
            Err(GraphError::InvalidStation { index: 0, .. })
        ));
    }

    #[test]
    fn self_loop_listed_once() {
        let network = Network::build(vec![edge("A", "A", 1.0, "M1")]).unwrap();
        let a = network.station_id(&code("A")).unwrap();
        assert_eq!(network.neighbors(a).count(), 1);
    }

    #[test]
    fn empty_edge_list_builds_empty_network() {
        let network = Network::build(Vec::new()).unwrap();
        assert_eq!(network.station_count(), 0);
        assert!(network.stations().is_empty());
    }
}
