//! Dataset loading from JSON files.
//!
//! Two files are read once at startup: the edge list of the network and
//! the catalog of places near stations.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::network::{EdgeRecord, GraphError, Network};
use crate::places::{CatalogError, Place, PlaceCatalog};

/// Errors that can occur when loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid JSON of the expected shape
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Edge list was read but the network could not be built
    #[error("invalid network in {}: {source}", path.display())]
    Graph {
        path: PathBuf,
        #[source]
        source: GraphError,
    },

    /// Places were read but the catalog could not be built
    #[error("invalid catalog in {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// On-disk layout of the network file.
#[derive(Debug, Deserialize)]
struct NetworkFile {
    edges: Vec<EdgeRecord>,
}

/// Load the network from a file of the form `{"edges": [...]}`.
pub fn load_network(path: impl AsRef<Path>) -> Result<Network, LoadError> {
    let path = path.as_ref();
    let contents = read(path)?;
    parse_network(&contents).map_err(|e| e.at(path))
}

/// Load the place catalog from a file of the form `{"A": [place, ...]}`.
///
/// Stations keep the order they appear in the file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<PlaceCatalog, LoadError> {
    let path = path.as_ref();
    let contents = read(path)?;
    parse_catalog(&contents).map_err(|e| e.at(path))
}

/// Error from parsing, before the file path is known.
enum ParseError {
    Json(serde_json::Error),
    Graph(GraphError),
    Catalog(CatalogError),
}

impl ParseError {
    fn at(self, path: &Path) -> LoadError {
        let path = path.to_path_buf();
        match self {
            ParseError::Json(source) => LoadError::Json { path, source },
            ParseError::Graph(source) => LoadError::Graph { path, source },
            ParseError::Catalog(source) => LoadError::Catalog { path, source },
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_network(contents: &str) -> Result<Network, ParseError> {
    let file: NetworkFile = serde_json::from_str(contents).map_err(ParseError::Json)?;
    let network = Network::build(file.edges).map_err(ParseError::Graph)?;

    debug!(
        stations = network.station_count(),
        edges = network.edge_count(),
        "parsed network"
    );
    Ok(network)
}

fn parse_catalog(contents: &str) -> Result<PlaceCatalog, ParseError> {
    let raw: Map<String, Value> = serde_json::from_str(contents).map_err(ParseError::Json)?;

    let entries = raw
        .into_iter()
        .map(|(station, places)| {
            serde_json::from_value::<Vec<Place>>(places).map(|places| (station, places))
        })
        .collect::<Result<Vec<_>, serde_json::Error>>()
        .map_err(ParseError::Json)?;

    let catalog = PlaceCatalog::from_entries(entries).map_err(ParseError::Catalog)?;

    debug!(
        stations = catalog.len(),
        places = catalog.place_count(),
        "parsed place catalog"
    );
    Ok(catalog)
}
