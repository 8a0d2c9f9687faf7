//! Node table loading.
//!
//! The table carries one row per network node with its normalized
//! coordinates, neighbour list and a per-neighbour edge distance mapping.
//! The distance cell is normally a Python-style dict literal; a hand-rolled
//! `key: value` parser covers cells that are not valid structured data.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{Error, Result};
use crate::graph::{Graph, Position};

const ID_COLUMN: &str = "id";
const COORDINATES_COLUMN: &str = "normalized_coordinates";
const CONNECTIONS_COLUMN: &str = "connections";
const DISTANCES_COLUMN: &str = "edge_distances";

/// Graph produced by the loader together with anything it had to work around.
#[derive(Debug, Clone)]
pub struct LoadedGraph {
    pub graph: Graph,
    pub diagnostics: Diagnostics,
}

/// Load the node table at `path`.
///
/// A missing or unreadable file is fatal; malformed cells are not.
pub fn load_graph(path: &Path) -> Result<LoadedGraph> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            path: path.to_path_buf(),
        });
    }
    debug!(path = %path.display(), "loading node table");
    let file = fs::File::open(path)?;
    let loaded = load_graph_from_reader(file)?;
    info!(
        path = %path.display(),
        nodes = loaded.graph.len(),
        diagnostics = loaded.diagnostics.len(),
        "loaded node table"
    );
    Ok(loaded)
}

/// Load a node table from any reader (file, in-memory buffer, ...).
pub fn load_graph_from_reader<R: Read>(reader: R) -> Result<LoadedGraph> {
    let mut csv_reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let columns = Columns::resolve(&headers)?;

    let mut builder = Graph::builder();
    let mut diagnostics = Diagnostics::new();

    let mut row_num: u64 = 1; // header is line 1
    for result in csv_reader.records() {
        row_num += 1;
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                diagnostics.push(Diagnostic::MalformedRow {
                    row: row_num,
                    reason: err.to_string(),
                });
                continue;
            }
        };
        if record.len() != headers.len() {
            diagnostics.push(Diagnostic::MalformedRow {
                row: row_num,
                reason: format!(
                    "expected {} fields, found {}",
                    headers.len(),
                    record.len()
                ),
            });
            continue;
        }
        let cell = |index: usize| record.get(index).unwrap_or("").trim();

        let node_id = cell(columns.id);
        if node_id.is_empty() {
            diagnostics.push(Diagnostic::MalformedRow {
                row: row_num,
                reason: "missing node id".to_string(),
            });
            continue;
        }

        let raw_coordinates = cell(columns.coordinates);
        let position = parse_coordinates(raw_coordinates);
        if position.is_none() {
            diagnostics.push(Diagnostic::MalformedCoordinates {
                row: row_num,
                node: node_id.to_string(),
                raw: raw_coordinates.to_string(),
            });
        }

        let connections = parse_connections(cell(columns.connections));

        let raw_distances = cell(columns.distances);
        let distances = match parse_edge_distances(raw_distances) {
            Some(map) => map,
            None => {
                diagnostics.push(Diagnostic::MalformedEdgeWeights {
                    row: row_num,
                    node: node_id.to_string(),
                    raw: raw_distances.to_string(),
                });
                HashMap::new()
            }
        };

        builder.add_node(node_id, position);

        for connection in &connections {
            let Some(&weight) = distances.get(connection) else {
                continue;
            };
            let rejection = if connection == node_id {
                Some("self loop")
            } else if !weight.is_finite() || weight < 0.0 {
                Some("edge weight must be a non-negative number")
            } else {
                None
            };
            if let Some(reason) = rejection {
                diagnostics.push(Diagnostic::InvalidEdge {
                    row: row_num,
                    from: node_id.to_string(),
                    to: connection.clone(),
                    reason: reason.to_string(),
                });
                continue;
            }
            builder.add_edge(node_id, connection, weight);
        }
    }

    Ok(LoadedGraph {
        graph: builder.build(),
        diagnostics,
    })
}

struct Columns {
    id: usize,
    coordinates: usize,
    connections: usize,
    distances: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |column: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|header| header.trim().eq_ignore_ascii_case(column))
                .ok_or(Error::MissingColumn { column })
        };

        Ok(Self {
            id: find(ID_COLUMN)?,
            coordinates: find(COORDINATES_COLUMN)?,
            connections: find(CONNECTIONS_COLUMN)?,
            distances: find(DISTANCES_COLUMN)?,
        })
    }
}

/// Parse `"[x, y]"` into a position.
fn parse_coordinates(raw: &str) -> Option<Position> {
    let inner = raw.trim().trim_start_matches('[').trim_end_matches(']');
    let mut parts = inner.split(',').map(str::trim);
    let x = parts.next()?.parse::<f64>().ok()?;
    let y = parts.next()?.parse::<f64>().ok()?;
    if parts.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Position::new(x, y))
}

/// Parse `"['a', 'b']"` into neighbour identifiers.
fn parse_connections(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|part| strip_quotes(part).to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

/// Parse the neighbour → distance cell.
///
/// Tries structured data first (single quotes normalized to double quotes),
/// then the `key: value, key: value` form. `None` when both fail.
fn parse_edge_distances(raw: &str) -> Option<HashMap<String, f64>> {
    if raw.is_empty() {
        return Some(HashMap::new());
    }

    let normalized = raw.replace('\'', "\"");
    if let Ok(map) = serde_json::from_str::<HashMap<String, f64>>(&normalized) {
        return Some(map);
    }

    parse_edge_distances_fallback(raw)
}

fn parse_edge_distances_fallback(raw: &str) -> Option<HashMap<String, f64>> {
    let inner = raw.trim().trim_start_matches('{').trim_end_matches('}');
    let mut map = HashMap::new();
    for part in inner.split(',') {
        if !part.contains(':') {
            continue;
        }
        let (key, value) = part.split_once(':')?;
        if value.contains(':') {
            return None;
        }
        let value = strip_quotes(value).parse::<f64>().ok()?;
        map.insert(strip_quotes(key).to_string(), value);
    }
    if map.is_empty() && !inner.trim().is_empty() {
        return None;
    }
    Some(map)
}

fn strip_quotes(raw: &str) -> &str {
    raw.trim().trim_matches(|c| c == '\'' || c == '"').trim()
}
