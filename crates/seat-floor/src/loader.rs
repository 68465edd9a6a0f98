//! CSV floor-plan loader.
//!
//! # CSV format
//!
//! One row per table.  Table ids must be dense from 0 (any row order).
//!
//! ```csv
//! table_id,capacity,section,neighbors
//! 0,4,0,1
//! 1,4,1,0;2
//! 2,8,2,1
//! ```
//!
//! **`neighbors`** is a `;`-separated list of table ids (empty for an
//! isolated table).  Adjacency is symmetrized on load: listing `1` under
//! table 0 is enough, the reverse edge is implied.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use seat_core::{SectionId, TableId};

use crate::layout::{FloorPlan, FloorPlanBuilder};
use crate::LoadError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TableRecord {
    table_id:  u32,
    capacity:  u32,
    section:   u16,
    neighbors: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`FloorPlan`] from a CSV file.
pub fn load_floor_csv(path: &Path) -> Result<FloorPlan, LoadError> {
    let file = std::fs::File::open(path).map_err(LoadError::Io)?;
    load_floor_reader(file)
}

/// Like [`load_floor_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded plans.
pub fn load_floor_reader<R: Read>(reader: R) -> Result<FloorPlan, LoadError> {
    // ── Parse CSV rows ────────────────────────────────────────────────────
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut by_id: HashMap<u32, TableRecord> = HashMap::new();

    for result in csv_reader.deserialize::<TableRecord>() {
        let row = result.map_err(|e| LoadError::Parse(e.to_string()))?;
        let id = row.table_id;
        if by_id.insert(id, row).is_some() {
            return Err(LoadError::Parse(format!("duplicate table_id {id}")));
        }
    }
    let count = by_id.len() as u32;

    // ── Build the plan in id order ────────────────────────────────────────
    let mut builder = FloorPlanBuilder::new();
    let mut edges: Vec<(TableId, TableId)> = Vec::new();

    for id in 0..count {
        let row = by_id.remove(&id).ok_or_else(|| {
            LoadError::Parse(format!("table ids must be dense from 0; missing {id}"))
        })?;
        if row.capacity == 0 {
            return Err(LoadError::Parse(format!("table {id} has capacity 0")));
        }
        builder.add_table(row.capacity, SectionId(row.section));

        for part in row.neighbors.split(';').filter(|s| !s.trim().is_empty()) {
            let n: u32 = part.trim().parse().map_err(|_| {
                LoadError::Parse(format!("table {id}: invalid neighbor id {part:?}"))
            })?;
            if n >= count {
                return Err(LoadError::Parse(format!(
                    "table {id}: neighbor {n} out of range (have {count} tables)"
                )));
            }
            if n == id {
                return Err(LoadError::Parse(format!("table {id} lists itself as neighbor")));
            }
            edges.push((TableId(id), TableId(n)));
        }
    }

    for (a, b) in edges {
        builder.add_adjacency(a, b);
    }

    Ok(builder.build())
}
