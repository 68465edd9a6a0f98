//! Floor plan representation and builder.
//!
//! # Data layout
//!
//! The plan is a small undirected graph: one [`Table`] per node, each with a
//! fixed capacity and section, plus a sorted neighbor list per table.
//! Neighbor lists (rather than a CSR arrangement) fit the access pattern
//! here: combining policies ask "is `b` adjacent to `a`?" and "give me `a`'s
//! handful of neighbors", never "scan every edge" — and real floor plans top
//! out at a few dozen tables with degree ≤ 4.
//!
//! The plan is immutable after [`FloorPlanBuilder::build`]; per-trial mutable
//! state (occupancy, departures) lives in [`Floor`][crate::Floor].

use seat_core::{SectionId, TableId};

// ── Table ─────────────────────────────────────────────────────────────────────

/// One seating resource: fixed capacity, section, and neighbor set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    /// Number of seats; always ≥ 1.
    pub capacity: u32,

    /// The dining-room section this table belongs to.
    pub section: SectionId,

    /// Tables this one can be combined with, sorted ascending.  Symmetric:
    /// `b ∈ neighbors(a)` iff `a ∈ neighbors(b)`.
    pub neighbors: Vec<TableId>,
}

// ── FloorPlan ─────────────────────────────────────────────────────────────────

/// The immutable table graph for one restaurant.
///
/// Construct via [`FloorPlanBuilder`] or [`load_floor_csv`][crate::load_floor_csv].
/// Cloned per Monte Carlo trial (it is a few hundred bytes), so trials share
/// no state.
#[derive(Clone, Debug)]
pub struct FloorPlan {
    tables: Vec<Table>,
    /// Distinct sections in first-seen table order — the rotation order the
    /// section-aware policies start from.
    sections: Vec<SectionId>,
}

impl FloorPlan {
    /// The table with the given id.
    ///
    /// # Panics
    /// Panics if `id` is out of range; plan ids are dense from 0.
    #[inline]
    pub fn table(&self, id: TableId) -> &Table {
        &self.tables[id.index()]
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Iterate `(TableId, &Table)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TableId, &Table)> + '_ {
        self.tables
            .iter()
            .enumerate()
            .map(|(i, t)| (TableId(i as u32), t))
    }

    /// Distinct sections in first-seen order.
    pub fn sections(&self) -> &[SectionId] {
        &self.sections
    }

    /// `true` if `a` and `b` are combinable neighbors.
    #[inline]
    pub fn are_neighbors(&self, a: TableId, b: TableId) -> bool {
        self.tables[a.index()].neighbors.binary_search(&b).is_ok()
    }

    /// The largest single-table capacity on the floor (0 for an empty plan).
    pub fn max_capacity(&self) -> u32 {
        self.tables.iter().map(|t| t.capacity).max().unwrap_or(0)
    }
}

// ── FloorPlanBuilder ──────────────────────────────────────────────────────────

/// Construct a [`FloorPlan`] incrementally, then call [`build`](Self::build).
///
/// Adjacency is declared once per pair in either direction;
/// [`add_adjacency`](Self::add_adjacency) records both directions, and
/// `build()` sorts and deduplicates each neighbor list.
///
/// # Example
///
/// ```
/// use seat_core::SectionId;
/// use seat_floor::FloorPlanBuilder;
///
/// let mut b = FloorPlanBuilder::new();
/// let t0 = b.add_table(4, SectionId(0));
/// let t1 = b.add_table(4, SectionId(0));
/// b.add_adjacency(t0, t1);
/// let plan = b.build();
/// assert!(plan.are_neighbors(t1, t0));
/// ```
pub struct FloorPlanBuilder {
    tables: Vec<Table>,
}

impl FloorPlanBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Add a table and return its id (sequential from 0).
    ///
    /// # Panics
    /// Panics in debug mode if `capacity == 0`.
    pub fn add_table(&mut self, capacity: u32, section: SectionId) -> TableId {
        debug_assert!(capacity > 0, "table capacity must be >= 1");
        let id = TableId(self.tables.len() as u32);
        self.tables.push(Table {
            capacity,
            section,
            neighbors: Vec::new(),
        });
        id
    }

    /// Declare `a` and `b` combinable.  Symmetric; self-adjacency is ignored.
    ///
    /// # Panics
    /// Panics if either id has not been added yet.
    pub fn add_adjacency(&mut self, a: TableId, b: TableId) {
        if a == b {
            return;
        }
        self.tables[a.index()].neighbors.push(b);
        self.tables[b.index()].neighbors.push(a);
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Consume the builder and produce a [`FloorPlan`].
    ///
    /// Sorts and deduplicates every neighbor list and collects the distinct
    /// sections in first-seen order.
    pub fn build(mut self) -> FloorPlan {
        for table in &mut self.tables {
            table.neighbors.sort_unstable();
            table.neighbors.dedup();
        }

        let mut sections: Vec<SectionId> = Vec::new();
        for table in &self.tables {
            if !sections.contains(&table.section) {
                sections.push(table.section);
            }
        }

        FloorPlan {
            tables: self.tables,
            sections,
        }
    }
}

impl Default for FloorPlanBuilder {
    fn default() -> Self {
        Self::new()
    }
}
