//! The demo restaurant: 16 tables in 4 sections.
//!
//! Each section is a row of four tables (2, 4, 4, 6 seats) with chain
//! adjacency inside the row, so the combining policy can build two- and
//! three-table runs but never joins tables across sections.

use seat_core::SectionId;
use seat_floor::{FloorPlan, FloorPlanBuilder};

pub fn build_floor() -> FloorPlan {
    let mut b = FloorPlanBuilder::new();

    for section in 0..4u16 {
        let ids: Vec<_> = [2, 4, 4, 6]
            .into_iter()
            .map(|capacity| b.add_table(capacity, SectionId(section)))
            .collect();
        for pair in ids.windows(2) {
            b.add_adjacency(pair[0], pair[1]);
        }
    }

    b.build()
}
